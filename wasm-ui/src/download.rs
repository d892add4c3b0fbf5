//! Browser download of the exported CSV.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

use composizioni_rs::{EXPORT_FILE_NAME, EXPORT_MIME_TYPE};

/// Offer `content` as a `dati_trasformati.csv` download.
pub fn download_csv(content: &str) -> Result<(), JsValue> {
    let array = js_sys::Array::new();
    array.push(&JsValue::from_str(content));

    let options = BlobPropertyBag::new();
    options.set_type(EXPORT_MIME_TYPE);
    let blob = Blob::new_with_str_sequence_and_options(&array, &options)?;
    let url = Url::create_object_url_with_blob(&blob)?;

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let anchor: HtmlAnchorElement = document.create_element("a")?.dyn_into()?;

    anchor.set_href(&url);
    anchor.set_download(EXPORT_FILE_NAME);
    anchor.click();

    Url::revoke_object_url(&url)
}
