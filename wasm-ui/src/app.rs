//! Main application component.

use gloo::console;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use composizioni_rs::Session;

use crate::components::{BatchPanel, ResultPanel, SinglePanel, SupplierSelect};
use crate::download::download_csv;

/// Main application component.
#[function_component(App)]
pub fn app() -> Html {
    let state = use_state(Session::default);
    let file_input = use_node_ref();

    let on_supplier_change = {
        let state = state.clone();
        Callback::from(move |id: String| {
            let mut new_state = (*state).clone();
            new_state.selected = id;
            state.set(new_state);
        })
    };

    let on_text_change = {
        let state = state.clone();
        Callback::from(move |text: String| {
            let mut new_state = (*state).clone();
            new_state.text = text;
            state.set(new_state);
        })
    };

    let on_value_change = {
        let state = state.clone();
        Callback::from(move |value: String| {
            let mut new_state = (*state).clone();
            new_state.value = value;
            state.set(new_state);
        })
    };

    let on_single = {
        let state = state.clone();
        Callback::from(move |_| {
            let mut new_state = (*state).clone();
            // Failures are recorded in the session's error field
            let _ = new_state.transform_single();
            state.set(new_state);
        })
    };

    let on_load = {
        let state = state.clone();
        Callback::from(move |e: web_sys::Event| {
            let state = state.clone();
            let input: HtmlInputElement = e.target_unchecked_into();
            let Some(file) = input.files().and_then(|files| files.get(0)) else {
                return;
            };
            let reader = match web_sys::FileReader::new() {
                Ok(reader) => reader,
                Err(err) => {
                    console::error!("FileReader unavailable", err);
                    return;
                }
            };
            let reader_clone = reader.clone();

            let onload = Closure::wrap(Box::new(move |_: web_sys::Event| {
                if let Some(text) = reader_clone.result().ok().and_then(|r| r.as_string()) {
                    let mut new_state = (*state).clone();
                    let rows = new_state.load_csv(&text);
                    console::log!(format!("loaded {rows} valid rows"));
                    state.set(new_state);
                }
            }) as Box<dyn FnMut(_)>);

            reader.set_onload(Some(onload.as_ref().unchecked_ref()));
            onload.forget();

            if let Err(err) = reader.read_as_text(&file) {
                console::error!("could not read file", err);
            }
        })
    };

    let on_batch = {
        let state = state.clone();
        Callback::from(move |_| {
            let mut new_state = (*state).clone();
            let _ = new_state.transform_batch();
            state.set(new_state);
        })
    };

    let on_download = {
        let state = state.clone();
        Callback::from(move |_| {
            let mut new_state = (*state).clone();
            match new_state.export() {
                Ok(content) => {
                    if let Err(err) = download_csv(&content) {
                        console::error!("download failed", err);
                    }
                }
                Err(_) => state.set(new_state),
            }
        })
    };

    let on_preview = {
        let state = state.clone();
        Callback::from(move |_| {
            let mut new_state = (*state).clone();
            let _ = new_state.show_preview();
            state.set(new_state);
        })
    };

    let on_clear = {
        let state = state.clone();
        let file_input = file_input.clone();
        Callback::from(move |_| {
            let mut new_state = (*state).clone();
            new_state.clear();
            state.set(new_state);
            if let Some(input) = file_input.cast::<HtmlInputElement>() {
                input.set_value("");
            }
        })
    };

    html! {
        <div class="app">
            <header class="header">
                <h1>{ "TRASFORMAZIONE FORMATO NOME COMPOSIZIONI" }</h1>
            </header>

            <main class="main">
                <SupplierSelect
                    selected={state.selected.clone()}
                    on_change={on_supplier_change}
                />

                <SinglePanel
                    text={state.text.clone()}
                    value={state.value.clone()}
                    on_text_change={on_text_change}
                    on_value_change={on_value_change}
                    on_transform={on_single}
                />

                <BatchPanel
                    file_input={file_input}
                    on_load={on_load}
                    on_transform={on_batch}
                    on_download={on_download}
                    on_preview={on_preview}
                    on_clear={on_clear}
                />

                <ResultPanel
                    output={state.output.clone()}
                    error={state.error.clone()}
                    preview={state.preview.clone()}
                />
            </main>
        </div>
    }
}
