//! Web UI for composizioni-rs
//!
//! A Yew-based form for rewriting supplier product codes, one at a time or
//! from an uploaded `text;value` CSV file.

mod app;
mod components;
mod download;

use wasm_bindgen::prelude::*;

/// Entry point for the WASM application.
#[wasm_bindgen(start)]
pub fn run_app() {
    // Initialize panic hook for better error messages
    console_error_panic_hook::set_once();

    // Mount the Yew app
    yew::Renderer::<app::App>::new().render();
}
