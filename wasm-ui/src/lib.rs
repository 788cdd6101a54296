//! Web UI for Crawlic
//!
//! A Yew landing page for the Crawlic scraping API, with a live playground
//! that calls the API from the browser.

mod app;
mod components;
mod sections;
mod transport;

use wasm_bindgen::prelude::*;

/// Entry point for the WASM application.
#[wasm_bindgen(start)]
pub fn run_app() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("Crawlic UI starting against {}", app::api_config().base_url());

    yew::Renderer::<app::App>::new().render();
}
