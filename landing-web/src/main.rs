//! Xeno Landing - Leptos CSR entry point
//!
//! Everything on this page runs client-side: the first-visit disclaimer
//! gate, the patcher-before-executor download flow, scroll-synced
//! navigation, the FAQ accordion, reveal animations, and one well-hidden
//! keyboard sequence. State lives in signals seeded from localStorage;
//! there is no backend.

use leptos::prelude::*;
use wasm_bindgen::prelude::*;

mod app;
mod components;
mod pages;
mod services;
mod state;
mod utils;

use app::App;

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());

    match window().performance() {
        Some(performance) => {
            log::info!("Xeno landing starting ({:.2}ms since navigation)", performance.now())
        }
        None => log::info!("Xeno landing starting"),
    }

    leptos::mount::mount_to_body(|| view! { <App/> });
}
