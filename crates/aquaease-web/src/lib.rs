//! AquaEase Web Frontend
//!
//! Leptos-based WASM frontend: the marketing pages, the plan builder and
//! the split checkout.

mod api;
mod app;
mod components;
mod content;
mod pages;
mod stripe_js;

pub use app::App;

use wasm_bindgen::prelude::*;

/// WASM entry point
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(App);
}
