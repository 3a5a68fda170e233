//! # client
//!
//! Leptos frontend for the Smart Space site.
//!
//! This crate contains pages, layout components, the in-memory session store,
//! and the navigation model. The `ssr` feature renders it from the Axum host;
//! the `hydrate` feature builds the WASM bundle that takes over in the browser.

#![recursion_limit = "256"]

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: attach the reactive app to the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
