//! # gallery-client
//!
//! Leptos + WASM frontend for the image gallery: upload an image to the
//! remote image API and browse previously uploaded images with a
//! click-to-enlarge overlay.
//!
//! The view state is a plain reducer (`state::gallery`) driven by an async
//! effect runner (`state::effects`) so the behavior is testable without a
//! browser.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install browser logging and hydrate the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
