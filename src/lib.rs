//! # canvascape
//!
//! Leptos + WASM client for a shared, spatial canvas: typed objects
//! (images, text, embedded video) on an infinite 2D plane, kept in sync
//! across clients in real time.
//!
//! The synchronization core lives in `net` (REST repository + push
//! channel) and `state` (injectable signal containers); pure geometry and
//! gesture logic live in the `canvas` crate; `components` maps DOM events
//! onto both.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: set up panic/log forwarding and hydrate the app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(crate::app::App);
}
