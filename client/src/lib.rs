//! # client
//!
//! Leptos + WASM front end for the Daybook journal.
//!
//! This crate contains the route pages, presentational components, and the
//! small client-side state models they read. The host binary at the
//! repository root renders it with SSR; the `hydrate` feature builds the WASM
//! bundle that takes over in the browser.

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
    if let Err(e) = console_log::init_with_level(log::Level::Info) {
        leptos::logging::warn!("console logger init failed: {e}");
    }
    leptos::mount::hydrate_body(app::App);
}
