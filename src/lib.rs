//! # session-gate
//!
//! Leptos + WASM login gate for the booking site.
//!
//! The `gate` module holds the readiness and redirect state machine: it keeps
//! the login form hidden until the session is known and sends signed-in
//! visitors back to where they came from, exactly once. Everything else here
//! is the browser plumbing around it: the session oracle over the REST auth
//! endpoints, protected-route redirects, and the pages that use them.

pub mod app;
pub mod components;
pub mod config;
pub mod gate;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install logging and hydrate the server-rendered page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console logger already installed: {e}");
    }
    leptos::mount::hydrate_body(app::App);
}
