//! # client
//!
//! Leptos + WASM frontend for the polyspace site.
//!
//! The interesting part is `state`: an observable store primitive and the
//! two stores built on it (theme preference and viewport scroll metrics).
//! Browser access goes through `util::env`, so everything except the `csr`
//! entry point runs and tests on the host.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install logging and mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
