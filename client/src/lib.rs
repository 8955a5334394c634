//! # client
//!
//! Leptos + WASM single-page client for the store rating application.
//!
//! This crate holds the app root, role-guarded routing, the navbar, the login
//! and profile pages, browser session storage, and the REST login call. Access
//! rules, navigation links, and the login flow come from the `auth` crate so
//! the browser and the CLI behave the same.

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
