//! # client
//!
//! Leptos + WASM frontend for the writers dashboard.
//!
//! This crate contains pages, components, session/article state, network
//! types, and the REST helpers used to talk to the articles backend. The
//! `ssr` feature renders the shell on the host; the `hydrate` feature builds
//! the browser bundle.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
