//! # site
//!
//! Leptos + WASM frontend for the Okami UI documentation site.
//!
//! This crate contains the route table, the route guards, pages, components,
//! client-side auth state and the small browser helpers (token store, theme,
//! clipboard) they rely on. Authorization decisions themselves live in the
//! `gate` crate; this crate only feeds them state and renders the outcome.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod site_config;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered document.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
