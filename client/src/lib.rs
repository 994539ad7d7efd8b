//! # client
//!
//! Leptos + WASM frontend for the dugout statistics dashboard.
//!
//! This crate contains the access gate page, the dashboard with its chat,
//! quick-question, and custom-query modes, the query-builder step
//! components, and the result renderers. Query planning, response shaping,
//! and formatting live in the `stats` crate; this crate only collects input,
//! performs browser HTTP, and renders markup.

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
