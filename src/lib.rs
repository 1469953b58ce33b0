//! # community-client
//!
//! Leptos + WASM client core for the community platform.
//!
//! This crate contains the session-gated navigation, the AI assistant chat
//! widget, and the conversation-starter generator, together with the REST
//! helpers and plain-data state machines they run on. Business pages outside
//! that core render as placeholders.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod routes;
pub mod state;
pub mod util;

/// Browser entry point: install logging and hydrate the server-rendered app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
