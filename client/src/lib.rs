//! # client
//!
//! Leptos + WASM frontend for the construction-company site: the public
//! marketing pages and the admin panel, plus the auth-session and request
//! pipeline they share (token store, API client, session controller, image
//! URL normalization).

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
