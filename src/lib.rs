//! # studyhall-client
//!
//! Leptos + WASM frontend for the StudyHall study-group application.
//!
//! This crate contains the pages, components, client-side state, and the
//! auth API boundary. Everything revolves around the session store in
//! [`state::session`]: the auth forms mutate it, the navigation shell and
//! route guards read it. The backend is a remote HTTP JSON API consumed
//! through [`net::api`].

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;

/// Browser entry point: install panic/log hooks, then hydrate the app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
