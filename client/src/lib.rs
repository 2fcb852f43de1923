//! # clinic-client
//!
//! Leptos + WASM frontend for the veterinary clinic client portal.
//!
//! Clients book appointments, review and filter their appointments, and
//! register an account. All business rules live in the remote clinic backend;
//! this crate owns page state, form validation, and request orchestration.
//!
//! LAYOUT
//! ======
//! `net` is the backend boundary, `state` holds headless page models,
//! `actions` sequences backend calls against those models, and `pages` /
//! `components` render them.

pub mod actions;
pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod reference;
pub mod session;
pub mod state;
pub mod util;

/// WASM entry point: installs browser logging and hydrates the SSR shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
