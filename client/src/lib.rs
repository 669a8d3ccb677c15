//! # photoblog
//!
//! Leptos + WASM front-end for a small photo blog: a landing page, a photo
//! grid, and a photo-detail page with client-only likes, saves and comments.
//!
//! All data is the static sample catalog in [`catalog`]; nothing is fetched or
//! persisted. Browser-only code paths sit behind the `csr` feature so the
//! state models and route table can be tested natively.

pub mod app;
pub mod catalog;
pub mod components;
pub mod config;
pub mod model;
pub mod pages;
pub mod routes;
pub mod state;
pub mod util;

/// Install browser logging and mount [`app::App`] onto `<body>`.
#[cfg(feature = "csr")]
pub fn mount() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        leptos::logging::warn!("console logger already installed");
    }
    leptos::mount::mount_to_body(app::App);
}
