//! # fuelmap-client
//!
//! Leptos + WASM frontend for the wildfire fuel-mapping dashboard.
//!
//! Two viewers share one router: the live dashboard at `/` reads statistics
//! and the map manifest from the JSON API and embeds maps in a frame, while
//! the gallery at `/gallery` walks a built-in slide manifest and splices the
//! title, image and description of each fetched slide into the page.
//!
//! The crate is built twice: with `hydrate` for the browser bundle and with
//! `ssr` when linked into the server for first-paint rendering.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: installs browser logging and hydrates the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        leptos::logging::warn!("console logger already installed");
    }
    leptos::mount::hydrate_body(app::App);
}
