//! # portfolio-client
//!
//! Leptos pages, components, and browser glue for the private portfolio
//! site. Compiled twice: with `ssr` into the server binary for first-paint
//! rendering, and with `hydrate` into WASM for the browser.
//!
//! Pure state (theme precedence, slide tracking, reveal bookkeeping) lives in
//! `state` and is tested natively; `util` holds the thin `web-sys` layer that
//! feeds it.

pub mod app;
pub mod components;
pub mod data;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    // A second init (e.g. after hot reload) is harmless.
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
