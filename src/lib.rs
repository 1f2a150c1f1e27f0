#![recursion_limit = "256"]

pub mod activity;
#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod app;
pub mod contact;
pub mod content;
pub mod reveal;
pub mod sections;
pub mod typewriter;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    // fails only when a logger is already installed, which then reports it
    if let Err(err) = console_log::init_with_level(log::Level::Debug) {
        log::warn!("console logger not installed: {err}");
    }
    leptos::mount::hydrate_body(App);
}
