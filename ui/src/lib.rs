#[cfg(feature = "web")]
use leptos::*;
#[cfg(feature = "web")]
use mount::mount_to_body;
#[cfg(feature = "web")]
use wasm_bindgen::prelude::*;

#[cfg(feature = "web")]
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log_level()) {
        web_sys::console::error_1(&format!("logger init failed: {e}").into());
    }
    mount_to_body(|| view! { <App/> });
}

/// Panel transitions log at debug, which release builds leave out.
pub fn log_level() -> log::Level {
    if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    }
}

pub mod config;
pub mod nav;
pub mod pages;
pub mod panels;
#[cfg(feature = "web")]
pub mod app;
#[cfg(feature = "web")]
pub mod routes;
#[cfg(feature = "web")]
pub mod components;

#[cfg(feature = "web")]
pub use crate::app::App;
