//! Persisted light/dark theme toggle.
//!
//! [`controller::ThemeController`] holds the logic and talks only to the
//! capability traits in [`ports`]. [`dom`] binds those to the browser, and
//! [`app`] is a Leptos shell that renders the toggle and installs the
//! controller. Pages rendered elsewhere can call [`init_theme`] from JS instead.

pub mod app;
pub mod components;
pub mod config;
pub mod controller;
pub mod dom;
pub mod error;
pub mod memory;
pub mod ports;
pub mod theme;

use wasm_bindgen::prelude::*;

pub use config::ThemeConfig;
pub use controller::{install, ThemeController};
pub use error::ThemeError;
pub use theme::{Glyph, Theme};

/// Route `log` output and panics to the browser console. Safe to call more
/// than once.
pub fn init_logging() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    // a logger may already be installed by the host page
    let _ = console_log::init_with_level(level);
}

/// Apply the stored theme and wire `#gm-theme-toggle`, using the default
/// identifiers. Returns the applied theme, or `undefined` outside a browser.
#[wasm_bindgen(js_name = initTheme)]
pub fn init_theme() -> Option<String> {
    init_logging();
    dom::install_on_document(ThemeConfig::default()).and_then(|c| c.current_attribute())
}

/// Like [`init_theme`] with overridden identifiers, e.g.
/// `initThemeWith({ storageKey: "site-theme", toggleId: "theme-btn" })`.
/// An unreadable or invalid config falls back to the defaults.
#[wasm_bindgen(js_name = initThemeWith)]
pub fn init_theme_with(config: JsValue) -> Option<String> {
    init_logging();
    let config = ThemeConfig::resolve(serde_wasm_bindgen::from_value::<ThemeConfig>(config));
    dom::install_on_document(config).and_then(|c| c.current_attribute())
}
