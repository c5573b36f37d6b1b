//! Capabilities the controller is handed instead of reaching for browser
//! globals. Browser bindings live in [`crate::dom`], in-memory ones in
//! [`crate::memory`].
//!
//! Methods take `&self`: DOM handles are shared references, and every call
//! happens on the UI thread.

use crate::error::ThemeError;

/// Key-value persistence for the preference (`localStorage` in a browser).
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>, ThemeError>;
    fn set(&self, key: &str, value: &str) -> Result<(), ThemeError>;
}

/// The element whose attribute styling rules key off (`<html data-theme>`).
pub trait ThemeTarget {
    /// Raw attribute value, if present. Not validated: the toggle treats any
    /// non-`"dark"` value as light.
    fn theme(&self) -> Option<String>;
    fn set_theme(&self, value: &str) -> Result<(), ThemeError>;
}

/// Class-list access on the status icon.
pub trait IconClasses {
    fn add_class(&self, class: &str) -> Result<(), ThemeError>;
    fn remove_class(&self, class: &str) -> Result<(), ThemeError>;
}

/// The control the user activates to flip the theme.
pub trait ToggleControl {
    type Icon: IconClasses;

    fn status_icon(&self) -> Option<Self::Icon>;

    /// Register `handler` to run once per activation, for the lifetime of the
    /// control.
    fn on_activate(&self, handler: Box<dyn FnMut()>) -> Result<(), ThemeError>;
}
