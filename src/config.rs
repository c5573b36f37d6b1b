use std::fmt::Display;

use log::warn;
use serde::Deserialize;

use crate::error::ThemeError;
use crate::theme::Glyph;

pub const STORAGE_KEY: &str = "gm-theme";
pub const THEME_ATTRIBUTE: &str = "data-theme";
pub const TOGGLE_ID: &str = "gm-theme-toggle";
pub const ICON_SELECTOR: &str = "i";
pub const SUN_CLASS: &str = "bi-sun";
pub const MOON_CLASS: &str = "bi-moon-stars";

/// Identifiers the controller binds to. Every field has a default, so a page
/// only needs to pass the ones it renames.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ThemeConfig {
    pub storage_key: String,
    pub attribute: String,
    pub toggle_id: String,
    pub icon_selector: String,
    pub sun_class: String,
    pub moon_class: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            storage_key: STORAGE_KEY.to_string(),
            attribute: THEME_ATTRIBUTE.to_string(),
            toggle_id: TOGGLE_ID.to_string(),
            icon_selector: ICON_SELECTOR.to_string(),
            sun_class: SUN_CLASS.to_string(),
            moon_class: MOON_CLASS.to_string(),
        }
    }
}

impl ThemeConfig {
    pub fn glyph_class(&self, glyph: Glyph) -> &str {
        match glyph {
            Glyph::Sun => &self.sun_class,
            Glyph::Moon => &self.moon_class,
        }
    }

    /// Accept a config decoded from the host page, falling back to the
    /// defaults when it could not be decoded or fails [`Self::validate`].
    pub fn resolve<E: Display>(decoded: Result<ThemeConfig, E>) -> ThemeConfig {
        match decoded {
            Ok(config) => match config.validate() {
                Ok(()) => config,
                Err(e) => {
                    warn!("{}, using defaults", e);
                    ThemeConfig::default()
                }
            },
            Err(e) => {
                warn!("unreadable theme config ({}), using defaults", e);
                ThemeConfig::default()
            }
        }
    }

    pub fn validate(&self) -> Result<(), ThemeError> {
        let fields = [
            ("storageKey", &self.storage_key),
            ("attribute", &self.attribute),
            ("toggleId", &self.toggle_id),
            ("iconSelector", &self.icon_selector),
            ("sunClass", &self.sun_class),
            ("moonClass", &self.moon_class),
        ];
        for (name, value) in fields {
            if value.trim().is_empty() {
                return Err(ThemeError::Config(format!("{} must not be empty", name)));
            }
        }
        if self.sun_class == self.moon_class {
            return Err(ThemeError::Config(
                "sunClass and moonClass must differ".to_string(),
            ));
        }
        Ok(())
    }
}
