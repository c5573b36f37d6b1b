use std::fmt;
use std::str::FromStr;

use crate::error::ThemeError;

/// The persisted theme preference. Only two states exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// The theme a toggle switches to from `self`.
    pub fn opposite(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Next theme given the raw attribute currently on the document.
    ///
    /// Only an exact `"dark"` flips back to light; anything else, including a
    /// missing attribute, goes to dark.
    pub fn next_after(current: Option<&str>) -> Self {
        match current {
            Some("dark") => Theme::Light,
            _ => Theme::Dark,
        }
    }
}

impl FromStr for Theme {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(ThemeError::InvalidTheme(other.to_string())),
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Icon shown inside the toggle. The icon advertises the theme you would
/// switch to, so dark mode shows the sun.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Glyph {
    Sun,
    Moon,
}

impl Glyph {
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Dark => Glyph::Sun,
            Theme::Light => Glyph::Moon,
        }
    }

    pub fn other(self) -> Self {
        match self {
            Glyph::Sun => Glyph::Moon,
            Glyph::Moon => Glyph::Sun,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_values() {
        assert_eq!("light".parse::<Theme>().unwrap(), Theme::Light);
        assert_eq!("dark".parse::<Theme>().unwrap(), Theme::Dark);
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        let err = "Dark".parse::<Theme>().unwrap_err();
        assert!(matches!(err, ThemeError::InvalidTheme(ref v) if v == "Dark"));
        assert!("".parse::<Theme>().is_err());
        assert!("system".parse::<Theme>().is_err());
    }

    #[test]
    fn test_next_after_attribute() {
        assert_eq!(Theme::next_after(Some("dark")), Theme::Light);
        assert_eq!(Theme::next_after(Some("light")), Theme::Dark);
        assert_eq!(Theme::next_after(Some("garbage")), Theme::Dark);
        assert_eq!(Theme::next_after(None), Theme::Dark);
    }

    #[test]
    fn test_opposite_is_involution() {
        for theme in [Theme::Light, Theme::Dark] {
            assert_ne!(theme.opposite(), theme);
            assert_eq!(theme.opposite().opposite(), theme);
        }
    }

    #[test]
    fn test_glyph_for_theme() {
        assert_eq!(Glyph::for_theme(Theme::Dark), Glyph::Sun);
        assert_eq!(Glyph::for_theme(Theme::Light), Glyph::Moon);
        assert_eq!(Glyph::Sun.other(), Glyph::Moon);
    }

    #[test]
    fn test_default_is_light() {
        assert_eq!(Theme::default(), Theme::Light);
        assert_eq!(Theme::Dark.to_string(), "dark");
    }
}
