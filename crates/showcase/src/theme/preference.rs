//! The theme value itself.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A display mode preference.
///
/// The persisted form is the lowercase name (`"light"` / `"dark"`), which is
/// also the value written to the document's `data-theme` attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Returns the opposite mode.
    ///
    /// ```rust
    /// use showcase::Theme;
    ///
    /// assert_eq!(Theme::Light.toggle(), Theme::Dark);
    /// assert_eq!(Theme::Dark.toggle().toggle(), Theme::Dark);
    /// ```
    pub fn toggle(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// The persisted and attribute form of this mode.
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Parses a stored value.
    ///
    /// Only the exact strings `"light"` and `"dark"` are accepted; anything
    /// else (including other casings or surrounding whitespace) counts as unset.
    pub fn from_stored(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    /// Label for a toggle control: names the mode a click switches *to*.
    pub fn toggle_label(self) -> &'static str {
        match self {
            Theme::Light => "Dark",
            Theme::Dark => "Light",
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string is not a theme name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown theme '{0}', expected 'light' or 'dark'")]
pub struct ParseThemeError(pub String);

impl FromStr for Theme {
    type Err = ParseThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Theme::from_stored(s).ok_or_else(|| ParseThemeError(s.to_string()))
    }
}
