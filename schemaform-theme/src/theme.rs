//! Theme values.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Store key under which the preference is persisted.
pub const THEME_KEY: &str = "theme";

/// Colour scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Light scheme.
    #[default]
    Light,
    /// Dark scheme.
    Dark,
}

impl Theme {
    /// Parses a persisted value.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    /// Returns the persisted value.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Class applied to the document root.
    #[must_use]
    pub const fn css_class(&self) -> &'static str {
        self.as_str()
    }

    /// Returns the other theme.
    #[must_use]
    pub const fn toggled(&self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Caption of the toggle button, naming the theme it switches to.
    #[must_use]
    pub const fn toggle_label(&self) -> &'static str {
        match self {
            Self::Light => "Dark Mode",
            Self::Dark => "Light Mode",
        }
    }

    /// Returns true for the dark theme.
    #[must_use]
    pub const fn is_dark(&self) -> bool {
        matches!(self, Self::Dark)
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!(Theme::parse("dark"), Some(Theme::Dark));
        assert_eq!(Theme::parse("light"), Some(Theme::Light));
        assert_eq!(Theme::parse("Dark"), None);
        assert_eq!(Theme::parse(""), None);
    }

    #[test]
    fn test_toggle() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled().toggled(), Theme::Dark);
    }

    #[test]
    fn test_labels_and_classes() {
        assert_eq!(Theme::Light.toggle_label(), "Dark Mode");
        assert_eq!(Theme::Dark.toggle_label(), "Light Mode");
        assert_eq!(Theme::Dark.css_class(), "dark");
        assert!(!Theme::default().is_dark());
    }

    #[test]
    fn test_serde_lowercase() {
        assert_eq!(serde_json::to_string(&Theme::Dark).unwrap(), "\"dark\"");
        let theme: Theme = serde_json::from_str("\"light\"").unwrap();
        assert_eq!(theme, Theme::Light);
    }
}
