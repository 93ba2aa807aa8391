//! Field kind vocabulary.
//!
//! A field's `type` selects which control variant is rendered. `select`
//! produces a choice control; everything else is a single-line input whose
//! input mode is the type name itself.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of control a field renders as.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FieldKind {
    /// Plain text input (the default input mode).
    #[default]
    Text,
    /// Email address input.
    Email,
    /// Masked password input.
    Password,
    /// Numeric input.
    Number,
    /// Telephone number input.
    Tel,
    /// URL input.
    Url,
    /// Search box.
    Search,
    /// Calendar date.
    Date,
    /// Time of day.
    Time,
    /// Local date and time.
    DateTimeLocal,
    /// Month picker.
    Month,
    /// Week picker.
    Week,
    /// Color picker.
    Color,
    /// Choice control populated from the field options.
    Select,
    /// A type name outside the known vocabulary, kept verbatim.
    Other(String),
}

impl FieldKind {
    /// Parses a known field kind from its type name.
    ///
    /// Returns `None` for names outside the known vocabulary.
    #[must_use]
    pub fn from_type_name(name: &str) -> Option<Self> {
        match name {
            "text" => Some(Self::Text),
            "email" => Some(Self::Email),
            "password" => Some(Self::Password),
            "number" => Some(Self::Number),
            "tel" => Some(Self::Tel),
            "url" => Some(Self::Url),
            "search" => Some(Self::Search),
            "date" => Some(Self::Date),
            "time" => Some(Self::Time),
            "datetime-local" => Some(Self::DateTimeLocal),
            "month" => Some(Self::Month),
            "week" => Some(Self::Week),
            "color" => Some(Self::Color),
            "select" => Some(Self::Select),
            _ => None,
        }
    }

    /// Returns the type name as written in a schema document.
    #[must_use]
    pub fn type_name(&self) -> &str {
        match self {
            Self::Text => "text",
            Self::Email => "email",
            Self::Password => "password",
            Self::Number => "number",
            Self::Tel => "tel",
            Self::Url => "url",
            Self::Search => "search",
            Self::Date => "date",
            Self::Time => "time",
            Self::DateTimeLocal => "datetime-local",
            Self::Month => "month",
            Self::Week => "week",
            Self::Color => "color",
            Self::Select => "select",
            Self::Other(name) => name,
        }
    }

    /// Returns true if this kind renders as a choice control.
    #[must_use]
    pub const fn is_select(&self) -> bool {
        matches!(self, Self::Select)
    }

    /// Returns true if this kind is part of the known vocabulary.
    #[must_use]
    pub const fn is_known(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

impl From<String> for FieldKind {
    fn from(name: String) -> Self {
        Self::from_type_name(&name).unwrap_or(Self::Other(name))
    }
}

impl From<FieldKind> for String {
    fn from(kind: FieldKind) -> Self {
        match kind {
            FieldKind::Other(name) => name,
            known => known.type_name().to_string(),
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_name())
    }
}
