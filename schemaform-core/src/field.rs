//! Field specifications.
//!
//! A [`FieldSpec`] describes one form control: its binding id, kind, caption,
//! required-ness, placeholder, choice options and validation metadata.

use crate::kind::FieldKind;
use crate::{DEFAULT_PATTERN_MESSAGE, DEFAULT_REQUIRED_MESSAGE};
use serde::{Deserialize, Serialize};

/// One entry of a form's field list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSpec {
    /// Binding key for values, control association and error lookup.
    pub id: String,
    /// Control kind.
    #[serde(rename = "type", default)]
    pub kind: FieldKind,
    /// Human-readable caption.
    #[serde(default)]
    pub label: String,
    /// Whether the field must carry a non-empty value on submission.
    #[serde(default)]
    pub required: bool,
    /// Hint text for input controls.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    /// Ordered choices, meaningful only for select fields.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<SelectOption>,
    /// Validation metadata.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validation: Option<FieldValidation>,
}

impl FieldSpec {
    /// Creates a new optional field with no placeholder, options or validation.
    #[must_use]
    pub fn new(id: impl Into<String>, kind: FieldKind, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind,
            label: label.into(),
            required: false,
            placeholder: None,
            options: Vec::new(),
            validation: None,
        }
    }

    /// Marks the field as required.
    #[must_use]
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Sets the placeholder text.
    #[must_use]
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    /// Appends a choice option.
    #[must_use]
    pub fn with_option(mut self, value: impl Into<String>, label: impl Into<String>) -> Self {
        self.options.push(SelectOption::new(value, label));
        self
    }

    /// Sets the validation metadata.
    #[must_use]
    pub fn with_validation(mut self, validation: FieldValidation) -> Self {
        self.validation = Some(validation);
        self
    }

    /// Returns true if the field renders as a choice control.
    #[must_use]
    pub const fn is_select(&self) -> bool {
        self.kind.is_select()
    }

    /// Returns the placeholder, or an empty string when absent.
    #[must_use]
    pub fn placeholder_text(&self) -> &str {
        self.placeholder.as_deref().unwrap_or("")
    }

    /// Returns the options that apply to this field.
    ///
    /// Non-select fields never expose options even if the document carried some.
    #[must_use]
    pub fn effective_options(&self) -> &[SelectOption] {
        if self.is_select() { &self.options } else { &[] }
    }

    /// Returns the validation pattern, if any.
    #[must_use]
    pub fn pattern(&self) -> Option<&str> {
        self.validation.as_ref().and_then(|v| v.pattern.as_deref())
    }

    /// Message shown when a required value is missing.
    #[must_use]
    pub fn required_message(&self) -> &str {
        self.validation
            .as_ref()
            .and_then(|v| v.message.as_deref())
            .unwrap_or(DEFAULT_REQUIRED_MESSAGE)
    }

    /// Message shown when a value does not match the pattern.
    #[must_use]
    pub fn pattern_message(&self) -> &str {
        self.validation
            .as_ref()
            .and_then(|v| v.message.as_deref())
            .unwrap_or(DEFAULT_PATTERN_MESSAGE)
    }
}

/// One `{value, label}` choice of a select field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    /// Submitted value.
    pub value: String,
    /// Displayed caption.
    pub label: String,
}

impl SelectOption {
    /// Creates a new option.
    #[must_use]
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Validation metadata attached to a field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldValidation {
    /// Regular expression the value should match.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
    /// Message overriding the default error text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl FieldValidation {
    /// Creates validation metadata with only a custom message.
    #[must_use]
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            pattern: None,
            message: Some(message.into()),
        }
    }

    /// Creates validation metadata with a pattern and its message.
    #[must_use]
    pub fn pattern(pattern: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            pattern: Some(pattern.into()),
            message: Some(message.into()),
        }
    }
}
