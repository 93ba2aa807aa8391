//! Control descriptors.
//!
//! A descriptor tells the UI layer which input variant to draw for one field.

use schemaform_core::{FieldKind, FieldSpec, SelectOption};

/// Marker appended to the label of a required field.
pub const REQUIRED_MARKER: &str = "*";

/// Icons used by the decorated presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Icon {
    /// Leading icon of generic inputs.
    User,
    /// Leading icon of email inputs.
    Envelope,
    /// Expandability indicator of choice controls.
    ChevronDown,
    /// Submit control.
    Check,
    /// Copy action.
    Copy,
}

impl Icon {
    /// Returns the icon name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Envelope => "envelope",
            Self::ChevronDown => "chevron-down",
            Self::Check => "check",
            Self::Copy => "copy",
        }
    }
}

/// Variant of a rendered control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ControlKind {
    /// Choice control.
    Select {
        /// Choices in document order.
        options: Vec<SelectOption>,
        /// Expandability indicator.
        indicator: Icon,
    },
    /// Single-line input.
    Input {
        /// Input mode, the field type name verbatim.
        input_mode: String,
        /// Hint text, empty when absent.
        placeholder: String,
        /// Leading icon.
        icon: Option<Icon>,
    },
}

/// Description of one field's control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlDescriptor {
    /// Field id.
    pub id: String,
    /// Caption.
    pub label: String,
    /// Whether the field is required.
    pub required: bool,
    /// Label decoration for required fields.
    pub required_marker: Option<&'static str>,
    /// Control variant.
    pub kind: ControlKind,
}

impl ControlDescriptor {
    /// Builds the descriptor for a field.
    #[must_use]
    pub fn from_field(field: &FieldSpec, icons: bool) -> Self {
        let kind = if field.is_select() {
            ControlKind::Select {
                options: field.effective_options().to_vec(),
                indicator: Icon::ChevronDown,
            }
        } else {
            ControlKind::Input {
                input_mode: field.kind.type_name().to_string(),
                placeholder: field.placeholder_text().to_string(),
                icon: icons.then(|| input_icon(field)),
            }
        };

        Self {
            id: field.id.clone(),
            label: field.label.clone(),
            required: field.required,
            required_marker: field.required.then_some(REQUIRED_MARKER),
            kind,
        }
    }

    /// Returns true if this is a choice control.
    #[must_use]
    pub const fn is_select(&self) -> bool {
        matches!(self.kind, ControlKind::Select { .. })
    }

    /// Returns the label with its required marker, if any.
    #[must_use]
    pub fn caption(&self) -> String {
        match self.required_marker {
            Some(marker) => format!("{} {}", self.label, marker),
            None => self.label.clone(),
        }
    }

    /// Value the control holds before any edit.
    ///
    /// A choice control starts on its first option.
    #[must_use]
    pub fn default_value(&self) -> &str {
        match &self.kind {
            ControlKind::Select { options, .. } => {
                options.first().map_or("", |o| o.value.as_str())
            }
            ControlKind::Input { .. } => "",
        }
    }
}

fn input_icon(field: &FieldSpec) -> Icon {
    if field.kind == FieldKind::Email || field.id == "email" {
        Icon::Envelope
    } else {
        Icon::User
    }
}

/// The form's submit control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitControl {
    /// Caption.
    pub label: &'static str,
    /// Decoration.
    pub icon: Option<Icon>,
}

/// The header's copy-to-clipboard action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyAction {
    /// Caption.
    pub label: &'static str,
    /// Decoration.
    pub icon: Option<Icon>,
}
