//! Form document root.

use crate::field::FieldSpec;
use serde::{Deserialize, Serialize};

/// Parsed form definition: heading, sub-heading and ordered fields.
///
/// A document is never patched in place once it leaves the parser; every
/// edit produces a fresh document from the full raw text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormDocument {
    /// Heading text.
    #[serde(default)]
    pub form_title: String,
    /// Sub-heading text.
    #[serde(default)]
    pub form_description: String,
    /// Fields in rendering order.
    #[serde(default)]
    pub fields: Vec<FieldSpec>,
}

impl FormDocument {
    /// Creates a new document without fields.
    #[must_use]
    pub fn new(form_title: impl Into<String>, form_description: impl Into<String>) -> Self {
        Self {
            form_title: form_title.into(),
            form_description: form_description.into(),
            fields: Vec::new(),
        }
    }

    /// Appends a field, returning the document.
    #[must_use]
    pub fn with_field(mut self, field: FieldSpec) -> Self {
        self.fields.push(field);
        self
    }

    /// Looks up a field by id.
    #[must_use]
    pub fn field(&self, id: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.id == id)
    }

    /// Returns true if the document has no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Returns the number of fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Iterates over the required fields in order.
    pub fn required_fields(&self) -> impl Iterator<Item = &FieldSpec> {
        self.fields.iter().filter(|f| f.required)
    }

    /// Serializes the document to compact JSON.
    ///
    /// # Errors
    /// Returns `serde_json::Error` if serialization fails.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Serializes the document to indented JSON, as shown in the editor.
    ///
    /// # Errors
    /// Returns `serde_json::Error` if serialization fails.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
