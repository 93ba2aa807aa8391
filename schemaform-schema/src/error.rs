//! Error types for schema parsing and normalization.

use thiserror::Error;

/// Error type for the syntax layer.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The text is empty or contains only whitespace.
    #[error("schema text is empty")]
    Empty,

    /// The text is not well-formed JSON.
    #[error("JSON syntax error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ParseError {
    /// Returns the 1-based line of the syntax error, if known.
    #[must_use]
    pub fn line(&self) -> Option<usize> {
        match self {
            Self::Empty => None,
            Self::Json(e) => Some(e.line()),
        }
    }

    /// Returns the 1-based column of the syntax error, if known.
    #[must_use]
    pub fn column(&self) -> Option<usize> {
        match self {
            Self::Empty => None,
            Self::Json(e) => Some(e.column()),
        }
    }
}

/// Error type for documents that cannot be promoted to a form.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// Syntax error.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// The document is JSON `null`.
    #[error("no schema document provided")]
    MissingDocument,

    /// `fields` is present but is not an array.
    #[error("'fields' must be an array, found {found}")]
    FieldsNotArray {
        /// JSON type that was found.
        found: &'static str,
    },

    /// A field entry cannot be interpreted.
    #[error("invalid field at index {index}: {reason}")]
    InvalidField {
        /// Position in the field list.
        index: usize,
        /// What is wrong with it.
        reason: String,
    },

    /// A field has no usable id.
    #[error("field at index {index} has no usable 'id'")]
    MissingFieldId {
        /// Position in the field list.
        index: usize,
    },

    /// Two fields share an id.
    #[error("duplicate field id '{id}' at indices {first} and {second}")]
    DuplicateFieldId {
        /// The repeated id.
        id: String,
        /// Index of the first occurrence.
        first: usize,
        /// Index of the repeated occurrence.
        second: usize,
    },

    /// Unknown field type rejected by policy.
    #[error("unknown type '{type_name}' for field '{id}'")]
    UnknownFieldType {
        /// Field id.
        id: String,
        /// Type name as written.
        type_name: String,
    },

    /// Validation pattern that does not compile.
    #[error("invalid pattern for field '{id}': {source}")]
    InvalidPattern {
        /// Field id.
        id: String,
        /// Regex compilation error.
        #[source]
        source: regex::Error,
    },

    /// Shape issue promoted to an error by strict mode.
    #[error("shape error: {0}")]
    Shape(ShapeIssue),
}

impl SchemaError {
    /// Creates an invalid field error.
    pub fn invalid_field(index: usize, reason: impl Into<String>) -> Self {
        Self::InvalidField {
            index,
            reason: reason.into(),
        }
    }

    /// Returns true if the text itself was not valid JSON.
    #[must_use]
    pub const fn is_syntax(&self) -> bool {
        matches!(self, Self::Parse(_))
    }

    /// Returns true if there was no document at all.
    #[must_use]
    pub const fn is_missing_document(&self) -> bool {
        matches!(self, Self::MissingDocument)
    }
}

/// A tolerated deviation from the expected document shape.
///
/// Issues never stop a document from rendering unless strict shape
/// checking is enabled.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShapeIssue {
    /// The root value is not an object.
    #[error("document root is {found}, expected an object")]
    RootNotObject {
        /// JSON type that was found.
        found: &'static str,
    },

    /// An expected key is absent and was defaulted.
    #[error("'{path}' is missing")]
    MissingKey {
        /// Location of the key.
        path: String,
    },

    /// A value has the wrong JSON type and was defaulted.
    #[error("'{path}' should be {expected}, found {found}")]
    WrongType {
        /// Location of the value.
        path: String,
        /// Expected JSON type.
        expected: &'static str,
        /// JSON type that was found.
        found: &'static str,
    },

    /// A field type outside the known vocabulary was kept.
    #[error("field '{id}' has unknown type '{type_name}'")]
    UnknownFieldType {
        /// Field id.
        id: String,
        /// Type name as written.
        type_name: String,
    },

    /// A select option that could not be used was dropped.
    #[error("'{path}' is not a usable option")]
    SkippedOption {
        /// Location of the option.
        path: String,
    },
}

impl ShapeIssue {
    /// Creates a missing key issue.
    pub fn missing(path: impl Into<String>) -> Self {
        Self::MissingKey { path: path.into() }
    }

    /// Creates a wrong type issue.
    pub fn wrong_type(path: impl Into<String>, expected: &'static str, found: &'static str) -> Self {
        Self::WrongType {
            path: path.into(),
            expected,
            found,
        }
    }
}
