//! Error types for field validation.

use thiserror::Error;

/// Field-scoped validation error raised on a submission attempt.
///
/// The display text is exactly the message shown beneath the control.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    /// A required field was left empty.
    #[error("{message}")]
    Required {
        /// Message to display.
        message: String,
    },

    /// A non-empty value did not match the field pattern.
    #[error("{message}")]
    PatternMismatch {
        /// Message to display.
        message: String,
    },
}

impl FieldError {
    /// Creates a required error.
    pub fn required(message: impl Into<String>) -> Self {
        Self::Required {
            message: message.into(),
        }
    }

    /// Creates a pattern mismatch error.
    pub fn pattern_mismatch(message: impl Into<String>) -> Self {
        Self::PatternMismatch {
            message: message.into(),
        }
    }

    /// Returns the message to display.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Required { message } | Self::PatternMismatch { message } => message,
        }
    }
}
