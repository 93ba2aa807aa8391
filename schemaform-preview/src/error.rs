//! Error types for the preview session.

use thiserror::Error;

/// Error type for preview session operations.
#[derive(Debug, Error)]
pub enum PreviewError {
    /// Theme persistence error.
    #[error("theme error: {0}")]
    Theme(#[from] schemaform_theme::ThemeError),
}

/// Error type for the clipboard collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClipboardError {
    /// No clipboard is attached.
    #[error("no clipboard available")]
    Unavailable,

    /// The system clipboard refused the write.
    #[error("write rejected: {message}")]
    Rejected {
        /// Reason given by the clipboard.
        message: String,
    },
}

impl ClipboardError {
    /// Creates a rejected write error.
    pub fn rejected(message: impl Into<String>) -> Self {
        Self::Rejected {
            message: message.into(),
        }
    }
}
