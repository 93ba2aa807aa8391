//! Error types for theme persistence.

use std::path::PathBuf;
use thiserror::Error;

/// Error type for theme store operations.
#[derive(Debug, Error)]
pub enum ThemeError {
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Store file is not valid JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Store file is valid JSON but not a key-value object.
    #[error("corrupt store file '{}': expected a JSON object", path.display())]
    Corrupt {
        /// Path of the store file.
        path: PathBuf,
    },
}
