//! # Schemaform Preview
//!
//! Live preview session tying the editor, parser, renderer and theme together.
//!
//! This crate provides:
//! - Editor state that always keeps the raw text and reports syntax errors
//! - `LivePreview`, re-rendering the form on every text change
//! - Preview builder with presentation, schema and validation options
//! - Clipboard collaborator trait and transient notifications
//! - `Workbench`, a preview paired with the process-wide theme service

pub mod builder;
pub mod clipboard;
pub mod defaults;
pub mod editor;
pub mod error;
pub mod session;
pub mod workbench;

pub use builder::PreviewBuilder;
pub use clipboard::{Clipboard, MemoryClipboard, Notification, NotificationKind, Notifications};
pub use defaults::DEFAULT_SCHEMA;
pub use editor::{EditorState, INVALID_JSON_MESSAGE};
pub use error::{ClipboardError, PreviewError};
pub use session::{EditOutcome, LivePreview};
pub use workbench::Workbench;
