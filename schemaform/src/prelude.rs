//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and traits.
//!
//! ```ignore
//! use schemaform::prelude::*;
//! ```

// Document model
pub use schemaform_core::{FieldKind, FieldSpec, FieldValidation, FormDocument, SelectOption};

// Schema parsing
pub use schemaform_schema::{
    Normalized, ParseError, PatternPolicy, SchemaError, SchemaOptions, ShapeIssue,
    UnknownTypePolicy, parse_document, parse_form,
};

// Rendering
pub use schemaform_render::{
    ControlDescriptor, ControlKind, FieldError, FieldRegistry, FieldValues, FnSubmitHandler,
    FormState, FormView, PresentationOptions, Preview, Renderer, SubmitHandler, SubmitOutcome,
    ValidationMode,
};

// Theme
pub use schemaform_theme::{FileStore, MemoryStore, Theme, ThemeService, ThemeStore};

// Preview session
pub use schemaform_preview::{
    Clipboard, EditOutcome, LivePreview, MemoryClipboard, Notification, NotificationKind,
    PreviewBuilder, PreviewError, Workbench,
};
