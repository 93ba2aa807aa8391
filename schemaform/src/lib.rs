//! # Schemaform
//!
//! JSON form schemas with a live rendered preview.
//!
//! A form schema is a JSON document with a title, a description and an
//! ordered list of fields. Schemaform parses the text into a typed document,
//! renders it into a declarative form description and tracks the values and
//! validation errors of the rendered controls.
//!
//! ## Features
//!
//! - **Tolerant parsing** - Malformed JSON is reported, never fatal
//! - **Shape normalization** - Missing keys get defaults and are reported as issues
//! - **Declarative rendering** - Controls, icons and layout as plain data
//! - **Field validation** - Required fields and optional anchored patterns
//! - **Live preview** - Re-render on every edit, keeping the last good form
//! - **Persisted theme** - Light/dark preference stored across restarts
//!
//! ## Quick Start
//!
//! ```ignore
//! use schemaform::prelude::*;
//!
//! let mut preview = PreviewBuilder::new()
//!     .clipboard(MemoryClipboard::new())
//!     .build();
//!
//! preview.edit(r#"{"formTitle":"T","formDescription":"D","fields":[]}"#);
//! println!("{}", preview.render_text());
//! ```
//!
//! ## Crate Organization
//!
//! - [`core`] - Form document, field specs and field kinds
//! - [`schema`] - JSON parsing, normalization and validation
//! - [`render`] - Control descriptors, form state and submission
//! - [`theme`] - Theme preference and its stores
//! - [`preview`] - Live preview session and workbench

pub mod prelude;

/// Form document model.
pub mod core {
    pub use schemaform_core::*;
}

/// Schema parsing and normalization.
pub mod schema {
    pub use schemaform_schema::*;
}

/// Form rendering and state.
pub mod render {
    pub use schemaform_render::*;
}

/// Theme preference.
pub mod theme {
    pub use schemaform_theme::*;
}

/// Live preview session.
pub mod preview {
    pub use schemaform_preview::*;
}

// Re-export commonly used items at the crate root
pub use schemaform_core::{FieldKind, FieldSpec, FormDocument};
pub use schemaform_preview::{LivePreview, PreviewBuilder, Workbench};
pub use schemaform_schema::{SchemaError, parse_document, parse_form};
