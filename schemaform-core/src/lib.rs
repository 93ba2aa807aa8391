//! # Schemaform Core
//!
//! Core data model for JSON-defined forms.
//!
//! This crate provides:
//! - The form document root (title, description, ordered fields)
//! - Field specifications with labels, placeholders, options and validation metadata
//! - The vocabulary of field kinds (text-like input modes plus `select`)
//! - Serde mapping onto the wire names used by schema authors

pub mod document;
pub mod field;
pub mod kind;

pub use document::FormDocument;
pub use field::{FieldSpec, FieldValidation, SelectOption};
pub use kind::FieldKind;

/// Default error text for a required field left empty.
pub const DEFAULT_REQUIRED_MESSAGE: &str = "This field is required";

/// Default error text for a value rejected by a field pattern.
pub const DEFAULT_PATTERN_MESSAGE: &str = "Value does not match the required format";
