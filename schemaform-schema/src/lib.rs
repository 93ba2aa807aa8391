//! # Schemaform Schema
//!
//! Parser and validator for JSON form schemas.
//!
//! This crate provides:
//! - A syntax layer that classifies raw text as valid or malformed JSON
//! - Shape normalization that fills defaults and rejects unusable shapes
//! - Document validation (unique field ids, compilable patterns)
//! - Options controlling how strictly documents are accepted

pub mod error;
pub mod normalize;
pub mod options;
pub mod parser;
pub mod validation;

pub use error::{ParseError, SchemaError, ShapeIssue};
pub use normalize::{Normalized, normalize};
pub use options::{PatternPolicy, SchemaOptions, UnknownTypePolicy};
pub use parser::{SyntaxOutcome, parse_document, parse_form, parse_json};
pub use validation::validate_document;
