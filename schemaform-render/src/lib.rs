//! # Schemaform Render
//!
//! Turns a form document into a declarative form description.
//!
//! This crate provides:
//! - Control descriptors (one per field) plus heading, submit and copy controls
//! - Presentation options unifying the plain and decorated form styles
//! - A field registry trait and the `FormState` implementation holding
//!   values, validation rules and the per-field error map
//! - Submission to an external handler as a flat `{id: value}` mapping

pub mod control;
pub mod error;
pub mod options;
pub mod renderer;
pub mod state;
pub mod submit;

pub use control::{ControlDescriptor, ControlKind, CopyAction, Icon, SubmitControl};
pub use error::FieldError;
pub use options::{PresentationOptions, ValidationMode};
pub use renderer::{
    Block, FormView, INVALID_SCHEMA_NOTICE, MISSING_SCHEMA_NOTICE, Preview, Renderer,
};
pub use state::{ErrorMap, FieldRegistry, FieldRules, FieldValues, FormState};
pub use submit::{FnSubmitHandler, LogSubmitHandler, SubmitHandler, SubmitOutcome};
