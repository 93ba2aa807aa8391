//! Document validation.
//!
//! Checks that a document can be bound to form state unambiguously.

use crate::error::SchemaError;
use crate::options::SchemaOptions;
use schemaform_core::FormDocument;
use std::collections::HashMap;

/// Validates a normalized document.
///
/// # Arguments
/// * `document` - The document to validate
/// * `options` - Acceptance options
///
/// # Errors
/// Returns `SchemaError` on duplicate field ids, or on a pattern that does
/// not compile while patterns are enforced.
pub fn validate_document(document: &FormDocument, options: &SchemaOptions) -> Result<(), SchemaError> {
    validate_ids(document)?;
    if options.patterns.is_enforced() {
        validate_patterns(document)?;
    }
    Ok(())
}

/// Validates that field ids are unique.
fn validate_ids(document: &FormDocument) -> Result<(), SchemaError> {
    let mut seen: HashMap<&str, usize> = HashMap::with_capacity(document.fields.len());

    for (index, field) in document.fields.iter().enumerate() {
        if let Some(&first) = seen.get(field.id.as_str()) {
            return Err(SchemaError::DuplicateFieldId {
                id: field.id.clone(),
                first,
                second: index,
            });
        }
        seen.insert(&field.id, index);
    }

    Ok(())
}

/// Validates that every pattern compiles.
fn validate_patterns(document: &FormDocument) -> Result<(), SchemaError> {
    for field in &document.fields {
        if let Some(pattern) = field.pattern() {
            regex::Regex::new(pattern).map_err(|source| SchemaError::InvalidPattern {
                id: field.id.clone(),
                source,
            })?;
        }
    }
    Ok(())
}
