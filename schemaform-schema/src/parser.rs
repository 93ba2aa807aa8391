//! Form schema parser.
//!
//! Parsing is all-or-nothing: raw text either becomes a complete
//! [`FormDocument`] or yields an error, never a partial document.

use crate::error::{ParseError, SchemaError};
use crate::normalize::{Normalized, normalize};
use crate::options::SchemaOptions;
use schemaform_core::FormDocument;
use serde_json::Value;

/// Result of the syntax layer.
#[derive(Debug)]
pub enum SyntaxOutcome {
    /// The text is well-formed JSON.
    Valid(Value),
    /// The text is not well-formed JSON.
    Malformed(ParseError),
}

impl SyntaxOutcome {
    /// Classifies raw text as valid or malformed JSON.
    #[must_use]
    pub fn classify(text: &str) -> Self {
        match parse_json(text) {
            Ok(value) => Self::Valid(value),
            Err(e) => Self::Malformed(e),
        }
    }

    /// Returns true if the text was well-formed.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        matches!(self, Self::Valid(_))
    }

    /// Converts into a `Result`.
    ///
    /// # Errors
    /// Returns the `ParseError` of a malformed outcome.
    pub fn into_result(self) -> Result<Value, ParseError> {
        match self {
            Self::Valid(value) => Ok(value),
            Self::Malformed(e) => Err(e),
        }
    }
}

/// Parses raw text into a JSON value.
///
/// # Errors
/// Returns `ParseError` if the text is empty or not well-formed JSON.
pub fn parse_json(text: &str) -> Result<Value, ParseError> {
    if text.trim().is_empty() {
        return Err(ParseError::Empty);
    }
    let value = serde_json::from_str(text)?;
    Ok(value)
}

/// Parses raw text into a normalized form document.
///
/// # Arguments
/// * `text` - Raw schema text
/// * `options` - Acceptance options
///
/// # Errors
/// Returns `SchemaError` if the text is malformed or its shape is rejected.
pub fn parse_document(text: &str, options: &SchemaOptions) -> Result<Normalized, SchemaError> {
    let value = parse_json(text).inspect_err(|e| {
        tracing::debug!("Schema text rejected: {}", e);
    })?;
    normalize(&value, options)
}

/// Parses raw text with default options and returns only the document.
///
/// # Errors
/// Returns `SchemaError` if the text is malformed or its shape is rejected.
pub fn parse_form(text: &str) -> Result<FormDocument, SchemaError> {
    parse_document(text, &SchemaOptions::default()).map(|n| n.document)
}

#[cfg(test)]
mod tests {
    use super::*;
    use schemaform_core::FieldKind;

    const SIMPLE_SCHEMA: &str = r#"{
        "formTitle": "Project Requirements Survey",
        "formDescription": "Please fill out this survey about your project needs",
        "fields": [
            {
                "id": "name",
                "type": "text",
                "label": "Full Name",
                "required": true,
                "placeholder": "Enter your full name"
            },
            {
                "id": "email",
                "type": "email",
                "label": "Email Address",
                "required": true,
                "placeholder": "you@example.com"
            }
        ]
    }"#;

    #[test]
    fn test_parse_simple_schema() {
        let doc = parse_form(SIMPLE_SCHEMA).expect("Failed to parse schema");

        assert_eq!(doc.form_title, "Project Requirements Survey");
        assert_eq!(doc.fields.len(), 2);
        assert_eq!(doc.fields[0].kind, FieldKind::Text);
        assert_eq!(doc.fields[1].kind, FieldKind::Email);
        assert_eq!(doc.fields[1].placeholder_text(), "you@example.com");
    }

    #[test]
    fn test_parse_empty_text_fails() {
        assert!(matches!(parse_json(""), Err(ParseError::Empty)));
        assert!(matches!(parse_json("  \n\t"), Err(ParseError::Empty)));
    }

    #[test]
    fn test_parse_invalid_json_fails() {
        let err = parse_json("not valid json").unwrap_err();
        assert!(matches!(err, ParseError::Json(_)));
        assert_eq!(err.line(), Some(1));
        assert!(err.column().is_some());

        let err = parse_document("{\"formTitle\": ", &SchemaOptions::default()).unwrap_err();
        assert!(err.is_syntax());
    }

    #[test]
    fn test_syntax_outcome() {
        assert!(SyntaxOutcome::classify("[1, 2]").is_valid());
        assert!(!SyntaxOutcome::classify("{").is_valid());
        assert!(SyntaxOutcome::classify("{").into_result().is_err());
    }

    #[test]
    fn test_parse_is_idempotent() {
        let first = parse_form(SIMPLE_SCHEMA).unwrap();
        let second = parse_form(SIMPLE_SCHEMA).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_round_trip_through_serialization() {
        let schema = r#"{"formTitle":"T","formDescription":"D","fields":[
            {"id":"plan","type":"select","label":"Plan","required":true,
             "options":[{"value":"a","label":"A"},{"value":"b","label":"B"}]},
            {"id":"zip","type":"text","label":"Zip",
             "validation":{"pattern":"^[0-9]{5}$","message":"Five digits"}}
        ]}"#;
        let doc = parse_form(schema).unwrap();
        let text = doc.to_json_pretty().unwrap();
        let again = parse_form(&text).unwrap();
        assert_eq!(doc, again);
    }

    #[test]
    fn test_wrong_shape_is_accepted_as_empty() {
        let doc = parse_form("[1, 2, 3]").unwrap();
        assert!(doc.is_empty());

        let doc = parse_form(r#"{"formTitle":"Only a title"}"#).unwrap();
        assert_eq!(doc.form_title, "Only a title");
        assert!(doc.is_empty());
    }

    #[test]
    fn test_null_document_is_missing() {
        let err = parse_form("null").unwrap_err();
        assert!(err.is_missing_document());
    }
}
