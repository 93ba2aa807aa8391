//! Shape normalization.
//!
//! Turns any well-formed JSON value into a [`FormDocument`]. Absent keys are
//! filled with defaults and recorded as [`ShapeIssue`]s; shapes that cannot
//! be bound to controls (no id, duplicate ids, non-array `fields`) are
//! rejected with a [`SchemaError`].

use crate::error::{SchemaError, ShapeIssue};
use crate::options::{SchemaOptions, UnknownTypePolicy};
use crate::validation::validate_document;
use schemaform_core::{FieldKind, FieldSpec, FieldValidation, FormDocument, SelectOption};
use serde_json::{Map, Value};

/// A normalized document together with the issues tolerated on the way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Normalized {
    /// The document.
    pub document: FormDocument,
    /// Deviations that were defaulted.
    pub issues: Vec<ShapeIssue>,
}

impl Normalized {
    /// Returns true if the document matched the expected shape exactly.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }
}

/// Normalizes a JSON value into a form document.
///
/// # Arguments
/// * `value` - Decoded JSON value
/// * `options` - Acceptance options
///
/// # Errors
/// Returns `SchemaError` if the value cannot be bound to a form.
pub fn normalize(value: &Value, options: &SchemaOptions) -> Result<Normalized, SchemaError> {
    let mut normalizer = Normalizer::new(options);
    let document = normalizer.document(value)?;
    validate_document(&document, options)?;
    Ok(Normalized {
        document,
        issues: normalizer.issues,
    })
}

/// Returns a short description of the JSON type of a value.
pub(crate) fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

struct Normalizer<'a> {
    options: &'a SchemaOptions,
    issues: Vec<ShapeIssue>,
}

impl<'a> Normalizer<'a> {
    fn new(options: &'a SchemaOptions) -> Self {
        Self {
            options,
            issues: Vec::new(),
        }
    }

    fn issue(&mut self, issue: ShapeIssue) -> Result<(), SchemaError> {
        if self.options.strict_shape {
            return Err(SchemaError::Shape(issue));
        }
        tracing::warn!("Schema shape issue: {}", issue);
        self.issues.push(issue);
        Ok(())
    }

    fn document(&mut self, value: &Value) -> Result<FormDocument, SchemaError> {
        let obj = match value {
            Value::Null => return Err(SchemaError::MissingDocument),
            Value::Object(obj) => obj,
            other => {
                self.issue(ShapeIssue::RootNotObject {
                    found: json_type(other),
                })?;
                return Ok(FormDocument::default());
            }
        };

        let form_title = self.required_string(obj, "formTitle", "formTitle")?;
        let form_description = self.required_string(obj, "formDescription", "formDescription")?;
        let mut document = FormDocument::new(form_title, form_description);

        match obj.get("fields") {
            None | Some(Value::Null) => self.issue(ShapeIssue::missing("fields"))?,
            Some(Value::Array(items)) => {
                for (index, item) in items.iter().enumerate() {
                    let field = self.field(index, item)?;
                    document.fields.push(field);
                }
            }
            Some(other) => {
                return Err(SchemaError::FieldsNotArray {
                    found: json_type(other),
                });
            }
        }

        Ok(document)
    }

    fn field(&mut self, index: usize, value: &Value) -> Result<FieldSpec, SchemaError> {
        let Value::Object(obj) = value else {
            return Err(SchemaError::invalid_field(
                index,
                format!("expected an object, found {}", json_type(value)),
            ));
        };

        let id = match obj.get("id") {
            Some(Value::String(id)) if !id.trim().is_empty() => id.clone(),
            _ => return Err(SchemaError::MissingFieldId { index }),
        };
        let path = format!("fields[{index}]");

        let kind = self.kind(obj, &id, &path)?;
        let label = self.required_string(obj, "label", &format!("{path}.label"))?;
        let mut field = FieldSpec::new(id, kind, label);

        field.required = match obj.get("required") {
            None | Some(Value::Null) => false,
            Some(Value::Bool(required)) => *required,
            Some(other) => {
                self.issue(ShapeIssue::wrong_type(
                    format!("{path}.required"),
                    "a boolean",
                    json_type(other),
                ))?;
                false
            }
        };
        field.placeholder = self.optional_string(obj, "placeholder", &path)?;
        field.options = self.options_list(obj, &path)?;
        field.validation = self.validation(obj, &path)?;

        Ok(field)
    }

    fn kind(
        &mut self,
        obj: &Map<String, Value>,
        id: &str,
        path: &str,
    ) -> Result<FieldKind, SchemaError> {
        match obj.get("type") {
            None | Some(Value::Null) => {
                self.issue(ShapeIssue::missing(format!("{path}.type")))?;
                Ok(FieldKind::Text)
            }
            Some(Value::String(name)) => match FieldKind::from(name.clone()) {
                FieldKind::Other(type_name) => match self.options.unknown_types {
                    UnknownTypePolicy::Reject => Err(SchemaError::UnknownFieldType {
                        id: id.to_string(),
                        type_name,
                    }),
                    UnknownTypePolicy::Accept => {
                        self.issue(ShapeIssue::UnknownFieldType {
                            id: id.to_string(),
                            type_name: type_name.clone(),
                        })?;
                        Ok(FieldKind::Other(type_name))
                    }
                },
                known => Ok(known),
            },
            Some(other) => {
                self.issue(ShapeIssue::wrong_type(
                    format!("{path}.type"),
                    "a string",
                    json_type(other),
                ))?;
                Ok(FieldKind::Text)
            }
        }
    }

    fn options_list(
        &mut self,
        obj: &Map<String, Value>,
        path: &str,
    ) -> Result<Vec<SelectOption>, SchemaError> {
        let items = match obj.get("options") {
            None | Some(Value::Null) => return Ok(Vec::new()),
            Some(Value::Array(items)) => items,
            Some(other) => {
                self.issue(ShapeIssue::wrong_type(
                    format!("{path}.options"),
                    "an array",
                    json_type(other),
                ))?;
                return Ok(Vec::new());
            }
        };

        let mut options = Vec::with_capacity(items.len());
        for (index, item) in items.iter().enumerate() {
            let (value, label) = match item {
                Value::Object(option) => (
                    option.get("value").and_then(scalar_text),
                    option.get("label").and_then(scalar_text),
                ),
                _ => (None, None),
            };
            match (value, label) {
                (Some(value), Some(label)) => options.push(SelectOption::new(value, label)),
                (Some(value), None) => options.push(SelectOption::new(value.clone(), value)),
                (None, Some(label)) => options.push(SelectOption::new(label.clone(), label)),
                (None, None) => self.issue(ShapeIssue::SkippedOption {
                    path: format!("{path}.options[{index}]"),
                })?,
            }
        }
        Ok(options)
    }

    fn validation(
        &mut self,
        obj: &Map<String, Value>,
        path: &str,
    ) -> Result<Option<FieldValidation>, SchemaError> {
        match obj.get("validation") {
            None | Some(Value::Null) => Ok(None),
            Some(Value::Object(rule)) => {
                let path = format!("{path}.validation");
                Ok(Some(FieldValidation {
                    pattern: self.optional_string(rule, "pattern", &path)?,
                    message: self.optional_string(rule, "message", &path)?,
                }))
            }
            Some(other) => {
                self.issue(ShapeIssue::wrong_type(
                    format!("{path}.validation"),
                    "an object",
                    json_type(other),
                ))?;
                Ok(None)
            }
        }
    }

    /// Reads a string that should be present, defaulting to empty.
    fn required_string(
        &mut self,
        obj: &Map<String, Value>,
        key: &str,
        path: &str,
    ) -> Result<String, SchemaError> {
        match obj.get(key) {
            None | Some(Value::Null) => {
                self.issue(ShapeIssue::missing(path))?;
                Ok(String::new())
            }
            Some(Value::String(s)) => Ok(s.clone()),
            Some(other) => {
                self.issue(ShapeIssue::wrong_type(path, "a string", json_type(other)))?;
                Ok(String::new())
            }
        }
    }

    /// Reads a string that may be absent.
    fn optional_string(
        &mut self,
        obj: &Map<String, Value>,
        key: &str,
        parent: &str,
    ) -> Result<Option<String>, SchemaError> {
        match obj.get(key) {
            None | Some(Value::Null) => Ok(None),
            Some(Value::String(s)) => Ok(Some(s.clone())),
            Some(other) => {
                self.issue(ShapeIssue::wrong_type(
                    format!("{parent}.{key}"),
                    "a string",
                    json_type(other),
                ))?;
                Ok(None)
            }
        }
    }
}

/// Text of a scalar option value; numbers and booleans are stringified.
fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
