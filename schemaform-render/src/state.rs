//! Form state and field registration.
//!
//! The renderer registers every control against its id through a
//! [`FieldRegistry`]. [`FormState`] is the registry used by the live
//! preview: it holds current values, validation rules and the error map.

use crate::error::FieldError;
use crate::options::ValidationMode;
use crate::submit::{SubmitHandler, SubmitOutcome};
use regex::Regex;
use std::collections::{BTreeMap, HashMap};

/// Field errors keyed by field id.
pub type ErrorMap = BTreeMap<String, FieldError>;

/// Submitted values keyed by field id.
pub type FieldValues = BTreeMap<String, String>;

/// Validation rules bound to one field.
#[derive(Debug, Clone)]
pub struct FieldRules {
    /// Whether an empty value is an error.
    pub required: bool,
    /// Message for an empty required value.
    pub required_message: String,
    /// Anchored pattern a non-empty value must match.
    pub pattern: Option<Regex>,
    /// Message for a pattern mismatch.
    pub pattern_message: String,
}

impl FieldRules {
    /// Creates rules with only a required flag and its message.
    #[must_use]
    pub fn required(required: bool, message: impl Into<String>) -> Self {
        Self {
            required,
            required_message: message.into(),
            pattern: None,
            pattern_message: String::new(),
        }
    }

    /// Attaches a compiled pattern and its message.
    #[must_use]
    pub fn with_pattern(mut self, pattern: Regex, message: impl Into<String>) -> Self {
        self.pattern = Some(pattern);
        self.pattern_message = message.into();
        self
    }

    /// Checks a value against the rules.
    #[must_use]
    pub fn check(&self, value: &str) -> Option<FieldError> {
        if value.is_empty() {
            return self
                .required
                .then(|| FieldError::required(&self.required_message));
        }
        match &self.pattern {
            Some(pattern) if !pattern.is_match(value) => {
                Some(FieldError::pattern_mismatch(&self.pattern_message))
            }
            _ => None,
        }
    }
}

/// Field registration capability handed to the renderer.
pub trait FieldRegistry {
    /// Registers a control under `id`.
    ///
    /// Registering an id that is already known updates its rules and keeps
    /// its current value.
    fn register(&mut self, id: &str, rules: FieldRules, default_value: &str);

    /// Drops every registration whose id is not in `ids`; `ids` gives the
    /// field order.
    fn retain(&mut self, ids: &[&str]);
}

#[derive(Debug, Clone)]
struct Registration {
    rules: FieldRules,
    default_value: String,
    value: String,
}

/// Values, rules and errors of a rendered form.
#[derive(Debug, Clone, Default)]
pub struct FormState {
    fields: HashMap<String, Registration>,
    order: Vec<String>,
    errors: ErrorMap,
    mode: ValidationMode,
    submit_count: u32,
}

impl FormState {
    /// Creates an empty form state.
    #[must_use]
    pub fn new(mode: ValidationMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    /// Returns the validation mode.
    #[must_use]
    pub const fn mode(&self) -> ValidationMode {
        self.mode
    }

    /// Returns the registered ids in field order.
    #[must_use]
    pub fn ids(&self) -> &[String] {
        &self.order
    }

    /// Returns true if `id` is registered.
    #[must_use]
    pub fn is_registered(&self, id: &str) -> bool {
        self.fields.contains_key(id)
    }

    /// Returns the current value of a field.
    #[must_use]
    pub fn value(&self, id: &str) -> Option<&str> {
        self.fields.get(id).map(|r| r.value.as_str())
    }

    /// Sets the value of a field.
    ///
    /// Returns false if `id` is not registered. After the first submission
    /// attempt the field is re-validated immediately when the mode asks for it.
    pub fn set_value(&mut self, id: &str, value: impl Into<String>) -> bool {
        let Some(registration) = self.fields.get_mut(id) else {
            tracing::debug!("Ignoring value for unregistered field '{}'", id);
            return false;
        };
        registration.value = value.into();

        if self.mode == ValidationMode::OnSubmitThenChange && self.submit_count > 0 {
            self.revalidate(id);
        }
        true
    }

    /// Returns the error map.
    #[must_use]
    pub fn errors(&self) -> &ErrorMap {
        &self.errors
    }

    /// Returns the error of one field.
    #[must_use]
    pub fn error(&self, id: &str) -> Option<&FieldError> {
        self.errors.get(id)
    }

    /// Returns the number of submission attempts.
    #[must_use]
    pub const fn submit_count(&self) -> u32 {
        self.submit_count
    }

    /// Returns a snapshot of all values.
    #[must_use]
    pub fn values(&self) -> FieldValues {
        self.order
            .iter()
            .filter_map(|id| {
                self.fields
                    .get(id)
                    .map(|r| (id.clone(), r.value.clone()))
            })
            .collect()
    }

    /// Re-validates every field, replacing the error map.
    ///
    /// Returns true if no field is in error.
    pub fn validate_all(&mut self) -> bool {
        self.errors = self
            .order
            .iter()
            .filter_map(|id| {
                let registration = self.fields.get(id)?;
                registration
                    .rules
                    .check(&registration.value)
                    .map(|e| (id.clone(), e))
            })
            .collect();
        self.errors.is_empty()
    }

    /// Attempts a submission.
    ///
    /// Every field is evaluated; on success the values are handed to `handler`.
    pub fn submit(&mut self, handler: &dyn SubmitHandler) -> SubmitOutcome {
        self.submit_count += 1;
        if self.validate_all() {
            let values = self.values();
            tracing::info!("Form submitted with {} values", values.len());
            handler.on_submit(&values);
            SubmitOutcome::Submitted(values)
        } else {
            tracing::debug!("Form submission rejected: {} field errors", self.errors.len());
            SubmitOutcome::Rejected(self.errors.clone())
        }
    }

    /// Restores default values and clears errors and submission history.
    pub fn reset(&mut self) {
        for registration in self.fields.values_mut() {
            registration.value = registration.default_value.clone();
        }
        self.errors.clear();
        self.submit_count = 0;
    }

    fn revalidate(&mut self, id: &str) {
        let error = self
            .fields
            .get(id)
            .and_then(|r| r.rules.check(&r.value));
        match error {
            Some(error) => {
                self.errors.insert(id.to_string(), error);
            }
            None => {
                self.errors.remove(id);
            }
        }
    }
}

impl FieldRegistry for FormState {
    fn register(&mut self, id: &str, rules: FieldRules, default_value: &str) {
        match self.fields.get_mut(id) {
            Some(registration) => {
                registration.rules = rules;
                registration.default_value = default_value.to_string();
            }
            None => {
                self.fields.insert(
                    id.to_string(),
                    Registration {
                        rules,
                        default_value: default_value.to_string(),
                        value: default_value.to_string(),
                    },
                );
                self.order.push(id.to_string());
            }
        }
        if self.errors.contains_key(id) {
            self.revalidate(id);
        }
    }

    fn retain(&mut self, ids: &[&str]) {
        self.fields.retain(|id, _| ids.contains(&id.as_str()));
        self.errors.retain(|id, _| ids.contains(&id.as_str()));
        self.order = ids
            .iter()
            .filter(|id| self.fields.contains_key(**id))
            .map(|id| (*id).to_string())
            .collect();
    }
}
