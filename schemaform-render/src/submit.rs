//! Submission handlers.

use crate::state::{ErrorMap, FieldValues};

/// Receives the values of a successfully validated form.
pub trait SubmitHandler {
    /// Called once per successful submission.
    ///
    /// # Arguments
    /// * `values` - Current value of every registered control, keyed by id
    fn on_submit(&self, values: &FieldValues);
}

/// Handler that logs submitted values.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSubmitHandler;

impl SubmitHandler for LogSubmitHandler {
    fn on_submit(&self, values: &FieldValues) {
        tracing::info!("Form Submitted: {:?}", values);
    }
}

/// Closure-based handler.
pub struct FnSubmitHandler<F> {
    f: F,
}

impl<F> FnSubmitHandler<F>
where
    F: Fn(&FieldValues),
{
    /// Creates a new closure-based handler.
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

impl<F> SubmitHandler for FnSubmitHandler<F>
where
    F: Fn(&FieldValues),
{
    fn on_submit(&self, values: &FieldValues) {
        (self.f)(values);
    }
}

/// Result of a submission attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// All fields were valid; the values were handed to the handler.
    Submitted(FieldValues),
    /// At least one field is in error; nothing was handed over.
    Rejected(ErrorMap),
}

impl SubmitOutcome {
    /// Returns true if the form was submitted.
    #[must_use]
    pub const fn is_submitted(&self) -> bool {
        matches!(self, Self::Submitted(_))
    }

    /// Returns the field errors of a rejected attempt.
    #[must_use]
    pub fn errors(&self) -> Option<&ErrorMap> {
        match self {
            Self::Rejected(errors) => Some(errors),
            Self::Submitted(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FieldError;
    use std::cell::Cell;

    #[test]
    fn test_fn_handler_called() {
        let calls = Cell::new(0);
        let handler = FnSubmitHandler::new(|_: &FieldValues| calls.set(calls.get() + 1));
        handler.on_submit(&FieldValues::new());
        handler.on_submit(&FieldValues::new());
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn test_log_handler_does_not_panic() {
        let mut values = FieldValues::new();
        values.insert("name".to_string(), "Ada".to_string());
        LogSubmitHandler.on_submit(&values);
    }

    #[test]
    fn test_outcome_accessors() {
        let submitted = SubmitOutcome::Submitted(FieldValues::new());
        assert!(submitted.is_submitted());
        assert!(submitted.errors().is_none());

        let mut errors = ErrorMap::new();
        errors.insert("name".to_string(), FieldError::required("Required"));
        let rejected = SubmitOutcome::Rejected(errors);
        assert!(!rejected.is_submitted());
        assert_eq!(rejected.errors().map(ErrorMap::len), Some(1));
    }
}
