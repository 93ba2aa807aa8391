//! Options controlling how permissively documents are accepted.

/// What to do with a field `type` outside the known vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnknownTypePolicy {
    /// Keep the field as a text-like input and record a shape issue.
    #[default]
    Accept,
    /// Reject the whole document.
    Reject,
}

/// Whether `validation.pattern` takes part in field validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PatternPolicy {
    /// Patterns are informational only.
    #[default]
    Ignore,
    /// Patterns must compile and non-empty values must match them.
    Enforce,
}

impl PatternPolicy {
    /// Returns true if patterns are enforced.
    #[must_use]
    pub const fn is_enforced(&self) -> bool {
        matches!(self, Self::Enforce)
    }
}

/// Schema acceptance options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SchemaOptions {
    /// Handling of unknown field types.
    pub unknown_types: UnknownTypePolicy,
    /// Promote the first shape issue to an error.
    pub strict_shape: bool,
    /// Handling of validation patterns.
    pub patterns: PatternPolicy,
}

impl SchemaOptions {
    /// Creates the default, permissive options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates options that reject every deviation from the expected shape.
    #[must_use]
    pub fn strict() -> Self {
        Self {
            unknown_types: UnknownTypePolicy::Reject,
            strict_shape: true,
            patterns: PatternPolicy::Enforce,
        }
    }

    /// Sets the unknown type policy.
    #[must_use]
    pub fn unknown_types(mut self, policy: UnknownTypePolicy) -> Self {
        self.unknown_types = policy;
        self
    }

    /// Enables or disables strict shape checking.
    #[must_use]
    pub fn strict_shape(mut self, strict: bool) -> Self {
        self.strict_shape = strict;
        self
    }

    /// Sets the pattern policy.
    #[must_use]
    pub fn patterns(mut self, policy: PatternPolicy) -> Self {
        self.patterns = policy;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_permissive() {
        let options = SchemaOptions::default();
        assert_eq!(options.unknown_types, UnknownTypePolicy::Accept);
        assert!(!options.strict_shape);
        assert!(!options.patterns.is_enforced());
    }

    #[test]
    fn test_builder_setters() {
        let options = SchemaOptions::new()
            .unknown_types(UnknownTypePolicy::Reject)
            .patterns(PatternPolicy::Enforce);
        assert_eq!(options.unknown_types, UnknownTypePolicy::Reject);
        assert!(options.patterns.is_enforced());
        assert!(!options.strict_shape);
    }

    #[test]
    fn test_strict() {
        let options = SchemaOptions::strict();
        assert!(options.strict_shape);
        assert_eq!(options.unknown_types, UnknownTypePolicy::Reject);
    }
}
