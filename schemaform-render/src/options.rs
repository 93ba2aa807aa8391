//! Presentation and validation options.

/// Presentation switches distinguishing the plain form from the decorated preview.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PresentationOptions {
    /// Decorate inputs, submit and copy controls with icons.
    pub icons: bool,
    /// Offer a "Copy JSON" action in the header.
    pub copy_action: bool,
}

impl PresentationOptions {
    /// Plain form: no icons, no copy action.
    #[must_use]
    pub const fn plain() -> Self {
        Self {
            icons: false,
            copy_action: false,
        }
    }

    /// Decorated preview: icons and copy action.
    #[must_use]
    pub const fn preview() -> Self {
        Self {
            icons: true,
            copy_action: true,
        }
    }

    /// Enables or disables icons.
    #[must_use]
    pub const fn icons(mut self, enabled: bool) -> Self {
        self.icons = enabled;
        self
    }

    /// Enables or disables the copy action.
    #[must_use]
    pub const fn copy_action(mut self, enabled: bool) -> Self {
        self.copy_action = enabled;
        self
    }
}

impl Default for PresentationOptions {
    fn default() -> Self {
        Self::preview()
    }
}

/// When field errors are recomputed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ValidationMode {
    /// Only on submission attempts.
    OnSubmit,
    /// On submission attempts, then on every change after the first attempt.
    #[default]
    OnSubmitThenChange,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets() {
        let plain = PresentationOptions::plain();
        assert!(!plain.icons && !plain.copy_action);

        let preview = PresentationOptions::preview();
        assert!(preview.icons && preview.copy_action);
        assert_eq!(PresentationOptions::default(), preview);
    }

    #[test]
    fn test_setters() {
        let options = PresentationOptions::plain().copy_action(true);
        assert!(options.copy_action);
        assert!(!options.icons);
    }

    #[test]
    fn test_default_validation_mode() {
        assert_eq!(ValidationMode::default(), ValidationMode::OnSubmitThenChange);
    }
}
