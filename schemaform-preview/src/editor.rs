//! Editor state.

/// Message shown under the editor when the text is not valid JSON.
pub const INVALID_JSON_MESSAGE: &str = "Invalid JSON format.";

/// Raw schema text and its syntax error indicator.
///
/// The text is always kept as typed, whether or not it parses.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditorState {
    text: String,
    error: Option<&'static str>,
}

impl EditorState {
    /// Creates an editor holding `text` with no error shown.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            error: None,
        }
    }

    /// Returns the raw text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the error shown under the editor.
    #[must_use]
    pub const fn error(&self) -> Option<&'static str> {
        self.error
    }

    /// Returns true if the last text failed to parse.
    #[must_use]
    pub const fn has_error(&self) -> bool {
        self.error.is_some()
    }

    pub(crate) fn set_text(&mut self, text: String) {
        self.text = text;
    }

    pub(crate) fn mark_valid(&mut self) {
        self.error = None;
    }

    pub(crate) fn mark_invalid(&mut self) {
        self.error = Some(INVALID_JSON_MESSAGE);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_editor_keeps_text_when_invalid() {
        let mut editor = EditorState::new("{}");
        editor.set_text("{ broken".to_string());
        editor.mark_invalid();

        assert_eq!(editor.text(), "{ broken");
        assert_eq!(editor.error(), Some("Invalid JSON format."));

        editor.mark_valid();
        assert!(!editor.has_error());
    }
}
