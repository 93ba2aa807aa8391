//! Live preview session.
//!
//! Every text change re-parses the whole schema. A successful parse replaces
//! the document and re-renders; a syntax error only flags the editor and
//! leaves the preview as it was.

use crate::clipboard::{Clipboard, Notification, NotificationKind, Notifications};
use crate::editor::EditorState;
use crate::error::ClipboardError;
use schemaform_core::FormDocument;
use schemaform_render::{ErrorMap, FormState, Preview, Renderer, SubmitHandler, SubmitOutcome};
use schemaform_schema::{SchemaError, SchemaOptions, ShapeIssue, SyntaxOutcome, normalize};
use std::sync::Arc;

const COPY_SUCCESS_MESSAGE: &str = "Form JSON copied to clipboard!";

/// Result of feeding text to the preview.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOutcome {
    /// A new form was rendered.
    Rendered {
        /// Number of tolerated shape issues.
        issues: usize,
    },
    /// The text is valid JSON but cannot be used as a form.
    Rejected,
    /// The text is not valid JSON.
    SyntaxError,
}

/// Editor, preview pane and form state of one editing surface.
pub struct LivePreview {
    editor: EditorState,
    schema_text: String,
    document: Option<Arc<FormDocument>>,
    issues: Vec<ShapeIssue>,
    preview: Preview,
    form: FormState,
    renderer: Renderer,
    schema_options: SchemaOptions,
    submit_handler: Box<dyn SubmitHandler>,
    clipboard: Option<Box<dyn Clipboard>>,
    notifications: Notifications,
}

impl LivePreview {
    pub(crate) fn new(
        renderer: Renderer,
        schema_options: SchemaOptions,
        form: FormState,
        submit_handler: Box<dyn SubmitHandler>,
        clipboard: Option<Box<dyn Clipboard>>,
    ) -> Self {
        Self {
            editor: EditorState::default(),
            schema_text: String::new(),
            document: None,
            issues: Vec::new(),
            preview: Preview::Missing,
            form,
            renderer,
            schema_options,
            submit_handler,
            clipboard,
            notifications: Notifications::new(),
        }
    }

    /// Applies a user edit.
    ///
    /// Text that is not valid JSON is kept in the editor and flagged, and the
    /// previously rendered preview stays unchanged.
    pub fn edit(&mut self, text: impl Into<String>) -> EditOutcome {
        self.apply(text.into(), false)
    }

    /// Replaces the schema programmatically.
    ///
    /// Unlike [`edit`](Self::edit), malformed text replaces the preview with
    /// the invalid-schema notice.
    pub fn load(&mut self, text: impl Into<String>) -> EditOutcome {
        self.apply(text.into(), true)
    }

    fn apply(&mut self, text: String, replace_on_syntax_error: bool) -> EditOutcome {
        let syntax = SyntaxOutcome::classify(&text);
        self.editor.set_text(text);

        let value = match syntax {
            SyntaxOutcome::Valid(value) => value,
            SyntaxOutcome::Malformed(e) => {
                tracing::debug!("Editor text is not valid JSON: {}", e);
                self.editor.mark_invalid();
                if replace_on_syntax_error {
                    self.schema_text = self.editor.text().to_string();
                    self.reject(&SchemaError::Parse(e));
                }
                return EditOutcome::SyntaxError;
            }
        };
        self.editor.mark_valid();
        self.schema_text = self.editor.text().to_string();

        match normalize(&value, &self.schema_options) {
            Ok(normalized) => {
                let issues = normalized.issues.len();
                let document = Arc::new(normalized.document);
                self.preview = Preview::Form(self.renderer.render(&document, &mut self.form));
                self.document = Some(document);
                self.issues = normalized.issues;
                EditOutcome::Rendered { issues }
            }
            Err(e) => {
                tracing::warn!("Schema rejected: {}", e);
                self.reject(&e);
                EditOutcome::Rejected
            }
        }
    }

    fn reject(&mut self, error: &SchemaError) {
        self.preview = self.renderer.render_outcome(Err(error), &mut self.form);
        self.document = None;
        self.issues.clear();
    }

    /// Returns the editor state.
    #[must_use]
    pub fn editor(&self) -> &EditorState {
        &self.editor
    }

    /// Returns what the preview pane shows.
    #[must_use]
    pub fn preview(&self) -> &Preview {
        &self.preview
    }

    /// Returns the current document, if the preview shows a form.
    #[must_use]
    pub fn document(&self) -> Option<&Arc<FormDocument>> {
        self.document.as_ref()
    }

    /// Returns the shape issues tolerated for the current document.
    #[must_use]
    pub fn issues(&self) -> &[ShapeIssue] {
        &self.issues
    }

    /// Returns the form state.
    #[must_use]
    pub fn form(&self) -> &FormState {
        &self.form
    }

    /// Returns the field errors.
    #[must_use]
    pub fn errors(&self) -> &ErrorMap {
        self.form.errors()
    }

    /// Sets the value of a control. Returns false for unknown ids.
    pub fn set_value(&mut self, id: &str, value: impl Into<String>) -> bool {
        self.form.set_value(id, value)
    }

    /// Attempts a submission.
    ///
    /// Returns `None` when no form is shown.
    pub fn submit(&mut self) -> Option<SubmitOutcome> {
        if !self.preview.is_form() {
            return None;
        }
        Some(self.form.submit(self.submit_handler.as_ref()))
    }

    /// Copies the schema behind the preview to the clipboard.
    ///
    /// Returns the resulting notification, or `None` when the presentation
    /// has no copy action.
    pub fn copy_schema(&mut self) -> Option<&Notification> {
        if !self.renderer.presentation().copy_action {
            return None;
        }
        let result = match &self.clipboard {
            Some(clipboard) => clipboard.write_text(&self.schema_text),
            None => Err(ClipboardError::Unavailable),
        };
        let notification = match result {
            Ok(()) => self
                .notifications
                .push(NotificationKind::Success, COPY_SUCCESS_MESSAGE),
            Err(e) => {
                tracing::error!("Failed to copy JSON: {}", e);
                self.notifications
                    .push(NotificationKind::Error, format!("Failed to copy JSON: {e}"))
            }
        };
        Some(notification)
    }

    /// Returns pending notifications.
    #[must_use]
    pub fn notifications(&self) -> &[Notification] {
        self.notifications.pending()
    }

    /// Dismisses a notification.
    pub fn dismiss(&mut self, id: u64) -> bool {
        self.notifications.dismiss(id)
    }

    /// Renders the preview pane as plain text.
    #[must_use]
    pub fn render_text(&self) -> String {
        match &self.preview {
            Preview::Form(view) => view.to_text(self.form.errors()),
            other => format!("{}\n", other.notice().unwrap_or_default()),
        }
    }
}

impl std::fmt::Debug for LivePreview {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LivePreview")
            .field("editor", &self.editor)
            .field("preview", &self.preview)
            .field("issues", &self.issues)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::PreviewBuilder;
    use crate::clipboard::MemoryClipboard;
    use crate::defaults::DEFAULT_SCHEMA;
    use schemaform_render::{ControlKind, FieldValues, FnSubmitHandler, PresentationOptions};
    use std::cell::RefCell;
    use std::rc::Rc;

    struct RefusingClipboard;

    impl Clipboard for RefusingClipboard {
        fn write_text(&self, _text: &str) -> Result<(), ClipboardError> {
            Err(ClipboardError::rejected("permission denied"))
        }
    }

    #[test]
    fn test_starts_with_default_schema() {
        let preview = PreviewBuilder::new().build();
        assert_eq!(preview.editor().text(), DEFAULT_SCHEMA);
        let view = preview.preview().form().expect("form");
        assert_eq!(view.title, "Project Requirements Survey");
        assert_eq!(view.controls.len(), 2);
    }

    #[test]
    fn test_scenario_empty_fields() {
        let mut preview = PreviewBuilder::new().build();
        let outcome = preview.edit(r#"{"formTitle":"T","formDescription":"D","fields":[]}"#);
        assert_eq!(outcome, EditOutcome::Rendered { issues: 0 });

        let view = preview.preview().form().expect("form");
        assert_eq!(view.title, "T");
        assert_eq!(view.description, "D");
        assert!(view.controls.is_empty());
        assert_eq!(view.submit.label, "Submit");
    }

    #[test]
    fn test_scenario_required_error() {
        let mut preview = PreviewBuilder::new().build();
        preview.edit(
            r#"{"formTitle":"T","formDescription":"D","fields":[{"id":"name","type":"text","label":"Name","required":true}]}"#,
        );
        let outcome = preview.submit().expect("form shown");
        let errors = outcome.errors().expect("rejected");
        assert_eq!(errors.len(), 1);
        assert_eq!(errors["name"].message(), "This field is required");
    }

    #[test]
    fn test_one_error_per_empty_required_field() {
        let mut preview = PreviewBuilder::new().build();
        preview.edit(
            r#"{"formTitle":"T","formDescription":"D","fields":[
                {"id":"a","type":"text","label":"A","required":true},
                {"id":"b","type":"email","label":"B"},
                {"id":"c","type":"select","label":"C","required":true,"options":[]},
                {"id":"d","type":"tel","label":"D","required":true,"validation":{"message":"Phone needed"}}]}"#,
        );
        preview.set_value("a", "filled");

        let outcome = preview.submit().expect("form shown");
        let errors = outcome.errors().expect("rejected");
        assert_eq!(errors.keys().map(String::as_str).collect::<Vec<_>>(), vec!["c", "d"]);
        assert_eq!(errors["d"].message(), "Phone needed");

        let text = preview.render_text();
        let control = text.find("D *").expect("caption");
        let error = text.find("    ! Phone needed").expect("error line");
        assert!(error > control);
    }

    #[test]
    fn test_scenario_invalid_json_load() {
        let mut preview = PreviewBuilder::new().initial_schema("not valid json").build();
        assert_eq!(preview.editor().error(), Some("Invalid JSON format."));
        assert_eq!(preview.preview().notice(), Some("Invalid JSON Schema"));
        assert!(preview.preview().form().is_none());
        assert!(preview.form().ids().is_empty());
        assert!(preview.submit().is_none());

        assert_eq!(preview.load("not valid json"), EditOutcome::SyntaxError);
        assert_eq!(preview.render_text(), "Invalid JSON Schema\n");
    }

    #[test]
    fn test_rejected_schema_keeps_typed_values() {
        let mut preview = PreviewBuilder::new().build();
        preview.set_value("name", "Ada");

        let outcome = preview.edit(
            r#"{"formTitle":"T","formDescription":"D","fields":[
                {"id":"name","type":"text","label":"Name"},{"id":"name","type":"text","label":"Copy"}]}"#,
        );
        assert_eq!(outcome, EditOutcome::Rejected);
        assert!(preview.submit().is_none());

        preview.edit(DEFAULT_SCHEMA);
        assert_eq!(preview.form().value("name"), Some("Ada"));
    }

    #[test]
    fn test_invalid_edit_keeps_previous_form() {
        let mut preview = PreviewBuilder::new().build();
        preview.set_value("name", "Ada");
        let before = preview.preview().clone();

        assert_eq!(preview.edit("{ \"formTitle\": "), EditOutcome::SyntaxError);
        assert_eq!(preview.editor().text(), "{ \"formTitle\": ");
        assert_eq!(preview.editor().error(), Some("Invalid JSON format."));
        assert_eq!(preview.preview(), &before);
        assert_eq!(preview.form().value("name"), Some("Ada"));

        preview.edit(DEFAULT_SCHEMA);
        assert!(!preview.editor().has_error());
    }

    #[test]
    fn test_scenario_select_option() {
        let mut preview = PreviewBuilder::new().build();
        preview.edit(
            r#"{"formTitle":"T","formDescription":"D","fields":[{"id":"c","type":"select","label":"C","options":[{"value":"a","label":"A"}]}]}"#,
        );
        let view = preview.preview().form().expect("form");
        match &view.controls[0].kind {
            ControlKind::Select { options, .. } => {
                assert_eq!(options.len(), 1);
                assert_eq!(options[0].label, "A");
                assert_eq!(options[0].value, "a");
            }
            ControlKind::Input { .. } => panic!("expected select"),
        }
    }

    #[test]
    fn test_null_document_shows_missing_notice() {
        let mut preview = PreviewBuilder::new().build();
        assert_eq!(preview.edit("null"), EditOutcome::Rejected);
        assert_eq!(preview.preview().notice(), Some("No valid schema provided"));
        assert!(!preview.editor().has_error());
        assert!(preview.document().is_none());
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let mut preview = PreviewBuilder::new().build();
        let outcome = preview.edit(
            r#"{"formTitle":"T","formDescription":"D","fields":[
                {"id":"a","type":"text","label":"A"},{"id":"a","type":"text","label":"B"}]}"#,
        );
        assert_eq!(outcome, EditOutcome::Rejected);
        match preview.preview() {
            Preview::Invalid { detail } => assert!(detail.contains("duplicate field id 'a'")),
            other => panic!("unexpected preview: {other:?}"),
        }
    }

    #[test]
    fn test_shape_issues_reported() {
        let mut preview = PreviewBuilder::new().build();
        let outcome = preview.edit(r#"{"formTitle":"T","formDescription":"D"}"#);
        assert_eq!(outcome, EditOutcome::Rendered { issues: 1 });
        assert_eq!(preview.issues().len(), 1);
        assert!(preview.preview().is_form());
    }

    #[test]
    fn test_submit_forwards_values() {
        let received: Rc<RefCell<Vec<FieldValues>>> = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&received);
        let mut preview = PreviewBuilder::new()
            .submit_handler(FnSubmitHandler::new(move |values: &FieldValues| {
                sink.borrow_mut().push(values.clone());
            }))
            .build();

        preview.set_value("name", "Ada");
        preview.set_value("email", "ada@example.com");
        assert!(preview.submit().expect("form").is_submitted());

        let received = received.borrow();
        assert_eq!(received.len(), 1);
        assert_eq!(received[0].get("email").map(String::as_str), Some("ada@example.com"));
    }

    #[test]
    fn test_errors_clear_when_field_becomes_valid() {
        let mut preview = PreviewBuilder::new().build();
        preview.submit();
        assert_eq!(preview.errors().len(), 2);

        preview.set_value("name", "Ada");
        assert_eq!(preview.errors().len(), 1);
        assert!(preview.errors().contains_key("email"));
    }

    #[test]
    fn test_copy_schema_success() {
        let clipboard = MemoryClipboard::new();
        let mut preview = PreviewBuilder::new().clipboard(clipboard.clone()).build();
        preview.edit("{ broken");

        let notification = preview.copy_schema().expect("copy enabled").clone();
        assert_eq!(notification.kind, NotificationKind::Success);
        assert_eq!(notification.message, "Form JSON copied to clipboard!");
        assert_eq!(clipboard.contents().as_deref(), Some(DEFAULT_SCHEMA));

        assert!(preview.dismiss(notification.id));
        assert!(preview.notifications().is_empty());
    }

    #[test]
    fn test_copy_schema_failure_is_local() {
        let mut preview = PreviewBuilder::new().clipboard(RefusingClipboard).build();
        let notification = preview.copy_schema().expect("copy enabled").clone();
        assert_eq!(notification.kind, NotificationKind::Error);
        assert_eq!(
            notification.message,
            "Failed to copy JSON: write rejected: permission denied"
        );
        assert!(preview.preview().is_form());

        let mut detached = PreviewBuilder::new().build();
        let notification = detached.copy_schema().expect("copy enabled");
        assert_eq!(notification.kind, NotificationKind::Error);
    }

    #[test]
    fn test_copy_disabled_for_plain_presentation() {
        let mut preview = PreviewBuilder::new()
            .presentation(PresentationOptions::plain())
            .clipboard(MemoryClipboard::new())
            .build();
        assert!(preview.copy_schema().is_none());
        assert!(preview.notifications().is_empty());
    }
}
