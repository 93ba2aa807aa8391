//! Preview builder.

use crate::clipboard::Clipboard;
use crate::defaults::DEFAULT_SCHEMA;
use crate::session::LivePreview;
use schemaform_render::{
    FormState, LogSubmitHandler, PresentationOptions, Renderer, SubmitHandler, ValidationMode,
};
use schemaform_schema::SchemaOptions;

/// Builder for configuring and creating a live preview.
pub struct PreviewBuilder {
    presentation: PresentationOptions,
    schema_options: SchemaOptions,
    validation_mode: ValidationMode,
    submit_handler: Option<Box<dyn SubmitHandler>>,
    clipboard: Option<Box<dyn Clipboard>>,
    initial_schema: String,
}

impl PreviewBuilder {
    /// Creates a new builder with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            presentation: PresentationOptions::default(),
            schema_options: SchemaOptions::default(),
            validation_mode: ValidationMode::default(),
            submit_handler: None,
            clipboard: None,
            initial_schema: DEFAULT_SCHEMA.to_string(),
        }
    }

    /// Sets the presentation options.
    #[must_use]
    pub fn presentation(mut self, presentation: PresentationOptions) -> Self {
        self.presentation = presentation;
        self
    }

    /// Sets the schema options.
    #[must_use]
    pub fn schema_options(mut self, options: SchemaOptions) -> Self {
        self.schema_options = options;
        self
    }

    /// Sets when field errors are recomputed.
    #[must_use]
    pub fn validation_mode(mut self, mode: ValidationMode) -> Self {
        self.validation_mode = mode;
        self
    }

    /// Sets the submission handler.
    ///
    /// Defaults to [`LogSubmitHandler`].
    #[must_use]
    pub fn submit_handler(mut self, handler: impl SubmitHandler + 'static) -> Self {
        self.submit_handler = Some(Box::new(handler));
        self
    }

    /// Attaches a clipboard.
    #[must_use]
    pub fn clipboard(mut self, clipboard: impl Clipboard + 'static) -> Self {
        self.clipboard = Some(Box::new(clipboard));
        self
    }

    /// Sets the schema text loaded at startup.
    #[must_use]
    pub fn initial_schema(mut self, text: impl Into<String>) -> Self {
        self.initial_schema = text.into();
        self
    }

    /// Builds the preview and loads the initial schema.
    #[must_use]
    pub fn build(self) -> LivePreview {
        let renderer =
            Renderer::new(self.presentation).with_patterns(self.schema_options.patterns);
        let submit_handler = self
            .submit_handler
            .unwrap_or_else(|| Box::new(LogSubmitHandler));

        let mut preview = LivePreview::new(
            renderer,
            self.schema_options,
            FormState::new(self.validation_mode),
            submit_handler,
            self.clipboard,
        );
        preview.load(self.initial_schema);
        preview
    }
}

impl Default for PreviewBuilder {
    fn default() -> Self {
        Self::new()
    }
}
