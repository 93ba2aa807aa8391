//! Form renderer.
//!
//! One renderer serves both the plain form and the decorated preview; the
//! differences are carried by [`PresentationOptions`].

use crate::control::{ControlDescriptor, ControlKind, CopyAction, Icon, SubmitControl};
use crate::options::PresentationOptions;
use crate::state::{ErrorMap, FieldRegistry, FieldRules};
use regex::Regex;
use schemaform_core::{FieldSpec, FormDocument};
use schemaform_schema::{PatternPolicy, SchemaError};

/// Notice shown instead of a form when the schema cannot be used.
pub const INVALID_SCHEMA_NOTICE: &str = "Invalid JSON Schema";

/// Notice shown when there is no schema document at all.
pub const MISSING_SCHEMA_NOTICE: &str = "No valid schema provided";

const SUBMIT_LABEL: &str = "Submit";
const COPY_LABEL: &str = "Copy JSON";

/// Schema-driven form renderer.
#[derive(Debug, Clone, Copy, Default)]
pub struct Renderer {
    presentation: PresentationOptions,
    patterns: PatternPolicy,
}

impl Renderer {
    /// Creates a renderer with the given presentation.
    #[must_use]
    pub const fn new(presentation: PresentationOptions) -> Self {
        Self {
            presentation,
            patterns: PatternPolicy::Ignore,
        }
    }

    /// Sets the pattern policy.
    #[must_use]
    pub const fn with_patterns(mut self, patterns: PatternPolicy) -> Self {
        self.patterns = patterns;
        self
    }

    /// Returns the presentation options.
    #[must_use]
    pub const fn presentation(&self) -> PresentationOptions {
        self.presentation
    }

    /// Renders a document and registers its fields.
    ///
    /// # Arguments
    /// * `document` - The validated document
    /// * `registry` - Receives one registration per field, in order
    pub fn render(&self, document: &FormDocument, registry: &mut dyn FieldRegistry) -> FormView {
        let icons = self.presentation.icons;
        let mut controls = Vec::with_capacity(document.fields.len());

        for field in &document.fields {
            let control = ControlDescriptor::from_field(field, icons);
            registry.register(&field.id, self.rules_for(field), control.default_value());
            controls.push(control);
        }

        let ids: Vec<&str> = document.fields.iter().map(|f| f.id.as_str()).collect();
        registry.retain(&ids);

        tracing::debug!(
            "Rendered form '{}' with {} controls",
            document.form_title,
            controls.len()
        );

        FormView {
            title: document.form_title.clone(),
            description: document.form_description.clone(),
            controls,
            submit: SubmitControl {
                label: SUBMIT_LABEL,
                icon: icons.then_some(Icon::Check),
            },
            copy_action: self.presentation.copy_action.then(|| CopyAction {
                label: COPY_LABEL,
                icon: icons.then_some(Icon::Copy),
            }),
        }
    }

    /// Renders the outcome of parsing.
    ///
    /// A failed parse never yields a partial form: it renders a single
    /// notice block instead.
    pub fn render_outcome(
        &self,
        outcome: Result<&FormDocument, &SchemaError>,
        registry: &mut dyn FieldRegistry,
    ) -> Preview {
        match outcome {
            Ok(document) => Preview::Form(self.render(document, registry)),
            Err(SchemaError::MissingDocument) => Preview::Missing,
            Err(e) => Preview::Invalid {
                detail: e.to_string(),
            },
        }
    }

    fn rules_for(&self, field: &FieldSpec) -> FieldRules {
        let rules = FieldRules::required(field.required, field.required_message());
        if !self.patterns.is_enforced() {
            return rules;
        }
        match field.pattern() {
            Some(pattern) => match Regex::new(&format!("^(?:{pattern})$")) {
                Ok(re) => rules.with_pattern(re, field.pattern_message()),
                Err(e) => {
                    tracing::warn!("Skipping pattern for field '{}': {}", field.id, e);
                    rules
                }
            },
            None => rules,
        }
    }
}

/// Declarative description of a rendered form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormView {
    /// Heading.
    pub title: String,
    /// Sub-heading.
    pub description: String,
    /// One control per field, in field order.
    pub controls: Vec<ControlDescriptor>,
    /// Submit control.
    pub submit: SubmitControl,
    /// Copy action, when enabled.
    pub copy_action: Option<CopyAction>,
}

impl FormView {
    /// Looks up a control by field id.
    #[must_use]
    pub fn control(&self, id: &str) -> Option<&ControlDescriptor> {
        self.controls.iter().find(|c| c.id == id)
    }

    /// Lays the form out top to bottom.
    ///
    /// Each field error appears immediately after its control.
    #[must_use]
    pub fn layout<'a>(&'a self, errors: &'a ErrorMap) -> Vec<Block<'a>> {
        let mut blocks = Vec::with_capacity(self.controls.len() * 2 + 4);
        blocks.push(Block::Heading(&self.title));
        if let Some(copy) = &self.copy_action {
            blocks.push(Block::Copy(copy));
        }
        blocks.push(Block::Description(&self.description));
        for control in &self.controls {
            blocks.push(Block::Control(control));
            if let Some(error) = errors.get(&control.id) {
                blocks.push(Block::Error {
                    id: &control.id,
                    message: error.message(),
                });
            }
        }
        blocks.push(Block::Submit(&self.submit));
        blocks
    }

    /// Renders the layout as plain text, one block per line.
    #[must_use]
    pub fn to_text(&self, errors: &ErrorMap) -> String {
        let mut out = String::new();
        for block in self.layout(errors) {
            match block {
                Block::Heading(title) => out.push_str(&format!("# {title}\n")),
                Block::Copy(copy) => out.push_str(&format!("[{}]\n", copy.label)),
                Block::Description(text) => out.push_str(&format!("{text}\n")),
                Block::Control(control) => write_control(&mut out, control),
                Block::Error { message, .. } => out.push_str(&format!("    ! {message}\n")),
                Block::Submit(submit) => out.push_str(&format!("[ {} ]\n", submit.label)),
            }
        }
        out
    }
}

fn write_control(out: &mut String, control: &ControlDescriptor) {
    out.push_str(&format!("{}\n", control.caption()));
    match &control.kind {
        ControlKind::Select { options, .. } => {
            let labels: Vec<&str> = options.iter().map(|o| o.label.as_str()).collect();
            out.push_str(&format!("    <select: {}> v\n", labels.join(" | ")));
        }
        ControlKind::Input {
            input_mode,
            placeholder,
            ..
        } => out.push_str(&format!("    <{input_mode}: {placeholder}>\n")),
    }
}

/// One laid-out element of a form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Block<'a> {
    /// Form heading.
    Heading(&'a str),
    /// Copy action.
    Copy(&'a CopyAction),
    /// Form sub-heading.
    Description(&'a str),
    /// A field's label and control.
    Control(&'a ControlDescriptor),
    /// Error line beneath a control.
    Error {
        /// Field id.
        id: &'a str,
        /// Message.
        message: &'a str,
    },
    /// Submit control.
    Submit(&'a SubmitControl),
}

/// What the preview pane shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Preview {
    /// A rendered form.
    Form(FormView),
    /// The schema could not be used.
    Invalid {
        /// Description of the failure.
        detail: String,
    },
    /// There is no schema document.
    Missing,
}

impl Preview {
    /// Returns the rendered form, if any.
    #[must_use]
    pub const fn form(&self) -> Option<&FormView> {
        match self {
            Self::Form(view) => Some(view),
            _ => None,
        }
    }

    /// Returns true if a form is shown.
    #[must_use]
    pub const fn is_form(&self) -> bool {
        matches!(self, Self::Form(_))
    }

    /// Returns the notice shown in place of a form.
    #[must_use]
    pub const fn notice(&self) -> Option<&'static str> {
        match self {
            Self::Form(_) => None,
            Self::Invalid { .. } => Some(INVALID_SCHEMA_NOTICE),
            Self::Missing => Some(MISSING_SCHEMA_NOTICE),
        }
    }
}
