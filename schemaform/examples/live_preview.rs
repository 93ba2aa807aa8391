//! Example live preview session driven from the command line.
//!
//! Run with: `cargo run --example live_preview`
//!
//! Set `RUST_LOG=debug` to see parser and form state logs.

use schemaform::prelude::*;

const CONTACT_SCHEMA: &str = r#"{
  "formTitle": "Contact",
  "formDescription": "Tell us how to reach you.",
  "fields": [
    { "id": "name", "type": "text", "label": "Name", "required": true },
    { "id": "email", "type": "email", "label": "Email", "required": true,
      "validation": { "pattern": "[^@]+@[^@]+", "message": "Enter a valid email" } },
    { "id": "topic", "type": "select", "label": "Topic",
      "options": [ { "value": "sales", "label": "Sales" }, { "value": "support", "label": "Support" } ] }
  ]
}"#;

fn main() -> anyhow::Result<()> {
    // Initialize tracing for logging
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let dir = tempfile::tempdir()?;
    let clipboard = MemoryClipboard::new();

    let builder = PreviewBuilder::new()
        .schema_options(SchemaOptions::new().patterns(PatternPolicy::Enforce))
        .clipboard(clipboard.clone())
        .submit_handler(FnSubmitHandler::new(|values: &FieldValues| {
            println!("[Form] Submitted: {:?}", values);
        }));
    let mut workbench = Workbench::open(FileStore::new(dir.path().join("prefs.json")), builder)?;

    println!("Theme: {} (toggle: {})", workbench.theme(), workbench.theme_label());
    println!("{}", workbench.preview().render_text());

    let preview = workbench.preview_mut();
    let outcome = preview.edit(CONTACT_SCHEMA);
    println!("Edit: {:?}", outcome);
    println!("{}", preview.render_text());

    // Half-typed text keeps the last good form
    let outcome = preview.edit(r#"{ "formTitle": "Cont"#);
    println!("Edit: {:?}, editor error: {:?}", outcome, preview.editor().error());

    if let Some(SubmitOutcome::Rejected(errors)) = preview.submit() {
        for (id, error) in &errors {
            println!("[Form] {}: {}", id, error);
        }
    }
    println!("{}", preview.render_text());

    preview.set_value("name", "Ada Lovelace");
    preview.set_value("email", "ada@example.com");
    preview.submit();

    if let Some(notification) = preview.copy_schema() {
        println!("[{:?}] {}", notification.kind, notification.message);
    }
    println!("Clipboard holds {} bytes", clipboard.contents().map_or(0, |s| s.len()));

    let theme = workbench.toggle_theme()?;
    println!("Theme switched to {}", theme);

    Ok(())
}
