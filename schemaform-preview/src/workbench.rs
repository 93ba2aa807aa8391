//! Preview paired with the theme preference.

use crate::builder::PreviewBuilder;
use crate::error::PreviewError;
use crate::session::LivePreview;
use schemaform_theme::{Theme, ThemeService, ThemeStore};

/// The editing surface: a live preview and the theme it is shown in.
#[derive(Debug)]
pub struct Workbench {
    preview: LivePreview,
    theme: ThemeService,
}

impl Workbench {
    /// Creates a workbench from parts.
    #[must_use]
    pub fn new(preview: LivePreview, theme: ThemeService) -> Self {
        Self { preview, theme }
    }

    /// Restores the theme from `store` and builds the preview.
    ///
    /// An unreadable preference falls back to the light theme.
    ///
    /// # Errors
    /// Returns `PreviewError` if the theme store cannot be accessed.
    pub fn open(
        store: impl ThemeStore + 'static,
        builder: PreviewBuilder,
    ) -> Result<Self, PreviewError> {
        let theme = ThemeService::init(store)?;
        tracing::info!("Workbench opened with {} theme", theme.current());
        Ok(Self::new(builder.build(), theme))
    }

    /// Returns the current theme.
    #[must_use]
    pub fn theme(&self) -> Theme {
        self.theme.current()
    }

    /// Returns the theme service.
    #[must_use]
    pub fn theme_service(&self) -> &ThemeService {
        &self.theme
    }

    /// Switches and persists the theme.
    ///
    /// # Errors
    /// Returns `PreviewError` if the preference cannot be saved.
    pub fn toggle_theme(&self) -> Result<Theme, PreviewError> {
        Ok(self.theme.toggle()?)
    }

    /// Caption of the theme toggle.
    #[must_use]
    pub fn theme_label(&self) -> &'static str {
        self.theme.current().toggle_label()
    }

    /// Returns the preview.
    #[must_use]
    pub fn preview(&self) -> &LivePreview {
        &self.preview
    }

    /// Returns the preview for editing.
    pub fn preview_mut(&mut self) -> &mut LivePreview {
        &mut self.preview
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use schemaform_theme::{FileStore, MemoryStore};

    #[test]
    fn test_open_with_empty_store() {
        let workbench = Workbench::open(MemoryStore::new(), PreviewBuilder::new()).unwrap();
        assert_eq!(workbench.theme(), Theme::Light);
        assert_eq!(workbench.theme_label(), "Dark Mode");
        assert!(workbench.preview().preview().is_form());
    }

    #[test]
    fn test_theme_restored_after_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");

        let workbench = Workbench::open(FileStore::new(&path), PreviewBuilder::new()).unwrap();
        assert_eq!(workbench.toggle_theme().unwrap(), Theme::Dark);
        drop(workbench);

        let reloaded = Workbench::open(FileStore::new(&path), PreviewBuilder::new()).unwrap();
        assert_eq!(reloaded.theme(), Theme::Dark);
        assert_eq!(reloaded.theme_label(), "Light Mode");
    }

    #[test]
    fn test_corrupt_store_opens_with_light_theme() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");
        std::fs::write(&path, r#"{"theme": "da"#).unwrap();

        let workbench = Workbench::open(FileStore::new(&path), PreviewBuilder::new()).unwrap();
        assert_eq!(workbench.theme(), Theme::Light);
        assert!(workbench.preview().preview().is_form());
        assert_eq!(workbench.toggle_theme().unwrap(), Theme::Dark);

        let reloaded = Workbench::open(FileStore::new(&path), PreviewBuilder::new()).unwrap();
        assert_eq!(reloaded.theme(), Theme::Dark);
    }

    #[test]
    fn test_edits_through_workbench() {
        let mut workbench = Workbench::open(MemoryStore::new(), PreviewBuilder::new()).unwrap();
        workbench
            .preview_mut()
            .edit(r#"{"formTitle":"New","formDescription":"","fields":[]}"#);
        let view = workbench.preview().preview().form().expect("form");
        assert_eq!(view.title, "New");
    }
}
