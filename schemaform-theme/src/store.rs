//! Key-value stores for persisted preferences.

use crate::error::ThemeError;
use parking_lot::Mutex;
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Persistent string key-value store.
pub trait ThemeStore: Send + Sync {
    /// Loads the value stored under `key`.
    ///
    /// # Errors
    /// Returns `ThemeError` if the backing storage cannot be read.
    fn load(&self, key: &str) -> Result<Option<String>, ThemeError>;

    /// Stores `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    /// Returns `ThemeError` if the backing storage cannot be written.
    fn save(&self, key: &str, value: &str) -> Result<(), ThemeError>;
}

/// Volatile store, mainly for tests and embedding.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store holding one entry.
    #[must_use]
    pub fn with_entry(key: impl Into<String>, value: impl Into<String>) -> Self {
        let store = Self::new();
        store.entries.lock().insert(key.into(), value.into());
        store
    }
}

impl ThemeStore for MemoryStore {
    fn load(&self, key: &str) -> Result<Option<String>, ThemeError> {
        Ok(self.entries.lock().get(key).cloned())
    }

    fn save(&self, key: &str, value: &str) -> Result<(), ThemeError> {
        self.entries
            .lock()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Store backed by a JSON object file.
///
/// The file is created on the first save. Non-string entries written by
/// other tools are left untouched; a file that is not a JSON object is
/// replaced.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileStore {
    /// Creates a store for the given file path.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    /// Returns the file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_entries(&self) -> Result<Map<String, Value>, ThemeError> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Map::new()),
            Err(e) => return Err(ThemeError::Io(e)),
        };
        if content.trim().is_empty() {
            return Ok(Map::new());
        }
        match serde_json::from_str(&content)? {
            Value::Object(entries) => Ok(entries),
            _ => Err(ThemeError::Corrupt {
                path: self.path.clone(),
            }),
        }
    }
}

impl ThemeStore for FileStore {
    fn load(&self, key: &str) -> Result<Option<String>, ThemeError> {
        let _guard = self.lock.lock();
        let entries = self.read_entries()?;
        Ok(entries.get(key).and_then(Value::as_str).map(str::to_string))
    }

    fn save(&self, key: &str, value: &str) -> Result<(), ThemeError> {
        let _guard = self.lock.lock();
        let mut entries = match self.read_entries() {
            Ok(entries) => entries,
            Err(e @ (ThemeError::Json(_) | ThemeError::Corrupt { .. })) => {
                tracing::warn!("Overwriting unreadable store {}: {}", self.path.display(), e);
                Map::new()
            }
            Err(e) => return Err(e),
        };
        entries.insert(key.to_string(), Value::String(value.to_string()));
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(&Value::Object(entries))?;
        std::fs::write(&self.path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store() {
        let store = MemoryStore::new();
        assert_eq!(store.load("theme").unwrap(), None);
        store.save("theme", "dark").unwrap();
        assert_eq!(store.load("theme").unwrap().as_deref(), Some("dark"));
    }

    #[test]
    fn test_memory_store_with_entry() {
        let store = MemoryStore::with_entry("theme", "light");
        assert_eq!(store.load("theme").unwrap().as_deref(), Some("light"));
    }

    #[test]
    fn test_file_store_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("prefs.json"));
        assert_eq!(store.load("theme").unwrap(), None);
    }

    #[test]
    fn test_file_store_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("prefs.json");

        let store = FileStore::new(&path);
        store.save("theme", "dark").unwrap();
        store.save("other", "x").unwrap();

        let reopened = FileStore::new(&path);
        assert_eq!(reopened.load("theme").unwrap().as_deref(), Some("dark"));
        assert_eq!(reopened.load("other").unwrap().as_deref(), Some("x"));
    }

    #[test]
    fn test_file_store_keeps_foreign_entries() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");
        std::fs::write(&path, r#"{"volume": 7}"#).unwrap();

        let store = FileStore::new(&path);
        store.save("theme", "light").unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let value: Value = serde_json::from_str(&content).unwrap();
        assert_eq!(value["volume"], 7);
        assert_eq!(value["theme"], "light");
    }

    #[test]
    fn test_file_store_corrupt() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");

        std::fs::write(&path, "[1, 2]").unwrap();
        let store = FileStore::new(&path);
        assert!(matches!(store.load("theme"), Err(ThemeError::Corrupt { .. })));

        std::fs::write(&path, "{oops").unwrap();
        assert!(matches!(store.load("theme"), Err(ThemeError::Json(_))));
    }

    #[test]
    fn test_file_store_save_replaces_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");
        std::fs::write(&path, r#"{"theme": "da"#).unwrap();

        let store = FileStore::new(&path);
        store.save("theme", "dark").unwrap();
        assert_eq!(store.load("theme").unwrap().as_deref(), Some("dark"));
    }
}
