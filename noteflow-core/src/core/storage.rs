//! Key/value persistence boundary.
//!
//! The core never touches the filesystem directly; everything durable goes
//! through a [`StorageAdapter`]. Exactly two keys are in use: [`NOTES_KEY`]
//! holds the JSON-serialized note collection, [`THEME_KEY`] the current
//! theme name.

use crate::core::error::{NoteflowError, Result};
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

/// Storage key for the serialized note collection.
pub const NOTES_KEY: &str = "notes";

/// Storage key for the persisted theme name.
pub const THEME_KEY: &str = "themeMode";

/// Durable key/value store the core reads and writes through.
///
/// Implementations are expected to be synchronous; a write that returns `Ok`
/// is durable until the next write or external clearing of the store.
pub trait StorageAdapter {
    /// Reads the raw text stored under `key`, or `None` if the key is absent.
    fn read_raw(&self, key: &str) -> Result<Option<String>>;

    /// Writes `value` under `key`, replacing any previous value.
    fn write_raw(&mut self, key: &str, value: &str) -> Result<()>;
}

/// In-process adapter backed by a map. Used in tests and by embedders that
/// manage durability themselves.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageAdapter for MemoryStorage {
    fn read_raw(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn write_raw(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// File-backed adapter storing one `<key>.json` file per key inside `dir`.
///
/// A missing file reads as an absent key; parent directories are created on
/// first write.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new<P: Into<PathBuf>>(dir: P) -> Self {
        Self { dir: dir.into() }
    }

    /// Validates `key` and returns its path inside the storage directory.
    /// Keys must not contain path separators or `..`.
    fn entry_path(&self, key: &str) -> Result<PathBuf> {
        if key.is_empty() || key.contains('/') || key.contains('\\') || key.contains("..") {
            return Err(NoteflowError::InvalidKey(key.to_string()));
        }
        Ok(self.dir.join(format!("{key}.json")))
    }
}

impl StorageAdapter for FileStorage {
    fn read_raw(&self, key: &str) -> Result<Option<String>> {
        let path = self.entry_path(key)?;
        if !path.exists() {
            return Ok(None);
        }
        Ok(Some(fs::read_to_string(&path)?))
    }

    fn write_raw(&mut self, key: &str, value: &str) -> Result<()> {
        let path = self.entry_path(key)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, value)?;
        Ok(())
    }
}

/// Returns the default storage directory.
///
/// - macOS / Linux: `~/.config/noteflow`
/// - Windows: `%APPDATA%/NoteFlow`
pub fn default_data_dir() -> PathBuf {
    #[cfg(target_os = "windows")]
    {
        let base = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        base.join("NoteFlow")
    }
    #[cfg(not(target_os = "windows"))]
    {
        let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        home.join(".config").join("noteflow")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn memory_storage_roundtrip() {
        let mut storage = MemoryStorage::new();
        assert_eq!(storage.read_raw("missing").unwrap(), None);

        storage.write_raw("notes", "[]").unwrap();
        assert_eq!(storage.read_raw("notes").unwrap().as_deref(), Some("[]"));

        storage.write_raw("notes", "[1]").unwrap();
        assert_eq!(storage.read_raw("notes").unwrap().as_deref(), Some("[1]"));
    }

    #[test]
    fn file_storage_missing_key_reads_as_absent() {
        let temp = TempDir::new().unwrap();
        let storage = FileStorage::new(temp.path());
        assert_eq!(storage.read_raw("notes").unwrap(), None);
    }

    #[test]
    fn file_storage_roundtrip() {
        let temp = TempDir::new().unwrap();
        let mut storage = FileStorage::new(temp.path());

        storage.write_raw("themeMode", "dark").unwrap();
        assert_eq!(
            storage.read_raw("themeMode").unwrap().as_deref(),
            Some("dark")
        );
        assert!(temp.path().join("themeMode.json").exists());
    }

    #[test]
    fn file_storage_creates_missing_directory() {
        let temp = TempDir::new().unwrap();
        let mut storage = FileStorage::new(temp.path().join("nested"));

        storage.write_raw("notes", "[]").unwrap();
        assert!(temp.path().join("nested").join("notes.json").exists());
    }

    #[test]
    fn file_storage_rejects_path_traversal_keys() {
        let temp = TempDir::new().unwrap();
        let mut storage = FileStorage::new(temp.path());

        for key in ["../escape", "a/b", "a\\b", ""] {
            let result = storage.write_raw(key, "x");
            assert!(matches!(result, Err(NoteflowError::InvalidKey(_))), "{key:?}");
        }
    }
}
