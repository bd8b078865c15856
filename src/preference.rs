//! Persisted locale preference
//!
//! A tiny key-value interface standing in for the browser's persistent storage.
//! Reads and writes never fail from the caller's point of view.

use std::collections::{
    BTreeMap,
    HashMap,
};
use std::path::{
    Path,
    PathBuf,
};

use thiserror::Error;

/// Errors raised while reading or writing a file-backed store.
#[derive(Error, Debug)]
pub enum PreferenceError {
    #[error("Failed to access preference file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to encode preferences: {0}")]
    EncodeError(#[from] serde_json::Error),
}

/// Key-value store holding user preferences as plain strings.
pub trait PreferenceStore {
    /// Returns the stored value, if any.
    fn get(&self, key: &str) -> Option<String>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str);
}

/// In-memory store. Forgets everything when dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryPreferenceStore {
    /// Stored values
    values: HashMap<String, String>,
}

impl MemoryPreferenceStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store that already holds one value.
    #[must_use]
    pub fn with_value(key: &str, value: &str) -> Self {
        let mut store = Self::new();
        store.set(key, value);
        store
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
    }
}

/// Store backed by a JSON object file, e.g. `{"language": "fil"}`.
///
/// Values are cached in memory and the whole file is rewritten on every `set`.
#[derive(Debug, Clone)]
pub struct FilePreferenceStore {
    /// Location of the JSON file
    path: PathBuf,
    /// Cached contents
    values: BTreeMap<String, String>,
}

impl FilePreferenceStore {
    /// Opens the store at `path`.
    ///
    /// A missing file is an empty store; it is created on the first `set`.
    /// A corrupt file is also treated as empty and overwritten on the first `set`.
    ///
    /// # Errors
    /// - File read error
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, PreferenceError> {
        let path = path.into();

        if !path.exists() {
            tracing::debug!("Preference file not found, starting empty: {:?}", path);
            return Ok(Self { path, values: BTreeMap::new() });
        }

        let content = std::fs::read_to_string(&path)?;
        let values = match serde_json::from_str::<BTreeMap<String, String>>(&content) {
            Ok(values) => values,
            Err(e) => {
                tracing::warn!("Ignoring corrupt preference file {:?}: {}", path, e);
                BTreeMap::new()
            }
        };
        tracing::debug!("Loaded {} preference(s) from {:?}", values.len(), path);

        Ok(Self { path, values })
    }

    /// Location of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Writes the cached values to disk.
    ///
    /// # Errors
    /// - JSON serialization error
    /// - File write error
    pub fn flush(&self) -> Result<(), PreferenceError> {
        let content = serde_json::to_string_pretty(&self.values)?;
        std::fs::write(&self.path, content)?;
        Ok(())
    }
}

impl PreferenceStore for FilePreferenceStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
        if let Err(e) = self.flush() {
            tracing::warn!("Failed to persist preference '{}' to {:?}: {}", key, self.path, e);
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::fs;

    use googletest::prelude::*;
    use rstest::rstest;
    use tempfile::TempDir;

    use super::*;

    #[googletest::test]
    fn test_memory_store_get_set() {
        let mut store = MemoryPreferenceStore::new();

        expect_that!(store.get("language"), none());

        store.set("language", "fil");
        expect_that!(store.get("language"), some(eq("fil")));

        store.set("language", "en");
        expect_that!(store.get("language"), some(eq("en")));
    }

    #[googletest::test]
    fn test_memory_store_with_value() {
        let store = MemoryPreferenceStore::with_value("language", "fil");

        expect_that!(store.get("language"), some(eq("fil")));
        expect_that!(store.get("theme"), none());
    }

    /// open: ファイルが存在しない場合は空
    #[rstest]
    fn test_file_store_missing_file_is_empty() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("prefs.json");

        let store = FilePreferenceStore::open(&path).unwrap();

        assert!(store.get("language").is_none());
        assert!(!path.exists());
    }

    #[rstest]
    fn test_file_store_persists_across_reopen() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("prefs.json");

        let mut store = FilePreferenceStore::open(&path).unwrap();
        store.set("language", "fil");

        let reopened = FilePreferenceStore::open(&path).unwrap();
        assert_eq!(reopened.get("language").as_deref(), Some("fil"));
        assert_eq!(reopened.path(), path.as_path());
    }

    #[rstest]
    fn test_file_store_reads_existing_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("prefs.json");
        fs::write(&path, r#"{"language": "en", "other": "x"}"#).unwrap();

        let store = FilePreferenceStore::open(&path).unwrap();

        assert_eq!(store.get("language").as_deref(), Some("en"));
        assert_eq!(store.get("other").as_deref(), Some("x"));
    }

    #[rstest]
    #[case::not_json("language=fil")]
    #[case::not_an_object(r#"["fil"]"#)]
    #[case::non_string_value(r#"{"language": 1}"#)]
    fn test_file_store_corrupt_file_starts_empty(#[case] content: &str) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("prefs.json");
        fs::write(&path, content).unwrap();

        let mut store = FilePreferenceStore::open(&path).unwrap();
        assert!(store.get("language").is_none());

        // first write replaces the corrupt content
        store.set("language", "fil");
        let reopened = FilePreferenceStore::open(&path).unwrap();
        assert_eq!(reopened.get("language").as_deref(), Some("fil"));
    }

    #[rstest]
    fn test_file_store_unreadable_path_is_error() {
        let temp_dir = TempDir::new().unwrap();

        // a directory exists but cannot be read as a file
        let result = FilePreferenceStore::open(temp_dir.path());

        assert!(matches!(result, Err(PreferenceError::IoError(_))));
    }

    #[rstest]
    fn test_file_store_write_failure_keeps_value_in_memory() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing-dir").join("prefs.json");

        let mut store = FilePreferenceStore::open(&path).unwrap();
        store.set("language", "fil");

        assert_eq!(store.get("language").as_deref(), Some("fil"));
        assert!(store.flush().is_err());
        assert!(!path.exists());
    }
}
