//! Storage
//!
//! Durable client-side key-value storage for persisted preferences.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Persisted preference keys
pub mod keys {
    pub const FONT_SIZE: &str = "accessibility-font-size";
    pub const THEME: &str = "accessibility-theme";
    pub const REDUCE_MOTION: &str = "accessibility-reduce-motion";
}

/// Storage error
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Storage unavailable")]
    Unavailable,

    #[error("Storage I/O failed for {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Key-value storage that outlives a single page view.
pub trait DurableStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

impl<S: DurableStore + ?Sized> DurableStore for Box<S> {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get_item(key)
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set_item(key, value)
    }
}

/// Storage backend
#[derive(Debug, Default)]
pub struct Storage {
    data: BTreeMap<String, String>,
    path: Option<PathBuf>,
}

impl Storage {
    /// Create in-memory storage
    pub fn session() -> Self {
        Self::default()
    }

    /// Create file-backed storage, loading any existing entries.
    ///
    /// A missing file starts empty. Lines without a tab separator or with
    /// invalid UTF-8 are skipped; the next write rewrites the file without them.
    pub fn local(path: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let path = path.into();
        let mut data = BTreeMap::new();

        match fs::read(&path) {
            Ok(contents) => {
                for line in contents.split(|&b| b == b'\n') {
                    let Ok(line) = std::str::from_utf8(line) else {
                        tracing::warn!("Skipping non-UTF-8 storage line in {}", path.display());
                        continue;
                    };
                    let line = line.strip_suffix('\r').unwrap_or(line);
                    match line.split_once('\t') {
                        Some((key, value)) => {
                            data.insert(unescape(key), unescape(value));
                        }
                        None if line.is_empty() => {}
                        None => tracing::warn!("Skipping malformed storage line in {}", path.display()),
                    }
                }
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(source) => return Err(StorageError::Io { path, source }),
        }

        tracing::debug!("Loaded {} storage entries from {}", data.len(), path.display());
        Ok(Self { data, path: Some(path) })
    }

    /// Backing file, if persistent
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.data.get(key).map(|s| s.as_str())
    }

    /// Get number of items
    pub fn length(&self) -> usize {
        self.data.len()
    }

    /// Flush to disk if persistent
    fn persist(&self) -> Result<(), StorageError> {
        let Some(path) = &self.path else { return Ok(()) };

        let contents: String = self.data
            .iter()
            .map(|(k, v)| format!("{}\t{}\n", escape(k), escape(v)))
            .collect();
        fs::write(path, contents).map_err(|source| StorageError::Io { path: path.clone(), source })
    }
}

/// Escape the separators of the line format (`\\`, tab, newline, CR)
fn escape(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' => result.push_str("\\\\"),
            '\t' => result.push_str("\\t"),
            '\n' => result.push_str("\\n"),
            '\r' => result.push_str("\\r"),
            c => result.push(c),
        }
    }
    result
}

fn unescape(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            result.push(c);
            continue;
        }
        match chars.next() {
            Some('t') => result.push('\t'),
            Some('n') => result.push('\n'),
            Some('r') => result.push('\r'),
            Some(other) => result.push(other),
            None => result.push('\\'),
        }
    }
    result
}

impl DurableStore for Storage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.get(key).map(str::to_string))
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.data.insert(key.to_string(), value.to_string());
        self.persist()
    }
}

/// Storage that refuses every access (denied permission, quota, no browser).
#[derive(Debug, Default, Clone, Copy)]
pub struct UnavailableStorage;

impl DurableStore for UnavailableStorage {
    fn get_item(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::Unavailable)
    }

    fn set_item(&mut self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_storage() {
        let mut storage = Storage::session();
        assert_eq!(storage.path(), None);

        storage.set_item("key1", "value1").unwrap();
        assert_eq!(storage.get_item("key1").unwrap().as_deref(), Some("value1"));

        storage.set_item("key2", "value2").unwrap();
        storage.set_item("key1", "value3").unwrap();
        assert_eq!(storage.length(), 2);
        assert_eq!(storage.get_item("key1").unwrap().as_deref(), Some("value3"));
        assert_eq!(storage.get_item("key3").unwrap(), None);
    }

    #[test]
    fn test_local_storage_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storage.tsv");

        let mut storage = Storage::local(&path).unwrap();
        assert_eq!(storage.length(), 0);
        storage.set_item(keys::THEME, "dark").unwrap();
        storage.set_item(keys::REDUCE_MOTION, "true").unwrap();

        let reloaded = Storage::local(&path).unwrap();
        assert_eq!(reloaded.get(keys::THEME), Some("dark"));
        assert_eq!(reloaded.get(keys::REDUCE_MOTION), Some("true"));
    }

    #[test]
    fn test_local_storage_skips_malformed_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storage.tsv");
        fs::write(&path, "garbage\naccessibility-theme\tlight\n\n").unwrap();

        let storage = Storage::local(&path).unwrap();
        assert_eq!(storage.length(), 1);
        assert_eq!(storage.get(keys::THEME), Some("light"));
    }

    #[test]
    fn test_local_storage_separators_survive_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storage.tsv");

        let mut storage = Storage::local(&path).unwrap();
        storage.set_item("k", "a\nb").unwrap();
        storage.set_item("tab\tkey", "c\td\\n\r").unwrap();

        let reloaded = Storage::local(&path).unwrap();
        assert_eq!(reloaded.length(), 2);
        assert_eq!(reloaded.get("k"), Some("a\nb"));
        assert_eq!(reloaded.get("tab\tkey"), Some("c\td\\n\r"));
    }

    #[test]
    fn test_escape_round_trip() {
        for raw in ["", "plain", "\\", "\\n", "a\tb\nc", "trailing\\"] {
            assert_eq!(unescape(&escape(raw)), raw);
        }
        assert_eq!(escape("a\nb"), "a\\nb");
    }

    #[test]
    fn test_local_storage_skips_invalid_utf8() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storage.tsv");
        fs::write(&path, b"accessibility-theme\tlight\n\xff\xfe\n").unwrap();

        let mut storage = Storage::local(&path).unwrap();
        assert_eq!(storage.length(), 1);
        assert_eq!(storage.get(keys::THEME), Some("light"));

        // The next write drops the corrupt line
        storage.set_item(keys::FONT_SIZE, "large").unwrap();
        let contents = fs::read(&path).unwrap();
        assert!(std::str::from_utf8(&contents).is_ok());
        let reloaded = Storage::local(&path).unwrap();
        assert_eq!(reloaded.get(keys::THEME), Some("light"));
        assert_eq!(reloaded.get(keys::FONT_SIZE), Some("large"));
    }

    #[test]
    fn test_local_storage_write_failure() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("storage.tsv");

        let mut storage = Storage::local(&path).unwrap();
        let err = storage.set_item(keys::THEME, "dark").unwrap_err();
        assert!(matches!(err, StorageError::Io { .. }));
        // The in-memory copy still holds the value
        assert_eq!(storage.get(keys::THEME), Some("dark"));
    }

    #[test]
    fn test_unavailable_storage() {
        let mut storage = UnavailableStorage;
        assert!(matches!(storage.get_item(keys::THEME), Err(StorageError::Unavailable)));
        assert!(matches!(storage.set_item(keys::THEME, "dark"), Err(StorageError::Unavailable)));
    }
}
