//! Key-value stores backing proposal history.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::error::{Error, Result};

/// Byte-oriented key-value persistence.
pub trait KeyValueStore: Send + Sync {
    /// Load the value stored under `key`, or `None` if nothing is stored.
    fn load(&self, key: &str) -> Result<Option<Vec<u8>>>;

    /// Store `value` under `key`, replacing any previous value.
    fn save(&self, key: &str, value: &[u8]) -> Result<()>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for &T {
    fn load(&self, key: &str) -> Result<Option<Vec<u8>>> {
        (**self).load(key)
    }

    fn save(&self, key: &str, value: &[u8]) -> Result<()> {
        (**self).save(key, value)
    }
}

/// In-process store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, Vec<u8>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn load(&self, key: &str) -> Result<Option<Vec<u8>>> {
        let guard = self
            .entries
            .lock()
            .map_err(|e| Error::Storage(e.to_string()))?;
        Ok(guard.get(key).cloned())
    }

    fn save(&self, key: &str, value: &[u8]) -> Result<()> {
        let mut guard = self
            .entries
            .lock()
            .map_err(|e| Error::Storage(e.to_string()))?;
        guard.insert(key.to_string(), value.to_vec());
        Ok(())
    }
}

/// Store keeping one `<key>.json` file per key in a directory.
///
/// The directory is created on the first save.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Directory holding the files.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// File used for `key`.
    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl KeyValueStore for FileStore {
    fn load(&self, key: &str) -> Result<Option<Vec<u8>>> {
        match fs::read(self.path_for(key)) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn save(&self, key: &str, value: &[u8]) -> Result<()> {
        fs::create_dir_all(&self.dir)?;
        fs::write(self.path_for(key), value)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_memory_store_roundtrip() {
        let store = MemoryStore::new();
        assert_eq!(store.load("k").unwrap(), None);
        store.save("k", b"[1]").unwrap();
        assert_eq!(store.load("k").unwrap(), Some(b"[1]".to_vec()));
        store.save("k", b"[]").unwrap();
        assert_eq!(store.load("k").unwrap(), Some(b"[]".to_vec()));
    }

    #[test]
    fn test_file_store_creates_directory() {
        let tmp = tempdir().unwrap();
        let store = FileStore::new(tmp.path().join("nested").join("history"));

        assert_eq!(store.load("proposals").unwrap(), None);
        store.save("proposals", b"[]").unwrap();

        assert!(store.path_for("proposals").exists());
        assert_eq!(store.load("proposals").unwrap(), Some(b"[]".to_vec()));
    }

    #[test]
    fn test_store_by_reference() {
        let store = MemoryStore::new();
        let by_ref = &store;
        by_ref.save("k", b"x").unwrap();
        assert_eq!(store.load("k").unwrap(), Some(b"x".to_vec()));
    }
}
