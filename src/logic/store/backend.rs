//! Storage Backends
//!
//! Key/value document storage. Values are JSON strings.

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use super::error::StoreError;

pub trait StorageBackend: Send {
    /// `Ok(None)` when the key was never written
    fn read(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Replace the whole document for `key`
    fn write(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

// ============================================================================
// FILE BACKEND
// ============================================================================

/// One JSON file per key inside a directory.
///
/// Writes go to a temp file and are renamed into place, so a reader never
/// sees a half-written document.
pub struct FileBackend {
    base_dir: PathBuf,
}

impl FileBackend {
    pub fn new(base_dir: PathBuf) -> Result<Self, StoreError> {
        fs::create_dir_all(&base_dir)?;
        Ok(Self { base_dir })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.base_dir.join(format!("{}.json", key))
    }
}

impl StorageBackend for FileBackend {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        let path = self.path_for(key);
        if !path.exists() {
            return Ok(None);
        }
        Ok(Some(fs::read_to_string(path)?))
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        let path = self.path_for(key);
        let tmp = self.base_dir.join(format!("{}.json.tmp", key));

        fs::write(&tmp, value)?;
        fs::rename(&tmp, &path)?;
        Ok(())
    }
}

// ============================================================================
// MEMORY BACKEND
// ============================================================================

#[derive(Default)]
pub struct MemoryBackend {
    documents: HashMap<String, String>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageBackend for MemoryBackend {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.documents.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.documents.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
