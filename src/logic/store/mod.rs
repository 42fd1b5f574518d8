//! Store Module - Settings, Detection History & Feedback persistence
//!
//! Một `ResultStore` được tạo một lần cho mỗi process (hoặc inject trong test)
//! và truyền vào orchestrator.
//!
//! ## Structure
//! - `types`: Persisted documents (Settings, DetectionHistory, FeedbackData)
//! - `backend`: Key/value storage (file-backed or in-memory)
//! - `settings` / `history` / `feedback`: ResultStore operations per document
//!
//! Every operation holds the store lock for its whole read-modify-write, so
//! concurrent callers never lose updates.

pub mod types;
pub mod error;
pub mod backend;
mod settings;
mod history;
mod feedback;


use std::path::PathBuf;

use parking_lot::Mutex;
use serde::de::DeserializeOwned;
use serde::Serialize;

pub use backend::{FileBackend, MemoryBackend, StorageBackend};
pub use error::StoreError;
pub use types::{DetectionHistory, DetectionThreshold, FeedbackData, Settings};

// ============================================================================
// KEYS
// ============================================================================

pub const SETTINGS_KEY: &str = "phishsense_settings";
pub const HISTORY_KEY: &str = "phishsense_history";
pub const FEEDBACK_KEY: &str = "phishsense_feedback";

// ============================================================================
// RESULT STORE
// ============================================================================

pub struct ResultStore {
    backend: Mutex<Box<dyn StorageBackend>>,
}

impl ResultStore {
    pub fn with_backend(backend: Box<dyn StorageBackend>) -> Self {
        Self {
            backend: Mutex::new(backend),
        }
    }

    /// File-backed store in `dir`
    pub fn open(dir: PathBuf) -> Result<Self, StoreError> {
        log::info!("Opening result store at {:?}", dir);
        Ok(Self::with_backend(Box::new(FileBackend::new(dir)?)))
    }

    /// File-backed store in the configured data directory
    pub fn open_default() -> Result<Self, StoreError> {
        Self::open(crate::constants::get_data_dir())
    }

    pub fn in_memory() -> Self {
        Self::with_backend(Box::new(MemoryBackend::new()))
    }
}

// ============================================================================
// DOCUMENT HELPERS
// ============================================================================

fn load<T: DeserializeOwned>(
    backend: &dyn StorageBackend,
    key: &str,
) -> Result<Option<T>, StoreError> {
    match backend.read(key)? {
        None => Ok(None),
        Some(raw) => serde_json::from_str(&raw)
            .map(Some)
            .map_err(|e| StoreError::Corrupt {
                key: key.to_string(),
                reason: e.to_string(),
            }),
    }
}

fn save<T: Serialize>(
    backend: &mut dyn StorageBackend,
    key: &str,
    value: &T,
) -> Result<(), StoreError> {
    let json = serde_json::to_string_pretty(value)?;
    backend.write(key, &json)
}
