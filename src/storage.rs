//! Storage Layer
//!
//! Defines the durable key-value slot the note store persists into.
//! Implementations: browser `localStorage`, in-memory.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use thiserror::Error;

/// Storage-level errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage unavailable: {0}")]
    Unavailable(String),

    #[error("failed to read key {key:?}: {reason}")]
    Read { key: String, reason: String },

    #[error("failed to write key {key:?}: {reason}")]
    Write { key: String, reason: String },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type StorageResult<T> = Result<T, StorageError>;

/// Durable key-value slot
///
/// Values are whole serialized documents; writes replace the previous value.
pub trait NoteStorage {
    /// Read the value under `key`, `None` if never written
    fn read(&self, key: &str) -> StorageResult<Option<String>>;

    /// Replace the value under `key`
    fn write(&self, key: &str, value: &str) -> StorageResult<()>;
}

/// Browser `window.localStorage`
///
/// The handle is looked up per call so the type stays `Send + Sync`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    /// Check that `localStorage` can be reached from this page
    pub fn probe() -> StorageResult<Self> {
        Self::handle().map(|_| BrowserStorage)
    }

    fn handle() -> StorageResult<web_sys::Storage> {
        let window = web_sys::window()
            .ok_or_else(|| StorageError::Unavailable("no window".to_string()))?;
        window
            .local_storage()
            .map_err(|e| StorageError::Unavailable(format!("{:?}", e)))?
            .ok_or_else(|| StorageError::Unavailable("localStorage disabled".to_string()))
    }
}

impl NoteStorage for BrowserStorage {
    fn read(&self, key: &str) -> StorageResult<Option<String>> {
        Self::handle()?.get_item(key).map_err(|e| StorageError::Read {
            key: key.to_string(),
            reason: format!("{:?}", e),
        })
    }

    fn write(&self, key: &str, value: &str) -> StorageResult<()> {
        Self::handle()?.set_item(key, value).map_err(|e| StorageError::Write {
            key: key.to_string(),
            reason: format!("{:?}", e),
        })
    }
}

/// In-memory storage
///
/// Clones share the same map, so a test can keep a handle and inspect
/// what the store wrote.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    slots: Arc<Mutex<HashMap<String, String>>>,
    fail_writes: Arc<Mutex<bool>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
impl MemoryStorage {
    /// Storage pre-filled with one value
    pub fn with_value(key: &str, value: &str) -> Self {
        let storage = Self::new();
        if let Ok(mut slots) = storage.slots.lock() {
            slots.insert(key.to_string(), value.to_string());
        }
        storage
    }

    /// Make subsequent writes fail, as a full quota would
    pub fn set_fail_writes(&self, fail: bool) {
        if let Ok(mut flag) = self.fail_writes.lock() {
            *flag = fail;
        }
    }

    /// Raw stored value
    pub fn get(&self, key: &str) -> Option<String> {
        self.slots.lock().ok()?.get(key).cloned()
    }
}

impl NoteStorage for MemoryStorage {
    fn read(&self, key: &str) -> StorageResult<Option<String>> {
        let slots = self.slots.lock().map_err(|e| StorageError::Read {
            key: key.to_string(),
            reason: e.to_string(),
        })?;
        Ok(slots.get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> StorageResult<()> {
        let write_err = |reason: String| StorageError::Write {
            key: key.to_string(),
            reason,
        };
        if *self.fail_writes.lock().map_err(|e| write_err(e.to_string()))? {
            return Err(write_err("quota exceeded".to_string()));
        }
        self.slots
            .lock()
            .map_err(|e| write_err(e.to_string()))?
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Storage selected at startup: the browser when reachable, else memory
#[derive(Debug, Clone)]
pub enum BoardStorage {
    Browser(BrowserStorage),
    Memory(MemoryStorage),
}

impl BoardStorage {
    /// Prefer `localStorage`, falling back to an in-memory slot
    pub fn detect() -> Self {
        match BrowserStorage::probe() {
            Ok(browser) => BoardStorage::Browser(browser),
            Err(e) => {
                log::warn!("{}; notes will not survive a reload", e);
                BoardStorage::Memory(MemoryStorage::new())
            }
        }
    }

    pub fn is_durable(&self) -> bool {
        matches!(self, BoardStorage::Browser(_))
    }
}

impl NoteStorage for BoardStorage {
    fn read(&self, key: &str) -> StorageResult<Option<String>> {
        match self {
            BoardStorage::Browser(s) => s.read(key),
            BoardStorage::Memory(s) => s.read(key),
        }
    }

    fn write(&self, key: &str, value: &str) -> StorageResult<()> {
        match self {
            BoardStorage::Browser(s) => s.write(key, value),
            BoardStorage::Memory(s) => s.write(key, value),
        }
    }
}
