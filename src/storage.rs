//! Persistence Adapter
//!
//! Synchronous key-value storage behind a trait, with a browser `localStorage`
//! backend and an in-memory one. `Persistence` maps the task collection and
//! theme onto their two named entries.

#[cfg(test)]
use std::collections::HashMap;
use std::sync::Arc;
#[cfg(test)]
use std::sync::Mutex;

use thiserror::Error;

use crate::config::StorageKeys;
use crate::models::{Task, Theme};

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("local storage is unavailable")]
    Unavailable,
    #[error("failed to read {key}: {reason}")]
    Read { key: String, reason: String },
    #[error("failed to write {key}: {reason}")]
    Write { key: String, reason: String },
    #[error("invalid task data: {0}")]
    Json(#[from] serde_json::Error),
}

pub type StorageResult<T> = Result<T, StorageError>;

/// Synchronous string key-value store
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> StorageResult<Option<String>>;

    fn set(&self, key: &str, value: &str) -> StorageResult<()>;
}

// ========================
// Browser localStorage
// ========================

/// `window.localStorage`, looked up on every call
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn storage() -> StorageResult<web_sys::Storage> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .ok_or(StorageError::Unavailable)
    }
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        Self::storage()?.get_item(key).map_err(|e| StorageError::Read {
            key: key.to_string(),
            reason: format!("{:?}", e),
        })
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        // Quota errors surface here
        Self::storage()?.set_item(key, value).map_err(|e| StorageError::Write {
            key: key.to_string(),
            reason: format!("{:?}", e),
        })
    }
}

// ========================
// In-memory store (tests)
// ========================

#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, String>>,
    reject_writes: bool,
}

#[cfg(test)]
impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose every `set` fails, for exercising write-failure paths
    pub fn rejecting_writes() -> Self {
        Self {
            reject_writes: true,
            ..Self::default()
        }
    }

    pub fn with_entry(self, key: &str, value: &str) -> Self {
        self.lock().insert(key.to_string(), value.to_string());
        self
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, String>> {
        self.entries.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[cfg(test)]
impl KeyValueStore for MemoryStorage {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.lock().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        if self.reject_writes {
            return Err(StorageError::Write {
                key: key.to_string(),
                reason: "writes rejected".to_string(),
            });
        }
        self.lock().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

// ========================
// Named entries
// ========================

/// Reads and writes the task collection (JSON array) and theme (raw text)
#[derive(Clone)]
pub struct Persistence {
    backend: Arc<dyn KeyValueStore>,
    keys: StorageKeys,
}

impl Persistence {
    pub fn new(backend: Arc<dyn KeyValueStore>, keys: StorageKeys) -> Self {
        Self { backend, keys }
    }

    pub fn browser() -> Self {
        Self::new(Arc::new(BrowserStorage), StorageKeys::default())
    }

    /// Absent entry is an empty collection
    pub fn load_tasks(&self) -> StorageResult<Vec<Task>> {
        match self.backend.get(&self.keys.tasks)? {
            Some(raw) => Ok(serde_json::from_str(&raw)?),
            None => Ok(Vec::new()),
        }
    }

    /// Overwrites the whole stored collection
    pub fn save_tasks(&self, tasks: &[Task]) -> StorageResult<()> {
        let raw = serde_json::to_string(tasks)?;
        self.backend.set(&self.keys.tasks, &raw)
    }

    pub fn load_theme(&self) -> StorageResult<Option<Theme>> {
        Ok(self
            .backend
            .get(&self.keys.theme)?
            .map(|raw| Theme::from_stored(&raw)))
    }

    pub fn save_theme(&self, theme: Theme) -> StorageResult<()> {
        self.backend.set(&self.keys.theme, theme.as_str())
    }
}
