//! Client-local key/value persistence.
//!
//! The dashboard persists exactly one value (the theme flag), so the store is a
//! plain string map. Web builds use `window.localStorage`; native builds and
//! tests use [`MemoryStore`].

use std::cell::RefCell;
use std::collections::HashMap;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("local storage is unavailable")]
    Unavailable,
    #[error("failed to write `{key}`: {message}")]
    Write { key: String, message: String },
}

pub trait PreferenceStore {
    /// Stored value for `key`. Unreadable storage reads as absent.
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

#[cfg(target_arch = "wasm32")]
pub type DefaultStore = BrowserStorage;
#[cfg(not(target_arch = "wasm32"))]
pub type DefaultStore = MemoryStore;

/// In-memory store. `read_only` simulates a quota-exceeded / disabled storage.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
    read_only: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn read_only() -> Self {
        Self {
            entries: RefCell::default(),
            read_only: true,
        }
    }

    pub fn with_entry(key: &str, value: &str) -> Self {
        let store = Self::default();
        store
            .entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        store
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.read_only {
            return Err(StorageError::Write {
                key: key.to_string(),
                message: "storage is read-only".to_string(),
            });
        }
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// `window.localStorage`.
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserStorage;

#[cfg(target_arch = "wasm32")]
impl BrowserStorage {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Result<web_sys::Storage, StorageError> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .ok_or(StorageError::Unavailable)
    }
}

#[cfg(target_arch = "wasm32")]
impl PreferenceStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage().ok()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|err| StorageError::Write {
                key: key.to_string(),
                message: format!("{err:?}"),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_round_trips() {
        let store = MemoryStore::new();
        assert_eq!(store.get("darkMode"), None);
        store.set("darkMode", "true").unwrap();
        assert_eq!(store.get("darkMode").as_deref(), Some("true"));
    }

    #[test]
    fn read_only_store_rejects_writes() {
        let store = MemoryStore::read_only();
        let err = store.set("darkMode", "false").unwrap_err();
        assert!(matches!(err, StorageError::Write { ref key, .. } if key == "darkMode"));
        assert_eq!(store.get("darkMode"), None);
    }
}
