//! Origin-scoped key/value storage for the theme preference.
//!
//! SYSTEM CONTEXT
//! ==============
//! The controller talks to storage only through [`PreferenceStore`]. In the
//! browser that is `localStorage`; natively (and in tests) it is an
//! in-memory map. Access can fail (disabled storage, quota, privacy mode), so
//! every call returns a `Result` and the caller decides how to degrade.

#[cfg(test)]
#[path = "preference_store_test.rs"]
mod preference_store_test;

use std::cell::{Cell, RefCell};
use std::collections::HashMap;

/// Errors produced by preference storage.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum StorageError {
    /// No storage object is reachable for this origin.
    #[error("storage unavailable")]
    Unavailable,

    /// Reading the entry failed.
    #[error("storage read failed: {0}")]
    Read(String),

    /// Writing the entry failed.
    #[error("storage write failed: {0}")]
    Write(String),
}

/// Synchronous string key/value storage.
pub trait PreferenceStore {
    /// Read the value stored under `key`, `Ok(None)` when absent.
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Overwrite the value stored under `key`.
    fn write(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// In-memory store with an availability switch for simulating disabled
/// storage.
#[derive(Debug)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
    available: Cell<bool>,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self { entries: RefCell::new(HashMap::new()), available: Cell::new(true) }
    }
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store seeded with one entry.
    #[must_use]
    pub fn with_entry(key: &str, value: &str) -> Self {
        let store = Self::default();
        store.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
        store
    }

    /// Store whose reads and writes all fail.
    #[must_use]
    pub fn unavailable() -> Self {
        let store = Self::default();
        store.available.set(false);
        store
    }

    pub fn set_available(&self, available: bool) {
        self.available.set(available);
    }

    /// Raw entry, bypassing the availability switch.
    #[must_use]
    pub fn peek(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }
}

impl PreferenceStore for MemoryStore {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        if !self.available.get() {
            return Err(StorageError::Unavailable);
        }
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if !self.available.get() {
            return Err(StorageError::Unavailable);
        }
        self.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// `window.localStorage` for the current origin.
#[cfg(feature = "browser")]
pub struct LocalStorageStore {
    storage: Option<web_sys::Storage>,
}

#[cfg(feature = "browser")]
impl LocalStorageStore {
    /// Resolve `localStorage`; a `SecurityError` or missing window leaves the
    /// store unavailable rather than failing construction.
    #[must_use]
    pub fn new() -> Self {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten());
        if storage.is_none() {
            log::warn!("localStorage unavailable; theme preference will not persist");
        }
        Self { storage }
    }
}

#[cfg(feature = "browser")]
impl Default for LocalStorageStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "browser")]
impl PreferenceStore for LocalStorageStore {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        let storage = self.storage.as_ref().ok_or(StorageError::Unavailable)?;
        storage.get_item(key).map_err(|e| StorageError::Read(format!("{e:?}")))
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let storage = self.storage.as_ref().ok_or(StorageError::Unavailable)?;
        storage.set_item(key, value).map_err(|e| StorageError::Write(format!("{e:?}")))
    }
}
