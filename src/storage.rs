//! Named slot storage trait and built-in backends.
//!
//! A slot is a key holding one text value, the way browser local storage
//! works. The store keeps one slot per collection and replaces its whole
//! value on every write.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use crate::error::StorageError;

/// Durable key/value storage for collection snapshots.
///
/// # Contract
///
/// - [`read`](SlotStorage::read) returns `Ok(None)` when the slot has never
///   been written. Errors are reserved for a backend that cannot answer.
/// - [`write`](SlotStorage::write) replaces the slot's previous value
///   entirely.
pub trait SlotStorage {
    /// Return the current value of `key`, if any.
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Replace the value of `key` with `value`.
    fn write(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// In-process slot storage.
///
/// `Clone` is cheap and clones share the same slots, so a test can hand one
/// clone to a store and inspect (or reopen from) another.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    slots: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed or overwrite a slot directly.
    pub fn insert(&self, key: impl Into<String>, value: impl Into<String>) {
        self.slots.borrow_mut().insert(key.into(), value.into());
    }

    /// Current value of a slot, bypassing the trait.
    pub fn get(&self, key: &str) -> Option<String> {
        self.slots.borrow().get(key).cloned()
    }

    pub fn remove(&self, key: &str) -> Option<String> {
        self.slots.borrow_mut().remove(key)
    }

    /// Sorted list of written slot keys.
    pub fn keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.slots.borrow().keys().cloned().collect();
        keys.sort();
        keys
    }
}

impl SlotStorage for MemoryStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.get(key))
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.insert(key, value);
        Ok(())
    }
}

/// Slot storage backed by a directory, one JSON file per slot.
///
/// The layout is:
/// ```text
/// <base_dir>/
///     setshaba-issues.json
///     setshaba-events.json
///     ...
/// ```
///
/// Writes go to `<key>.json.tmp` first and are renamed into place, so a
/// reader never sees a partially written slot.
#[derive(Debug, Clone)]
pub struct FileStorage {
    base_dir: PathBuf,
}

impl FileStorage {
    /// Create a `FileStorage` rooted at `base_dir`.
    ///
    /// The directory does not need to exist yet; it is created on the first
    /// write.
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    /// Returns the root directory of this storage.
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Returns the file path backing `key`: `<base_dir>/<key>.json`.
    pub fn slot_path(&self, key: &str) -> PathBuf {
        self.base_dir.join(format!("{key}.json"))
    }
}

impl SlotStorage for FileStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        match fs::read_to_string(self.slot_path(key)) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        fs::create_dir_all(&self.base_dir)?;
        let path = self.slot_path(key);
        let tmp_path = path.with_extension("json.tmp");
        fs::write(&tmp_path, value)?;
        fs::rename(&tmp_path, &path)?;
        Ok(())
    }
}
