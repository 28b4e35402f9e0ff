//! JSON-file-backed store.
//!
//! The whole store is one JSON object on disk. Every write rewrites the file
//! through a temporary sibling and a rename, so a crash never leaves a
//! half-written file behind.

use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use fintrack_core::store::{KeyValueStore, StoreError};
use serde_json::Value;
use tracing::debug;

/// Key-value store persisted as a single JSON object.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    values: RwLock<BTreeMap<String, Value>>,
}

impl JsonFileStore {
    /// Opens the store at `path`. A missing file is an empty store.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or is not a
    /// JSON object.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let values = match fs::read_to_string(&path) {
            Ok(contents) if contents.trim().is_empty() => BTreeMap::new(),
            Ok(contents) => serde_json::from_str(&contents)
                .map_err(|e| StoreError::malformed(path.display().to_string(), e.to_string()))?,
            Err(e) if e.kind() == ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => return Err(StoreError::io(format!("{}: {e}", path.display()))),
        };
        debug!(path = %path.display(), keys = values.len(), "Opened JSON store");

        Ok(Self {
            path,
            values: RwLock::new(values),
        })
    }

    /// Location of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, BTreeMap<String, Value>>, StoreError> {
        self.values
            .read()
            .map_err(|_| StoreError::Unavailable("store lock poisoned".to_string()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, BTreeMap<String, Value>>, StoreError> {
        self.values
            .write()
            .map_err(|_| StoreError::Unavailable("store lock poisoned".to_string()))
    }

    fn persist(&self, values: &BTreeMap<String, Value>) -> Result<(), StoreError> {
        let encoded = serde_json::to_vec_pretty(values)
            .map_err(|e| StoreError::malformed(self.path.display().to_string(), e.to_string()))?;

        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);

        fs::write(&tmp, encoded)
            .and_then(|()| fs::rename(&tmp, &self.path))
            .map_err(|e| StoreError::io(format!("{}: {e}", self.path.display())))
    }

    /// Applies `change`, persists, and rolls back the in-memory map on failure.
    fn update(
        &self,
        key: &str,
        change: impl FnOnce(&mut BTreeMap<String, Value>) -> Option<Value>,
    ) -> Result<(), StoreError> {
        let mut values = self.write()?;
        let previous = change(&mut values);

        if let Err(e) = self.persist(&values) {
            match previous {
                Some(old) => values.insert(key.to_string(), old),
                None => values.remove(key),
            };
            return Err(e);
        }
        Ok(())
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<Value>, StoreError> {
        Ok(self.read()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: Value) -> Result<(), StoreError> {
        self.update(key, |values| values.insert(key.to_string(), value))
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        if !self.read()?.contains_key(key) {
            return Ok(());
        }
        self.update(key, |values| values.remove(key))
    }
}
