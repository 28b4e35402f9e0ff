//! In-memory test doubles for the storage port.

use std::collections::HashMap;
use std::sync::RwLock;

use serde_json::Value;

use crate::store::{KeyValueStore, StoreError};

/// Key-value store backed by a plain map.
#[derive(Default)]
pub struct MemoryStore {
    values: RwLock<HashMap<String, Value>>,
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<Value>, StoreError> {
        Ok(self.values.read().unwrap().get(key).cloned())
    }

    fn set(&self, key: &str, value: Value) -> Result<(), StoreError> {
        self.values.write().unwrap().insert(key.to_string(), value);
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        self.values.write().unwrap().remove(key);
        Ok(())
    }
}
