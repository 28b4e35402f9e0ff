//! Key-value storage port.
//!
//! The application persists everything as small JSON blobs under fixed keys.
//! Services depend on this trait only; adapters live in `fintrack-store`.

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

/// Key-value storage errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading or writing the backing medium failed.
    #[error("storage I/O failed: {0}")]
    Io(String),

    /// A stored value could not be encoded or decoded.
    #[error("stored value for '{key}' is malformed: {reason}")]
    Malformed {
        /// Key whose value is malformed.
        key: String,
        /// Decoder message.
        reason: String,
    },

    /// The store is in an unusable state (e.g. a poisoned lock).
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

impl StoreError {
    /// Create an I/O error.
    #[must_use]
    pub fn io(msg: impl Into<String>) -> Self {
        Self::Io(msg.into())
    }

    /// Create a malformed-value error.
    #[must_use]
    pub fn malformed(key: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Malformed {
            key: key.into(),
            reason: reason.into(),
        }
    }
}

impl From<StoreError> for fintrack_shared::AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Malformed { .. } => Self::Serialization(err.to_string()),
            StoreError::Io(_) | StoreError::Unavailable(_) => Self::Storage(err.to_string()),
        }
    }
}

/// Synchronous key-value store holding JSON values.
///
/// Each `set` is a single atomic key write; there is exactly one logical
/// writer per process, so no read-modify-write protection is offered.
#[cfg_attr(test, mockall::automock)]
pub trait KeyValueStore {
    /// Reads the value stored under `key`.
    fn get(&self, key: &str) -> Result<Option<Value>, StoreError>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: Value) -> Result<(), StoreError>;

    /// Removes `key`. Removing a missing key is not an error.
    fn remove(&self, key: &str) -> Result<(), StoreError>;
}

/// Typed helpers layered over any [`KeyValueStore`].
pub trait KeyValueStoreExt: KeyValueStore {
    /// Reads a boolean flag. Non-boolean values are reported as malformed.
    fn get_bool(&self, key: &str) -> Result<Option<bool>, StoreError> {
        match self.get(key)? {
            None => Ok(None),
            Some(Value::Bool(flag)) => Ok(Some(flag)),
            Some(other) => Err(StoreError::malformed(
                key,
                format!("expected bool, found {other}"),
            )),
        }
    }

    /// Stores a boolean flag.
    fn set_bool(&self, key: &str, flag: bool) -> Result<(), StoreError> {
        self.set(key, Value::Bool(flag))
    }

    /// Reads and decodes a JSON-encoded value.
    fn get_json<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StoreError> {
        self.get(key)?
            .map(|value| {
                serde_json::from_value(value).map_err(|e| StoreError::malformed(key, e.to_string()))
            })
            .transpose()
    }

    /// Encodes and stores a value as JSON.
    fn set_json<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<(), StoreError> {
        let encoded =
            serde_json::to_value(value).map_err(|e| StoreError::malformed(key, e.to_string()))?;
        self.set(key, encoded)
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStoreExt for S {}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn get(&self, key: &str) -> Result<Option<Value>, StoreError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: Value) -> Result<(), StoreError> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        (**self).remove(key)
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for std::sync::Arc<S> {
    fn get(&self, key: &str) -> Result<Option<Value>, StoreError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: Value) -> Result<(), StoreError> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        (**self).remove(key)
    }
}
