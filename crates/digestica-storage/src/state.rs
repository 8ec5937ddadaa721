use serde::{Serialize, de::DeserializeOwned};

use crate::error::StorageError;
use crate::store::KeyValueStore;

/// Load a JSON value stored under `key`.
pub fn load_state<T: DeserializeOwned>(
    store: &(impl KeyValueStore + ?Sized),
    key: &str,
) -> Result<T, StorageError> {
    let body = store.get(key)?;
    let value: T = serde_json::from_slice(&body)?;
    Ok(value)
}

/// Save `value` as JSON under `key`.
pub fn save_state<T: Serialize>(
    store: &(impl KeyValueStore + ?Sized),
    key: &str,
    value: &T,
) -> Result<(), StorageError> {
    let body = serde_json::to_vec(value)?;
    store.put(key, body)
}

/// Load a JSON value, treating a missing or unreadable blob as absent.
///
/// Missing keys are silent. Malformed blobs and I/O failures are logged at
/// `warn` and otherwise ignored.
pub fn load_optional<T: DeserializeOwned>(
    store: &(impl KeyValueStore + ?Sized),
    key: &str,
) -> Option<T> {
    match load_state(store, key) {
        Ok(value) => Some(value),
        Err(StorageError::NotFound { .. }) => None,
        Err(e) => {
            tracing::warn!(key, error = %e, "ignoring unreadable stored data");
            None
        }
    }
}

/// Like [`load_optional`], falling back to `T::default()`.
pub fn load_or_default<T: DeserializeOwned + Default>(
    store: &(impl KeyValueStore + ?Sized),
    key: &str,
) -> T {
    load_optional(store, key).unwrap_or_default()
}

/// Load the current value of `key` ahead of rewriting it.
///
/// A missing key or a malformed blob starts from `T::default()`. Any other
/// failure is returned, so a rewrite never replaces data it could not read.
pub fn load_for_update<T: DeserializeOwned + Default>(
    store: &(impl KeyValueStore + ?Sized),
    key: &str,
) -> Result<T, StorageError> {
    match load_state(store, key) {
        Ok(value) => Ok(value),
        Err(StorageError::NotFound { .. }) => Ok(T::default()),
        Err(StorageError::Serialization(e)) => {
            tracing::warn!(key, error = %e, "replacing unreadable stored data");
            Ok(T::default())
        }
        Err(e) => Err(e),
    }
}
