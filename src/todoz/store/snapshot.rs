//! Encoding of a [`TodoList`] into a storage slot.

use super::KeyValueStore;
use crate::error::{Result, TodozError};
use crate::model::TodoList;
use tracing::{debug, warn};

/// Read the list stored under `key`.
///
/// A missing or blank slot is an empty list. A slot that does not decode
/// fails with [`TodozError::StorageCorrupt`] and is left untouched.
pub fn load<S: KeyValueStore>(store: &S, key: &str) -> Result<TodoList> {
    let raw = match store.get(key)? {
        Some(raw) if !raw.trim().is_empty() => raw,
        _ => {
            debug!(key, "no snapshot stored, starting empty");
            return Ok(TodoList::new());
        }
    };

    match serde_json::from_str::<TodoList>(&raw) {
        Ok(list) => {
            debug!(key, items = list.len(), "loaded snapshot");
            Ok(list)
        }
        Err(source) => {
            warn!(key, error = %source, "stored snapshot does not decode");
            Err(TodozError::StorageCorrupt {
                key: key.to_string(),
                source,
            })
        }
    }
}

/// Overwrite the slot under `key` with the whole list.
pub fn save<S: KeyValueStore>(store: &mut S, key: &str, list: &TodoList, pretty: bool) -> Result<()> {
    let encoded = if pretty {
        serde_json::to_string_pretty(list)
    } else {
        serde_json::to_string(list)
    }
    .map_err(TodozError::Serialization)?;

    store.set(key, &encoded)?;
    debug!(key, items = list.len(), bytes = encoded.len(), "wrote snapshot");
    Ok(())
}
