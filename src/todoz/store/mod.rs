//! # Storage Layer
//!
//! Todos persist to a single key-value slot. The [`KeyValueStore`] trait is the
//! only thing the rest of the crate knows about storage, so the same store logic
//! runs against the filesystem in production and a `HashMap` in tests.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: one JSON file per key under a data directory.
//!   Writes go to a temp file first and are renamed into place.
//! - [`memory::InMemoryStore`]: no persistence, counts writes, and can
//!   simulate write failures.
//!
//! ## Snapshot Format
//!
//! The [`snapshot`] module owns the encoding of a [`crate::model::TodoList`]
//! into a slot value: a JSON array of `{id, text, completed}` objects.
//!
//! ```text
//! <data_dir>/
//! ├── todos.json          # Snapshot (slot "todos")
//! └── config.json         # TodozConfig
//! ```

use crate::error::{Result, TodozError};

pub mod fs;
pub mod memory;
pub mod snapshot;

/// The slot used when no other key is configured.
pub const DEFAULT_KEY: &str = "todos";

/// Abstract interface for a flat string key-value store.
///
/// Values are whole documents; every `set` overwrites the previous value.
pub trait KeyValueStore {
    /// Read the value under `key`, `None` if nothing was ever written.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Replace the value under `key`.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// Keys are plain file stems: ASCII letters, digits, `-` and `_`.
pub fn validate_key(key: &str) -> Result<()> {
    let valid = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if valid {
        Ok(())
    } else {
        Err(TodozError::Store(format!("Invalid storage key: {:?}", key)))
    }
}
