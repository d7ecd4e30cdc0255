//! # Configuration
//!
//! Settings live in `config.json` inside the data directory, next to the
//! snapshot. Missing files and missing fields fall back to defaults.
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `storage-key` | `todos` | Slot the snapshot is stored under |
//! | `pretty-snapshot` | `false` | Pretty-print the snapshot JSON |
//!
//! The storage key becomes a file name next to `config.json`, so it follows
//! the storage key rules and may not be `config`.

use crate::error::{Result, TodozError};
use crate::store::{validate_key, DEFAULT_KEY};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::warn;

const CONFIG_STEM: &str = "config";
const CONFIG_FILENAME: &str = "config.json";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TodozConfig {
    #[serde(default = "default_storage_key")]
    pub storage_key: String,

    #[serde(default)]
    pub pretty_snapshot: bool,
}

fn default_storage_key() -> String {
    DEFAULT_KEY.to_string()
}

impl Default for TodozConfig {
    fn default() -> Self {
        Self {
            storage_key: default_storage_key(),
            pretty_snapshot: false,
        }
    }
}

/// User-facing config keys, as accepted by `todoz config`.
pub const CONFIG_KEYS: &[&str] = &["storage-key", "pretty-snapshot"];

impl TodozConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(TodozError::Io)?;
        let mut config: TodozConfig =
            serde_json::from_str(&content).map_err(TodozError::Serialization)?;

        if let Err(e) = check_storage_key(&config.storage_key) {
            warn!(error = %e, "ignoring storage key from config file");
            config.storage_key = default_storage_key();
        }
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(TodozError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(TodozError::Serialization)?;
        fs::write(config_path, content).map_err(TodozError::Io)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Result<String> {
        match key {
            "storage-key" => Ok(self.storage_key.clone()),
            "pretty-snapshot" => Ok(self.pretty_snapshot.to_string()),
            other => Err(unknown_key(other)),
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "storage-key" => {
                let value = value.trim();
                if value.is_empty() {
                    return Err(TodozError::Api("storage-key cannot be empty".into()));
                }
                check_storage_key(value)?;
                self.storage_key = value.to_string();
            }
            "pretty-snapshot" => {
                self.pretty_snapshot = value.trim().parse().map_err(|_| {
                    TodozError::Api(format!(
                        "pretty-snapshot expects true or false, got {:?}",
                        value
                    ))
                })?;
            }
            other => return Err(unknown_key(other)),
        }
        Ok(())
    }
}

fn check_storage_key(key: &str) -> Result<()> {
    validate_key(key)?;
    if key == CONFIG_STEM {
        return Err(TodozError::Api(format!(
            "storage-key {:?} is reserved for the config file",
            key
        )));
    }
    Ok(())
}

fn unknown_key(key: &str) -> TodozError {
    TodozError::Api(format!(
        "Unknown config key: {} (expected one of: {})",
        key,
        CONFIG_KEYS.join(", ")
    ))
}
