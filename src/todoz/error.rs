use thiserror::Error;

#[derive(Error, Debug)]
pub enum TodozError {
    /// The stored snapshot exists but does not decode as a todo list.
    #[error("Stored todos under \"{key}\" are corrupt: {source}")]
    StorageCorrupt {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Api Error: {0}")]
    Api(String),
}

impl TodozError {
    pub fn is_storage_corrupt(&self) -> bool {
        matches!(self, TodozError::StorageCorrupt { .. })
    }
}

pub type Result<T> = std::result::Result<T, TodozError>;
