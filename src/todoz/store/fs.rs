use super::{validate_key, KeyValueStore};
use crate::error::{Result, TodozError};
use std::fs;
use std::path::PathBuf;
use uuid::Uuid;

pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Path of the file backing `key`.
    pub fn slot_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{}.json", key))
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(TodozError::Io)?;
        }
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        validate_key(key)?;
        let path = self.slot_path(key);
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(path).map_err(TodozError::Io)?;
        Ok(Some(content))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        validate_key(key)?;
        self.ensure_dir()?;

        // Atomic write
        let tmp_path = self.root.join(format!(".{}-{}.tmp", key, Uuid::new_v4()));
        fs::write(&tmp_path, value).map_err(TodozError::Io)?;
        fs::rename(&tmp_path, self.slot_path(key)).map_err(TodozError::Io)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_slot_reads_as_none() {
        let dir = tempdir().unwrap();
        let store = FileStore::new(dir.path().to_path_buf());
        assert_eq!(store.get("todos").unwrap(), None);
    }

    #[test]
    fn test_set_creates_dir_and_overwrites() {
        let dir = tempdir().unwrap();
        let root = dir.path().join("nested").join("data");
        let mut store = FileStore::new(root.clone());

        store.set("todos", "[]").unwrap();
        store.set("todos", "[1]").unwrap();

        assert_eq!(store.get("todos").unwrap().as_deref(), Some("[1]"));
        assert_eq!(fs::read_to_string(root.join("todos.json")).unwrap(), "[1]");
    }

    #[test]
    fn test_set_leaves_no_temp_files() {
        let dir = tempdir().unwrap();
        let mut store = FileStore::new(dir.path().to_path_buf());
        store.set("todos", "[]").unwrap();

        let names: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().into_string().unwrap())
            .collect();
        assert_eq!(names, vec!["todos.json".to_string()]);
    }

    #[test]
    fn test_rejects_keys_that_escape_root() {
        let dir = tempdir().unwrap();
        let mut store = FileStore::new(dir.path().to_path_buf());
        assert!(store.set("../evil", "[]").is_err());
        assert!(store.get("").is_err());
    }
}
