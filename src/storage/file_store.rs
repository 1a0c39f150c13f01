// src/storage/file_store.rs
//
// File-backed key-value store
//
// Each key maps to one JSON document at {root}/{key}.json. Keys are the
// crate's own fixed storage keys, never user input, so no escaping is
// done on the file name.

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use crate::error::{AppError, AppResult};
use crate::storage::key_value::KeyValueStore;

pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Create a store rooted at `root`, creating the directory if needed.
    pub fn new(root: PathBuf) -> AppResult<Self> {
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    /// Create a store in the platform data directory.
    ///
    /// Path structure: {APP_DATA}/bookhub/
    pub fn with_default_dir() -> AppResult<Self> {
        let data_dir = dirs::data_dir()
            .ok_or_else(|| AppError::Other("Could not determine app data directory".to_string()))?;
        Self::new(data_dir.join("bookhub"))
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(format!("{}.json", key))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(AppError::Io(e)),
        }
    }

    fn set(&self, key: &str, value: &str) -> AppResult<()> {
        fs::write(self.path_for(key), value)?;
        Ok(())
    }
}
