//! Directory-backed key-value storage.
//!
//! Each key maps to one plain file under the storage directory; the file
//! content is the raw string value. The directory is created on first write.
//!
//! Writes are plain `fs::write` calls: last writer wins, and nothing guards
//! against another process writing between a read and the following write.

use crate::config_storage::ConfigStorage;
use crate::paths::ScribePaths;
use scribe_core::error::{Result, ScribeError};
use scribe_core::storage::KeyValueStorage;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

/// A [`KeyValueStorage`] keeping one file per key.
pub struct DirStorage {
    dir: PathBuf,
}

impl DirStorage {
    /// Creates a DirStorage rooted at the default storage directory,
    /// honoring a `storage_dir` override from config.toml when present.
    pub fn new() -> Result<Self> {
        let config = ConfigStorage::new()?.load()?;
        match config.storage_dir {
            Some(dir) => Ok(Self::with_dir(dir)),
            None => {
                let dir =
                    ScribePaths::storage_dir().map_err(|e| ScribeError::config(e.to_string()))?;
                Ok(Self::with_dir(dir))
            }
        }
    }

    /// Creates a DirStorage rooted at a custom directory (for testing, or an
    /// explicit override).
    pub fn with_dir(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Returns the storage directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.dir.join(key)
    }
}

impl KeyValueStorage for DirStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        match fs::read_to_string(self.key_path(key)) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        fs::create_dir_all(&self.dir)?;
        fs::write(self.key_path(key), value)?;
        debug!(key, bytes = value.len(), "stored value");
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        match fs::remove_file(self.key_path(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
