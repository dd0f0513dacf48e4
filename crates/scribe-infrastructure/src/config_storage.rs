//! Configuration file storage.
//!
//! Loads the storage configuration from `~/.config/scribe/config.toml`.
//! This module is purely responsible for reading the TOML file from disk;
//! a missing or empty file means default configuration.

use crate::paths::ScribePaths;
use scribe_core::config::StorageConfig;
use scribe_core::error::{Result, ScribeError};
use std::fs;
use std::path::PathBuf;

/// Storage for the configuration file (config.toml).
///
/// Responsibilities:
/// - Load config.toml from the scribe config directory
/// - Parse TOML into the StorageConfig domain model
///
/// Does NOT:
/// - Write or modify config files (read-only)
/// - Validate that configured paths exist
pub struct ConfigStorage {
    path: PathBuf,
}

impl ConfigStorage {
    /// Creates a new ConfigStorage with the default path
    /// (`~/.config/scribe/config.toml`).
    pub fn new() -> Result<Self> {
        let path = ScribePaths::config_file().map_err(|e| ScribeError::config(e.to_string()))?;
        Ok(Self { path })
    }

    /// Creates a new ConfigStorage with a custom path (for testing).
    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    /// Loads the configuration.
    ///
    /// # Returns
    ///
    /// - `Ok(StorageConfig)`: parsed configuration, or defaults when the
    ///   file does not exist or is empty
    /// - `Err(_)`: the file exists but cannot be read or parsed
    pub fn load(&self) -> Result<StorageConfig> {
        if !self.path.exists() {
            return Ok(StorageConfig::default());
        }

        let content = fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(StorageConfig::default());
        }

        let config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Returns the path to the config file.
    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}
