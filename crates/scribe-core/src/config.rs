//! Application configuration model.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Storage configuration loaded from `config.toml`.
///
/// All fields are optional; a missing configuration file means defaults
/// everywhere. The only tunable today is where the key-value store keeps its
/// files.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Overrides the directory used by the file-backed key-value store.
    /// Defaults to the platform data directory when absent.
    #[serde(default)]
    pub storage_dir: Option<PathBuf>,
}
