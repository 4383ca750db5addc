//! Storage configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;

/// Where saved decisions live
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// Which store implementation to use
    #[serde(default)]
    pub backend: StorageBackend,

    /// Root directory for all persisted data
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
}

/// Snapshot store implementation
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// One JSON file per saved decision
    #[default]
    Directory,
    /// Single append-only JSONL file
    Log,
}

impl StorageConfig {
    /// Directory holding one file per saved decision
    pub fn snapshot_dir(&self) -> PathBuf {
        self.data_dir.join("saved_decisions")
    }

    /// Path of the append-only decision log
    pub fn log_path(&self) -> PathBuf {
        self.data_dir.join("decisions.jsonl")
    }

    /// Validate storage configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.data_dir.as_os_str().is_empty() {
            return Err(ValidationError::MissingRequired("storage.data_dir"));
        }
        Ok(())
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::default(),
            data_dir: default_data_dir(),
        }
    }
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("data")
}
