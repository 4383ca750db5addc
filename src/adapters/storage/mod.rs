//! Storage Adapters
//!
//! Implementations of the SnapshotStore port for persisting saved decisions.
//!
//! ## Available Adapters
//!
//! - **DirectorySnapshotStore** - One JSON file per saved decision
//! - **JsonlSnapshotLog** - Append-only JSONL log of saved decisions
//! - **InMemorySnapshotStore** - Stores snapshots in memory (testing/development)
//!
//! ## Usage
//!
//! ```ignore
//! use adapters::storage::{DirectorySnapshotStore, InMemorySnapshotStore};
//!
//! // Production: file-based storage
//! let store = DirectorySnapshotStore::new("./data/saved_decisions");
//!
//! // Testing: in-memory storage
//! let store = InMemorySnapshotStore::new();
//! ```

mod directory_snapshot_store;
mod in_memory_snapshot_store;
mod jsonl_snapshot_log;

pub use directory_snapshot_store::{slugify, DirectorySnapshotStore};
pub use in_memory_snapshot_store::InMemorySnapshotStore;
pub use jsonl_snapshot_log::JsonlSnapshotLog;

use std::sync::Arc;

use crate::config::{StorageBackend, StorageConfig};
use crate::ports::SnapshotStore;

/// Builds the store selected by configuration.
pub fn store_from_config(config: &StorageConfig) -> Arc<dyn SnapshotStore> {
    match config.backend {
        StorageBackend::Directory => Arc::new(DirectorySnapshotStore::new(config.snapshot_dir())),
        StorageBackend::Log => Arc::new(JsonlSnapshotLog::new(config.log_path())),
    }
}
