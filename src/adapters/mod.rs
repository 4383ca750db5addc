//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `storage` - Snapshot stores (directory, JSONL log, in-memory)

pub mod storage;

pub use storage::{
    store_from_config, DirectorySnapshotStore, InMemorySnapshotStore, JsonlSnapshotLog,
};
