//! Ports - Interfaces to the outside world.
//!
//! The domain only produces and consumes snapshot documents; where they are
//! kept is behind [`SnapshotStore`].

mod snapshot_store;

pub use snapshot_store::{SavedSnapshotSummary, SnapshotStore, SnapshotStoreError};
