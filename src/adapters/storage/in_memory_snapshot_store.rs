//! In-Memory Snapshot Store Adapter
//!
//! Keeps saved snapshots in memory.
//! Useful for testing and development.

use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{RecordId, SnapshotId, Timestamp};
use crate::domain::snapshot::SnapshotHeader;
use crate::ports::{SavedSnapshotSummary, SnapshotStore, SnapshotStoreError};

#[derive(Debug, Clone)]
struct StoredSnapshot {
    summary: SavedSnapshotSummary,
    document: Value,
}

/// In-memory storage for snapshots, oldest first
#[derive(Debug, Clone, Default)]
pub struct InMemorySnapshotStore {
    entries: Arc<RwLock<Vec<StoredSnapshot>>>,
}

impl InMemorySnapshotStore {
    /// Create a new empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear all stored data (useful for tests)
    pub async fn clear(&self) {
        self.entries.write().await.clear();
    }

    /// Get the number of stored snapshots
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    /// Whether nothing is stored
    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

#[async_trait]
impl SnapshotStore for InMemorySnapshotStore {
    async fn save(
        &self,
        snapshot: &Value,
        _label: Option<&str>,
    ) -> Result<SavedSnapshotSummary, SnapshotStoreError> {
        let header = SnapshotHeader::read(snapshot)
            .map_err(|e| SnapshotStoreError::SerializationFailed(e.to_string()))?;

        let summary = SavedSnapshotSummary {
            id: RecordId::new().to_snapshot_id(),
            title: header.display_title().to_string(),
            category: header.category,
            saved_at: header
                .saved_at
                .unwrap_or_else(|| Timestamp::now().to_iso8601()),
        };

        self.entries.write().await.push(StoredSnapshot {
            summary: summary.clone(),
            document: snapshot.clone(),
        });

        Ok(summary)
    }

    async fn list(&self) -> Result<Vec<SavedSnapshotSummary>, SnapshotStoreError> {
        let entries = self.entries.read().await;
        Ok(entries.iter().rev().map(|e| e.summary.clone()).collect())
    }

    async fn load(&self, id: &SnapshotId) -> Result<Value, SnapshotStoreError> {
        let entries = self.entries.read().await;
        entries
            .iter()
            .find(|e| &e.summary.id == id)
            .map(|e| e.document.clone())
            .ok_or_else(|| SnapshotStoreError::NotFound(id.clone()))
    }

    async fn delete(&self, id: &SnapshotId) -> Result<(), SnapshotStoreError> {
        self.entries.write().await.retain(|e| &e.summary.id != id);
        Ok(())
    }
}
