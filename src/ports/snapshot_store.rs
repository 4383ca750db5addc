//! Snapshot Store Port - Interface for persisting saved decisions.

use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;

use crate::domain::foundation::{DomainError, ErrorCode, SnapshotId};

/// Errors that can occur during snapshot store operations
#[derive(Debug, thiserror::Error)]
pub enum SnapshotStoreError {
    #[error("Snapshot not found: {0}")]
    NotFound(SnapshotId),

    #[error("Stored snapshot {0} is not a JSON object")]
    NotAnObject(SnapshotId),

    #[error("Failed to serialize snapshot: {0}")]
    SerializationFailed(String),

    #[error("Failed to deserialize snapshot: {0}")]
    DeserializationFailed(String),

    #[error("IO error: {0}")]
    IoError(String),
}

impl From<SnapshotStoreError> for DomainError {
    fn from(err: SnapshotStoreError) -> Self {
        let code = match &err {
            SnapshotStoreError::NotFound(_) => ErrorCode::SnapshotNotFound,
            SnapshotStoreError::NotAnObject(_) => ErrorCode::MalformedSnapshot,
            SnapshotStoreError::DeserializationFailed(_) => ErrorCode::MalformedSnapshot,
            SnapshotStoreError::SerializationFailed(_) => ErrorCode::InternalError,
            SnapshotStoreError::IoError(_) => ErrorCode::StorageError,
        };

        match &err {
            SnapshotStoreError::NotFound(id) | SnapshotStoreError::NotAnObject(id) => {
                DomainError::new(code, err.to_string()).with_detail("id", id.as_str())
            }
            _ => DomainError::new(code, err.to_string()),
        }
    }
}

/// Listing entry for one saved decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SavedSnapshotSummary {
    pub id: SnapshotId,
    /// Decision title, "Untitled" when blank.
    pub title: String,
    pub category: String,
    /// ISO-8601 save time as recorded by the store or the snapshot.
    pub saved_at: String,
}

/// Port for saving, listing, loading and deleting snapshots
#[async_trait]
pub trait SnapshotStore: Send + Sync {
    /// Persist a snapshot document.
    ///
    /// # Arguments
    /// * `snapshot` - The document produced by `snapshot_current`
    /// * `label` - Optional human label; stores may use it to name the entry
    ///
    /// # Errors
    /// Returns `SnapshotStoreError` if the write fails
    async fn save(
        &self,
        snapshot: &Value,
        label: Option<&str>,
    ) -> Result<SavedSnapshotSummary, SnapshotStoreError>;

    /// List saved snapshots, newest first.
    ///
    /// Unreadable or corrupt entries are skipped, never fatal to the listing.
    async fn list(&self) -> Result<Vec<SavedSnapshotSummary>, SnapshotStoreError>;

    /// Load one snapshot document.
    ///
    /// # Errors
    /// Returns `SnapshotStoreError::NotFound` if no snapshot has this id and
    /// `SnapshotStoreError::NotAnObject` if the stored JSON is not an object
    async fn load(&self, id: &SnapshotId) -> Result<Value, SnapshotStoreError>;

    /// Delete one snapshot. Deleting a missing id is not an error.
    async fn delete(&self, id: &SnapshotId) -> Result<(), SnapshotStoreError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_id() -> SnapshotId {
        SnapshotId::parse("20240115_103000__career.json").unwrap()
    }

    #[test]
    fn not_found_mentions_id() {
        let err = SnapshotStoreError::NotFound(test_id());
        assert!(err.to_string().contains("Snapshot not found"));
        assert!(err.to_string().contains("20240115_103000__career.json"));
    }

    #[test]
    fn not_an_object_mentions_json() {
        let err = SnapshotStoreError::NotAnObject(test_id());
        assert!(err.to_string().contains("not a JSON object"));
    }

    #[test]
    fn summary_serializes_id_as_string() {
        let summary = SavedSnapshotSummary {
            id: test_id(),
            title: "Career".to_string(),
            category: "Career".to_string(),
            saved_at: "2024-01-15T10:30:00Z".to_string(),
        };
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["id"], "20240115_103000__career.json");
    }

    #[test]
    fn store_errors_map_to_domain_codes() {
        let not_found: DomainError = SnapshotStoreError::NotFound(test_id()).into();
        assert_eq!(not_found.code, ErrorCode::SnapshotNotFound);
        assert_eq!(
            not_found.details.get("id").map(String::as_str),
            Some("20240115_103000__career.json")
        );

        let io: DomainError = SnapshotStoreError::IoError("disk full".to_string()).into();
        assert_eq!(io.code, ErrorCode::StorageError);

        let corrupt: DomainError =
            SnapshotStoreError::DeserializationFailed("eof".to_string()).into();
        assert_eq!(corrupt.code, ErrorCode::MalformedSnapshot);
    }
}
