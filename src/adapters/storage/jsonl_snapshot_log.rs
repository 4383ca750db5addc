//! JSONL Snapshot Log Adapter
//!
//! Append-only log with one record per line:
//! `{"id": "dec_<uuid>", "saved_at": "<iso-8601>", "snapshot": {...}}`.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::{Path, PathBuf};
use tokio::fs::{self, OpenOptions};
use tokio::io::AsyncWriteExt;
use tracing::{debug, warn};

use crate::domain::foundation::{RecordId, SnapshotId, Timestamp};
use crate::domain::snapshot::SnapshotHeader;
use crate::ports::{SavedSnapshotSummary, SnapshotStore, SnapshotStoreError};

/// One line of the log.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct LogRecord {
    id: String,
    #[serde(default)]
    saved_at: String,
    snapshot: Value,
}

/// Single-file append-only snapshot storage
#[derive(Debug, Clone)]
pub struct JsonlSnapshotLog {
    path: PathBuf,
}

impl JsonlSnapshotLog {
    /// Create a log backed by the given file; it is created on first save.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Reads every line, skipping blank and corrupt ones.
    async fn read_records(&self) -> Result<Vec<LogRecord>, SnapshotStoreError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let raw = fs::read_to_string(&self.path)
            .await
            .map_err(|e| SnapshotStoreError::IoError(e.to_string()))?;

        let mut records = Vec::new();
        for (index, line) in raw.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            match serde_json::from_str::<LogRecord>(line) {
                Ok(record) => records.push(record),
                Err(e) => {
                    warn!(line = index + 1, error = %e, "Skipping corrupt log record");
                }
            }
        }
        Ok(records)
    }
}

#[async_trait]
impl SnapshotStore for JsonlSnapshotLog {
    async fn save(
        &self,
        snapshot: &Value,
        label: Option<&str>,
    ) -> Result<SavedSnapshotSummary, SnapshotStoreError> {
        let header = SnapshotHeader::read(snapshot)
            .map_err(|e| SnapshotStoreError::SerializationFailed(e.to_string()))?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| SnapshotStoreError::IoError(e.to_string()))?;
        }

        let record_id = RecordId::new();
        let record = LogRecord {
            id: record_id.to_string(),
            saved_at: Timestamp::now().to_iso8601(),
            snapshot: snapshot.clone(),
        };

        let mut line = serde_json::to_string(&record)
            .map_err(|e| SnapshotStoreError::SerializationFailed(e.to_string()))?;
        line.push('\n');

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await
            .map_err(|e| SnapshotStoreError::IoError(e.to_string()))?;
        file.write_all(line.as_bytes())
            .await
            .map_err(|e| SnapshotStoreError::IoError(e.to_string()))?;
        file.flush()
            .await
            .map_err(|e| SnapshotStoreError::IoError(e.to_string()))?;

        if label.is_some() {
            debug!(record_id = %record_id, "Log records carry no label; ignoring it");
        }
        debug!(record_id = %record_id, "Appended snapshot record");

        Ok(SavedSnapshotSummary {
            id: record_id.to_snapshot_id(),
            title: header.display_title().to_string(),
            category: header.category,
            saved_at: record.saved_at,
        })
    }

    async fn list(&self) -> Result<Vec<SavedSnapshotSummary>, SnapshotStoreError> {
        let mut summaries = Vec::new();

        for record in self.read_records().await? {
            let id = match SnapshotId::parse(record.id.as_str()) {
                Ok(id) => id,
                Err(e) => {
                    warn!(record_id = %record.id, error = %e, "Skipping record with unusable id");
                    continue;
                }
            };
            let header = match SnapshotHeader::read(&record.snapshot) {
                Ok(header) => header,
                Err(e) => {
                    warn!(record_id = %id, error = %e, "Skipping malformed log record");
                    continue;
                }
            };
            let saved_at = if record.saved_at.is_empty() {
                header.saved_at.clone().unwrap_or_default()
            } else {
                record.saved_at
            };
            summaries.push(SavedSnapshotSummary {
                id,
                title: header.display_title().to_string(),
                category: header.category,
                saved_at,
            });
        }

        // Newest first; later lines win ties since they were appended later
        summaries.reverse();
        summaries.sort_by(|a, b| b.saved_at.cmp(&a.saved_at));

        Ok(summaries)
    }

    async fn load(&self, id: &SnapshotId) -> Result<Value, SnapshotStoreError> {
        let record = self
            .read_records()
            .await?
            .into_iter()
            .find(|r| r.id == id.as_str())
            .ok_or_else(|| SnapshotStoreError::NotFound(id.clone()))?;

        if !record.snapshot.is_object() {
            return Err(SnapshotStoreError::NotAnObject(id.clone()));
        }

        Ok(record.snapshot)
    }

    async fn delete(&self, id: &SnapshotId) -> Result<(), SnapshotStoreError> {
        if !self.path.exists() {
            return Ok(());
        }

        let raw = fs::read_to_string(&self.path)
            .await
            .map_err(|e| SnapshotStoreError::IoError(e.to_string()))?;

        // Lines that do not parse are kept verbatim
        let mut removed = false;
        let mut kept = String::with_capacity(raw.len());
        for line in raw.lines() {
            let matches = serde_json::from_str::<LogRecord>(line)
                .map(|r| r.id == id.as_str())
                .unwrap_or(false);
            if matches {
                removed = true;
            } else if !line.trim().is_empty() {
                kept.push_str(line);
                kept.push('\n');
            }
        }

        if !removed {
            return Ok(());
        }

        let temp_path = self.path.with_extension("jsonl.tmp");
        fs::write(&temp_path, kept)
            .await
            .map_err(|e| SnapshotStoreError::IoError(e.to_string()))?;
        fs::rename(&temp_path, &self.path)
            .await
            .map_err(|e| SnapshotStoreError::IoError(e.to_string()))?;

        debug!(snapshot_id = %id, "Removed snapshot record");
        Ok(())
    }
}
