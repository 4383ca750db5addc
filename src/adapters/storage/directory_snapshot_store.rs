//! Directory Snapshot Store Adapter
//!
//! Stores each saved decision as its own pretty-printed JSON file named
//! `<YYYYmmdd_HHMMSS>__<slug>.json`. The file name is the snapshot id.

use async_trait::async_trait;
use serde_json::Value;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, warn};

use crate::domain::foundation::{SnapshotId, Timestamp};
use crate::domain::snapshot::SnapshotHeader;
use crate::ports::{SavedSnapshotSummary, SnapshotStore, SnapshotStoreError};

const EXTENSION: &str = "json";
const SLUG_MAX_LEN: usize = 40;
const SLUG_FALLBACK: &str = "decision";

/// One-file-per-snapshot storage
#[derive(Debug, Clone)]
pub struct DirectorySnapshotStore {
    base_path: PathBuf,
}

impl DirectorySnapshotStore {
    /// Create a new store rooted at a directory
    ///
    /// # Example
    /// ```ignore
    /// let store = DirectorySnapshotStore::new("./data/saved_decisions");
    /// ```
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
        }
    }

    /// Get the file path for a snapshot id
    fn snapshot_path(&self, id: &SnapshotId) -> PathBuf {
        self.base_path.join(id.as_str())
    }

    /// Ensure the base directory exists
    async fn ensure_dir(&self) -> Result<(), StoreIo> {
        fs::create_dir_all(&self.base_path).await.map_err(StoreIo)
    }

    /// Picks a file name that is not taken yet.
    ///
    /// Saves within the same second with the same slug get `-2`, `-3`, ...
    fn free_file_name(&self, prefix: &str, slug: &str) -> String {
        let mut name = format!("{}__{}.{}", prefix, slug, EXTENSION);
        let mut n = 2;
        while self.base_path.join(&name).exists() {
            name = format!("{}__{}-{}.{}", prefix, slug, n, EXTENSION);
            n += 1;
        }
        name
    }

    async fn read_summary(&self, path: &Path, id: SnapshotId) -> Option<SavedSnapshotSummary> {
        let raw = match fs::read_to_string(path).await {
            Ok(raw) => raw,
            Err(e) => {
                warn!(snapshot_id = %id, error = %e, "Skipping unreadable snapshot file");
                return None;
            }
        };

        let document: Value = if raw.trim().is_empty() {
            Value::Object(Default::default())
        } else {
            match serde_json::from_str(&raw) {
                Ok(document) => document,
                Err(e) => {
                    warn!(snapshot_id = %id, error = %e, "Skipping corrupt snapshot file");
                    return None;
                }
            }
        };

        let header = match SnapshotHeader::read(&document) {
            Ok(header) => header,
            Err(e) => {
                warn!(snapshot_id = %id, error = %e, "Skipping malformed snapshot file");
                return None;
            }
        };

        let saved_at = header
            .saved_at
            .clone()
            .unwrap_or_else(|| saved_at_from_file_name(id.as_str()));

        Some(SavedSnapshotSummary {
            title: header.display_title().to_string(),
            category: header.category,
            saved_at,
            id,
        })
    }
}

/// Wrapper so `?` on io calls maps into the port error.
struct StoreIo(std::io::Error);

impl From<StoreIo> for SnapshotStoreError {
    fn from(err: StoreIo) -> Self {
        SnapshotStoreError::IoError(err.0.to_string())
    }
}

#[async_trait]
impl SnapshotStore for DirectorySnapshotStore {
    async fn save(
        &self,
        snapshot: &Value,
        label: Option<&str>,
    ) -> Result<SavedSnapshotSummary, SnapshotStoreError> {
        let header = SnapshotHeader::read(snapshot)
            .map_err(|e| SnapshotStoreError::SerializationFailed(e.to_string()))?;

        self.ensure_dir().await?;

        let seed = label
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .unwrap_or(header.title.as_str());
        let now = Timestamp::now();
        let file_name = self.free_file_name(&now.to_file_prefix(), &slugify(seed));
        let id = SnapshotId::parse(file_name)
            .map_err(|e| SnapshotStoreError::SerializationFailed(e.to_string()))?;

        let body = serde_json::to_string_pretty(snapshot)
            .map_err(|e| SnapshotStoreError::SerializationFailed(e.to_string()))?;

        // Write to a temporary file, then rename into place
        let file_path = self.snapshot_path(&id);
        let temp_path = file_path.with_extension("tmp");
        fs::write(&temp_path, body).await.map_err(StoreIo)?;
        fs::rename(&temp_path, &file_path).await.map_err(StoreIo)?;

        debug!(snapshot_id = %id, "Saved snapshot file");

        Ok(SavedSnapshotSummary {
            title: header.display_title().to_string(),
            category: header.category,
            saved_at: header.saved_at.unwrap_or_else(|| now.to_iso8601()),
            id,
        })
    }

    async fn list(&self) -> Result<Vec<SavedSnapshotSummary>, SnapshotStoreError> {
        if !self.base_path.exists() {
            return Ok(Vec::new());
        }

        let mut names = Vec::new();
        let mut entries = fs::read_dir(&self.base_path).await.map_err(StoreIo)?;
        while let Some(entry) = entries.next_entry().await.map_err(StoreIo)? {
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some(EXTENSION) {
                continue;
            }
            if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
                names.push(name.to_string());
            }
        }

        // File names start with the save time, so reverse name order is newest first
        names.sort_unstable_by(|a, b| b.cmp(a));

        let mut summaries = Vec::with_capacity(names.len());
        for name in names {
            let id = match SnapshotId::parse(name.as_str()) {
                Ok(id) => id,
                Err(e) => {
                    warn!(file = %name, error = %e, "Skipping snapshot with unusable name");
                    continue;
                }
            };
            let path = self.snapshot_path(&id);
            if let Some(summary) = self.read_summary(&path, id).await {
                summaries.push(summary);
            }
        }

        Ok(summaries)
    }

    async fn load(&self, id: &SnapshotId) -> Result<Value, SnapshotStoreError> {
        let file_path = self.snapshot_path(id);

        if !file_path.exists() {
            return Err(SnapshotStoreError::NotFound(id.clone()));
        }

        let raw = fs::read_to_string(&file_path).await.map_err(StoreIo)?;
        let document: Value = serde_json::from_str(&raw)
            .map_err(|e| SnapshotStoreError::DeserializationFailed(e.to_string()))?;

        if !document.is_object() {
            return Err(SnapshotStoreError::NotAnObject(id.clone()));
        }

        Ok(document)
    }

    async fn delete(&self, id: &SnapshotId) -> Result<(), SnapshotStoreError> {
        let file_path = self.snapshot_path(id);

        if file_path.exists() {
            fs::remove_file(&file_path).await.map_err(StoreIo)?;
            debug!(snapshot_id = %id, "Deleted snapshot file");
        }

        Ok(())
    }
}

/// File-name-safe slug: lowercase ASCII alphanumerics separated by single dashes.
pub fn slugify(raw: &str) -> String {
    let mut slug = String::with_capacity(raw.len());
    let mut pending_dash = false;
    for ch in raw.trim().to_lowercase().chars() {
        if ch.is_ascii_lowercase() || ch.is_ascii_digit() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(ch);
        } else {
            pending_dash = true;
        }
    }

    let truncated: String = slug.chars().take(SLUG_MAX_LEN).collect();
    let trimmed = truncated.trim_matches('-');
    if trimmed.is_empty() {
        SLUG_FALLBACK.to_string()
    } else {
        trimmed.to_string()
    }
}

/// Falls back to the timestamp prefix of `<prefix>__<slug>.json`.
fn saved_at_from_file_name(name: &str) -> String {
    let prefix = name.split("__").next().unwrap_or(name);
    Timestamp::parse_file_prefix(prefix)
        .map(|ts| ts.to_iso8601())
        .unwrap_or_else(|| prefix.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::decision::DecisionWorkspace;
    use serde_json::json;
    use tempfile::TempDir;

    fn titled(title: &str) -> Value {
        let mut ws = DecisionWorkspace::new();
        ws.decision.title = title.to_string();
        ws.decision.category = "Career".to_string();
        ws.snapshot()
    }

    #[test]
    fn slugify_collapses_and_trims() {
        assert_eq!(slugify("  Quit my job?! "), "quit-my-job");
        assert_eq!(slugify("A -- B"), "a-b");
        assert_eq!(slugify("???"), "decision");
        assert_eq!(slugify(""), "decision");
        assert_eq!(slugify("Café plans"), "caf-plans");
    }

    #[test]
    fn slugify_caps_length() {
        let long = "word ".repeat(20);
        let slug = slugify(&long);
        assert!(slug.len() <= 40);
        assert!(!slug.ends_with('-'));
    }

    #[test]
    fn saved_at_fallback_parses_prefix() {
        assert_eq!(
            saved_at_from_file_name("20240115_103000__career.json"),
            "2024-01-15T10:30:00Z"
        );
        assert_eq!(saved_at_from_file_name("odd.json"), "odd.json");
    }

    #[tokio::test]
    async fn save_then_load_returns_same_document() {
        let temp_dir = TempDir::new().unwrap();
        let store = DirectorySnapshotStore::new(temp_dir.path());
        let snapshot = titled("New role");

        let summary = store.save(&snapshot, None).await.unwrap();
        let loaded = store.load(&summary.id).await.unwrap();

        assert_eq!(loaded, snapshot);
        assert!(summary.id.as_str().ends_with("__new-role.json"));
        assert_eq!(summary.title, "New role");
    }

    #[tokio::test]
    async fn label_overrides_title_for_file_name() {
        let temp_dir = TempDir::new().unwrap();
        let store = DirectorySnapshotStore::new(temp_dir.path());

        let summary = store
            .save(&titled("New role"), Some("Friday review"))
            .await
            .unwrap();

        assert!(summary.id.as_str().ends_with("__friday-review.json"));
    }

    #[tokio::test]
    async fn same_second_saves_do_not_overwrite() {
        let temp_dir = TempDir::new().unwrap();
        let store = DirectorySnapshotStore::new(temp_dir.path());

        let first = store.save(&titled("Same"), None).await.unwrap();
        let second = store.save(&titled("Same"), None).await.unwrap();

        assert_ne!(first.id, second.id);
        assert_eq!(store.list().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn list_is_empty_for_missing_directory() {
        let temp_dir = TempDir::new().unwrap();
        let store = DirectorySnapshotStore::new(temp_dir.path().join("nope"));

        assert!(store.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn list_skips_corrupt_files_and_sorts_newest_first() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path();
        std::fs::write(
            dir.join("20240101_000000__old.json"),
            serde_json::to_string(&titled("Old")).unwrap(),
        )
        .unwrap();
        std::fs::write(
            dir.join("20240301_000000__new.json"),
            serde_json::to_string(&titled("New")).unwrap(),
        )
        .unwrap();
        std::fs::write(dir.join("20240201_000000__broken.json"), "{not json").unwrap();
        std::fs::write(dir.join("20240202_000000__list.json"), "[1, 2]").unwrap();
        std::fs::write(dir.join("notes.txt"), "ignored").unwrap();

        let store = DirectorySnapshotStore::new(dir);
        let listed = store.list().await.unwrap();

        let titles: Vec<_> = listed.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, vec!["New", "Old"]);
    }

    #[tokio::test]
    async fn list_uses_file_prefix_when_saved_at_missing() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(
            temp_dir.path().join("20240115_103000__legacy.json"),
            json!({"title": ""}).to_string(),
        )
        .unwrap();

        let store = DirectorySnapshotStore::new(temp_dir.path());
        let listed = store.list().await.unwrap();

        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].title, "Untitled");
        assert_eq!(listed[0].saved_at, "2024-01-15T10:30:00Z");
    }

    #[tokio::test]
    async fn load_missing_is_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let store = DirectorySnapshotStore::new(temp_dir.path());
        let id = SnapshotId::parse("20240101_000000__nothing.json").unwrap();

        assert!(matches!(
            store.load(&id).await,
            Err(SnapshotStoreError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn load_rejects_non_object_files() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join("x.json"), "\"just text\"").unwrap();
        let store = DirectorySnapshotStore::new(temp_dir.path());
        let id = SnapshotId::parse("x.json").unwrap();

        assert!(matches!(
            store.load(&id).await,
            Err(SnapshotStoreError::NotAnObject(_))
        ));
    }

    #[tokio::test]
    async fn delete_is_idempotent() {
        let temp_dir = TempDir::new().unwrap();
        let store = DirectorySnapshotStore::new(temp_dir.path());
        let summary = store.save(&titled("Gone soon"), None).await.unwrap();

        store.delete(&summary.id).await.unwrap();
        store.delete(&summary.id).await.unwrap();

        assert!(store.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn save_rejects_non_object_documents() {
        let temp_dir = TempDir::new().unwrap();
        let store = DirectorySnapshotStore::new(temp_dir.path());

        assert!(matches!(
            store.save(&json!(null), None).await,
            Err(SnapshotStoreError::SerializationFailed(_))
        ));
    }
}
