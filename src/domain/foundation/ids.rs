//! Strongly-typed identifier value objects.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use super::ValidationError;

/// Identifier of a persisted snapshot.
///
/// Opaque to the domain: the directory store uses file names, the log store
/// uses generated record ids. Never empty and never a path.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SnapshotId(String);

impl SnapshotId {
    /// Validates and wraps a raw identifier.
    pub fn parse(raw: impl Into<String>) -> Result<Self, ValidationError> {
        let raw = raw.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::empty_field("snapshot_id"));
        }
        if trimmed.contains('/') || trimmed.contains('\\') || trimmed.contains("..") {
            return Err(ValidationError::invalid_format(
                "snapshot_id",
                "must not contain path separators or '..'",
            ));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SnapshotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for SnapshotId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for SnapshotId {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<SnapshotId> for String {
    fn from(id: SnapshotId) -> Self {
        id.0
    }
}

/// Generated identifier for an entry in the append-only decision log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RecordId(Uuid);

impl RecordId {
    /// Prefix carried by every rendered record id.
    pub const PREFIX: &'static str = "dec_";

    /// Creates a new random RecordId.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Converts into the opaque snapshot identifier used by the store port.
    pub fn to_snapshot_id(&self) -> SnapshotId {
        SnapshotId(self.to_string())
    }
}

impl Default for RecordId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", Self::PREFIX, self.0.simple())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_id_accepts_file_names() {
        let id = SnapshotId::parse("20240115_103000__career-move.json").unwrap();
        assert_eq!(id.as_str(), "20240115_103000__career-move.json");
    }

    #[test]
    fn snapshot_id_trims_whitespace() {
        let id = SnapshotId::parse("  dec_abc  ").unwrap();
        assert_eq!(id.as_str(), "dec_abc");
    }

    #[test]
    fn snapshot_id_rejects_empty() {
        assert!(matches!(
            SnapshotId::parse("   "),
            Err(ValidationError::EmptyField { .. })
        ));
    }

    #[test]
    fn snapshot_id_rejects_paths() {
        assert!(SnapshotId::parse("../etc/passwd").is_err());
        assert!(SnapshotId::parse("nested/file.json").is_err());
        assert!(SnapshotId::parse("nested\\file.json").is_err());
    }

    #[test]
    fn snapshot_id_serde_validates() {
        let id: SnapshotId = serde_json::from_str("\"dec_1\"").unwrap();
        assert_eq!(id.as_str(), "dec_1");
        assert!(serde_json::from_str::<SnapshotId>("\"a/b\"").is_err());
    }

    #[test]
    fn record_id_renders_with_prefix() {
        let id = RecordId::new();
        let rendered = id.to_string();
        assert!(rendered.starts_with("dec_"));
        assert_eq!(rendered.len(), 4 + 32);
        assert_eq!(id.to_snapshot_id().as_str(), rendered);
    }

    #[test]
    fn record_ids_are_unique() {
        assert_ne!(RecordId::new(), RecordId::new());
    }
}
