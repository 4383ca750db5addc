//! Timestamp value object for immutable points in time.

use chrono::{DateTime, NaiveDateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// Immutable point in time, always UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Creates a timestamp for the current moment.
    pub fn now() -> Self {
        Self(Utc::now())
    }

    /// Creates a timestamp from a DateTime<Utc>.
    pub fn from_datetime(dt: DateTime<Utc>) -> Self {
        Self(dt)
    }

    /// Returns the inner DateTime.
    pub fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }

    /// ISO-8601 rendering with second precision, e.g. `2024-01-15T10:30:00Z`.
    pub fn to_iso8601(&self) -> String {
        self.0.to_rfc3339_opts(SecondsFormat::Secs, true)
    }

    /// Compact form used as a file name prefix, e.g. `20240115_103000`.
    pub fn to_file_prefix(&self) -> String {
        self.0.format("%Y%m%d_%H%M%S").to_string()
    }

    /// Parses the compact file name prefix back into a timestamp.
    pub fn parse_file_prefix(raw: &str) -> Option<Self> {
        NaiveDateTime::parse_from_str(raw, "%Y%m%d_%H%M%S")
            .ok()
            .map(|naive| Self(naive.and_utc()))
    }
}

impl Default for Timestamp {
    fn default() -> Self {
        Self::now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixed() -> Timestamp {
        let dt = DateTime::parse_from_rfc3339("2024-01-15T10:30:00Z")
            .unwrap()
            .with_timezone(&Utc);
        Timestamp::from_datetime(dt)
    }

    #[test]
    fn timestamp_now_creates_current_time() {
        let before = Utc::now();
        let ts = Timestamp::now();
        let after = Utc::now();

        assert!(ts.as_datetime() >= &before);
        assert!(ts.as_datetime() <= &after);
    }

    #[test]
    fn iso8601_uses_second_precision() {
        assert_eq!(fixed().to_iso8601(), "2024-01-15T10:30:00Z");
    }

    #[test]
    fn file_prefix_roundtrips() {
        let ts = fixed();
        assert_eq!(ts.to_file_prefix(), "20240115_103000");
        assert_eq!(Timestamp::parse_file_prefix("20240115_103000"), Some(ts));
    }

    #[test]
    fn parse_file_prefix_rejects_garbage() {
        assert_eq!(Timestamp::parse_file_prefix("not-a-date"), None);
    }

    #[test]
    fn timestamp_serializes_to_json() {
        let json = serde_json::to_string(&fixed()).unwrap();
        assert!(json.contains("2024-01-15"));
    }
}
