//! Snapshot Module - Versioned JSON form of a decision and its two options.
//!
//! Encoding and decoding are driven by the same declarative field tables
//! (`fields`), which keeps the two directions symmetric. Decoding never
//! fails on field contents: untrusted values are coerced or defaulted, and
//! the only hard error is a root that is not a JSON object.

mod codec;
mod fields;

pub use codec::{
    apply_snapshot, snapshot_at, snapshot_current, SnapshotError, SnapshotHeader, SnapshotShape,
    SNAPSHOT_VERSION,
};
