//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, the risk ordinal and error types
//! that form the vocabulary of the decision wizard.

mod errors;
mod ids;
mod risk;
mod timestamp;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{RecordId, SnapshotId};
pub use risk::Risk;
pub use timestamp::Timestamp;
