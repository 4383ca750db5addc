//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (risk ordinal, IDs, timestamps, errors)
//! - `criteria` - Category catalog of weighted scoring criteria
//! - `decision` - Limits, options, the decision aggregate and wizard stages
//! - `analysis` - Boundary checking, weighted scoring and comparison
//! - `snapshot` - Versioned JSON snapshot codec

pub mod analysis;
pub mod criteria;
pub mod decision;
pub mod foundation;
pub mod snapshot;
