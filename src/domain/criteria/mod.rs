//! Criteria Module - Category-specific scoring dimensions.
//!
//! Each decision category carries a fixed, hand-curated list of weighted
//! criteria. Options are rated against these on a bounded integer scale and
//! the ratings feed the weighted scoring engine in `analysis`.

mod catalog;
mod category;

pub use catalog::{criteria_for, Criterion};
pub use category::Category;
