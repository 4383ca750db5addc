//! Analysis Module - Pure domain services for comparing two options.
//!
//! # Components
//!
//! - `boundary_checker` - Hard pass/fail checks of an option against the limits
//! - `scoring` - Category-weighted 0-100 score of an option's criteria ratings
//! - `comparison` - Filter by boundaries, then rank the survivors
//!
//! All functions are pure (no side effects) and stateless. They never fail for
//! well-typed input; coercion of untrusted data happens in `snapshot`.

mod boundary_checker;
mod comparison;
mod scoring;

pub use boundary_checker::{
    check_limits, explain_failure, format_usd, BoundaryCheck, BoundaryChecks,
};
pub use comparison::{
    compare_options, ComparisonError, ComparisonOutcome, OptionAssessment, Verdict,
    MISSING_SUMMARY,
};
pub use scoring::{score_criteria, weighted_score};
