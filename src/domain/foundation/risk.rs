//! Risk ordinal shared by user tolerances and option impacts.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

/// Three-step ordinal scale: Low < Medium < High.
///
/// Used both as a tolerance the user is willing to accept and as the actual
/// impact an option carries. A boundary holds when `actual.rank() <= tolerance.rank()`.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Risk {
    Low,
    #[default]
    Medium,
    High,
}

impl Risk {
    /// All levels in ascending order.
    pub const ALL: [Risk; 3] = [Risk::Low, Risk::Medium, Risk::High];

    /// Position on the scale (Low = 0).
    pub fn rank(&self) -> u8 {
        match self {
            Risk::Low => 0,
            Risk::Medium => 1,
            Risk::High => 2,
        }
    }

    /// Wire label used in snapshots.
    pub fn label(&self) -> &'static str {
        match self {
            Risk::Low => "Low",
            Risk::Medium => "Medium",
            Risk::High => "High",
        }
    }

    /// Returns true if `self`, read as an actual impact, fits inside `tolerance`.
    pub fn fits_within(&self, tolerance: Risk) -> bool {
        self.rank() <= tolerance.rank()
    }

    /// Lenient label parse: trims, ignores case, and maps anything unknown to Medium.
    pub fn from_label_or_default(raw: &str) -> Self {
        raw.parse().unwrap_or_default()
    }
}

impl FromStr for Risk {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Risk::ALL
            .into_iter()
            .find(|risk| risk.label().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| {
                ValidationError::invalid_format("risk", format!("unknown level '{}'", trimmed))
            })
    }
}

impl fmt::Display for Risk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
