//! Candidate options.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::foundation::Risk;

/// Ratings keyed by criterion key. Keys absent here score at the criterion default.
pub type CriteriaValues = BTreeMap<String, i64>;

/// One candidate choice described against the user's limits and criteria.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecisionOption {
    /// User-facing label; the two options may share it.
    pub name: String,
    pub money_at_risk_usd: u64,
    pub time_required_hours_per_week: u64,
    pub stress_fit: Risk,
    pub relationships_impact: Risk,
    /// Reserved; never enforced.
    pub reversibility: Risk,
    /// Reserved; never enforced.
    pub dependency: Risk,
    /// Free text, never scored.
    pub summary: String,
    pub criteria: CriteriaValues,
}

impl DecisionOption {
    pub const DEFAULT_MONEY_AT_RISK_USD: u64 = 1000;
    pub const DEFAULT_TIME_REQUIRED_HOURS_PER_WEEK: u64 = 10;

    /// Creates an option with the given name and default inputs.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            money_at_risk_usd: Self::DEFAULT_MONEY_AT_RISK_USD,
            time_required_hours_per_week: Self::DEFAULT_TIME_REQUIRED_HOURS_PER_WEEK,
            stress_fit: Risk::Medium,
            relationships_impact: Risk::Medium,
            reversibility: Risk::Medium,
            dependency: Risk::Medium,
            summary: String::new(),
            criteria: CriteriaValues::new(),
        }
    }

    /// Sets one criterion rating.
    pub fn rate(&mut self, key: impl Into<String>, value: i64) {
        self.criteria.insert(key.into(), value);
    }

    /// Builder form of [`DecisionOption::rate`].
    pub fn with_rating(mut self, key: impl Into<String>, value: i64) -> Self {
        self.rate(key, value);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_option_starts_with_defaults() {
        let option = DecisionOption::named("Option A");
        assert_eq!(option.name, "Option A");
        assert_eq!(option.money_at_risk_usd, 1000);
        assert_eq!(option.time_required_hours_per_week, 10);
        assert_eq!(option.stress_fit, Risk::Medium);
        assert!(option.summary.is_empty());
        assert!(option.criteria.is_empty());
    }

    #[test]
    fn rate_overwrites_existing_rating() {
        let mut option = DecisionOption::named("A").with_rating("upside", 3);
        option.rate("upside", 8);
        assert_eq!(option.criteria.get("upside"), Some(&8));
        assert_eq!(option.criteria.len(), 1);
    }
}
