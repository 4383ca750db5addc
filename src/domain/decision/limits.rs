//! Hard personal boundaries for one decision.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::Risk;

/// User-set ceilings and tolerances an option must stay within.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Limits {
    pub money_max_usd: u64,
    pub time_hours_per_week: u64,
    pub stress: Risk,
    pub relationships: Risk,
    /// Reserved; carried through snapshots but never enforced.
    pub reversibility: Risk,
    /// Reserved; carried through snapshots but never enforced.
    pub dependency: Risk,
    /// Set only by an explicit user action; filling in values never implies it.
    pub confirmed: bool,
}

impl Limits {
    pub const DEFAULT_MONEY_MAX_USD: u64 = 1000;
    pub const DEFAULT_TIME_HOURS_PER_WEEK: u64 = 10;

    /// Records the user's explicit confirmation.
    pub fn confirm(&mut self) {
        self.confirmed = true;
    }

    /// Withdraws confirmation, e.g. when the user goes back to edit.
    pub fn unconfirm(&mut self) {
        self.confirmed = false;
    }
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            money_max_usd: Self::DEFAULT_MONEY_MAX_USD,
            time_hours_per_week: Self::DEFAULT_TIME_HOURS_PER_WEEK,
            stress: Risk::Medium,
            relationships: Risk::Medium,
            reversibility: Risk::Medium,
            dependency: Risk::Medium,
            confirmed: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_wizard_starting_values() {
        let limits = Limits::default();
        assert_eq!(limits.money_max_usd, 1000);
        assert_eq!(limits.time_hours_per_week, 10);
        assert_eq!(limits.stress, Risk::Medium);
        assert_eq!(limits.relationships, Risk::Medium);
        assert!(!limits.confirmed);
    }

    #[test]
    fn editing_values_does_not_confirm() {
        let mut limits = Limits::default();
        limits.money_max_usd = 5000;
        limits.stress = Risk::High;
        assert!(!limits.confirmed);

        limits.confirm();
        assert!(limits.confirmed);
        limits.unconfirm();
        assert!(!limits.confirmed);
    }
}
