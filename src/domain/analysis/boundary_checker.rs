//! Boundary Checker - Hard pass/fail comparison of an option against limits.

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;

use crate::domain::decision::{DecisionOption, Limits};

/// One enforced boundary.
///
/// Declaration order is significant: it is the order checks are reported in
/// and the order [`BoundaryChecks::first_failure`] scans.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoundaryCheck {
    Financial,
    Time,
    Stress,
    Relationships,
}

impl BoundaryCheck {
    /// Checks in their fixed reporting order.
    pub const ORDER: [BoundaryCheck; 4] = [
        BoundaryCheck::Financial,
        BoundaryCheck::Time,
        BoundaryCheck::Stress,
        BoundaryCheck::Relationships,
    ];

    /// Map key used when checks are rendered as name → bool.
    pub fn key(&self) -> &'static str {
        match self {
            BoundaryCheck::Financial => "financial",
            BoundaryCheck::Time => "time",
            BoundaryCheck::Stress => "stress",
            BoundaryCheck::Relationships => "relationships",
        }
    }

    /// Row label shown next to the result.
    pub fn label(&self) -> &'static str {
        match self {
            BoundaryCheck::Financial => "Money at risk",
            BoundaryCheck::Time => "Time demand",
            BoundaryCheck::Stress => "Stress & health load",
            BoundaryCheck::Relationships => "Impact on relationships",
        }
    }

    fn evaluate(&self, limits: &Limits, option: &DecisionOption) -> bool {
        match self {
            BoundaryCheck::Financial => option.money_at_risk_usd <= limits.money_max_usd,
            BoundaryCheck::Time => {
                option.time_required_hours_per_week <= limits.time_hours_per_week
            }
            BoundaryCheck::Stress => option.stress_fit.fits_within(limits.stress),
            BoundaryCheck::Relationships => {
                option.relationships_impact.fits_within(limits.relationships)
            }
        }
    }
}

impl fmt::Display for BoundaryCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Result of every boundary check for one option, in [`BoundaryCheck::ORDER`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundaryChecks {
    results: [(BoundaryCheck, bool); 4],
}

impl BoundaryChecks {
    /// Outcome of a single check.
    pub fn get(&self, check: BoundaryCheck) -> bool {
        self.results
            .iter()
            .find(|(c, _)| *c == check)
            .map(|(_, ok)| *ok)
            .unwrap_or(false)
    }

    /// True only when every check holds.
    pub fn passed(&self) -> bool {
        self.results.iter().all(|(_, ok)| *ok)
    }

    /// The earliest failing check in declared order, if any.
    ///
    /// When several boundaries are crossed only this one is cited, so
    /// explanations stay reproducible.
    pub fn first_failure(&self) -> Option<BoundaryCheck> {
        self.results
            .iter()
            .find(|(_, ok)| !*ok)
            .map(|(check, _)| *check)
    }

    /// All failing checks in declared order.
    pub fn failures(&self) -> Vec<BoundaryCheck> {
        self.results
            .iter()
            .filter(|(_, ok)| !*ok)
            .map(|(check, _)| *check)
            .collect()
    }

    /// Iterates `(check, ok)` pairs in declared order.
    pub fn iter(&self) -> impl Iterator<Item = (BoundaryCheck, bool)> + '_ {
        self.results.iter().copied()
    }

    /// Name → outcome view keyed by [`BoundaryCheck::key`].
    pub fn to_map(&self) -> BTreeMap<&'static str, bool> {
        self.results
            .iter()
            .map(|(check, ok)| (check.key(), *ok))
            .collect()
    }
}

impl Serialize for BoundaryChecks {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.results.len()))?;
        for (check, ok) in &self.results {
            map.serialize_entry(check.key(), ok)?;
        }
        map.end()
    }
}

/// Compares an option against the limits.
///
/// Money and time are plain `<=` on the raw values (nothing is clamped, an
/// option may exceed the limit and simply fails). Stress and relationships
/// compare Risk ranks: the option's actual impact must not exceed the tolerance.
/// The reserved reversibility and dependency fields are not checked.
pub fn check_limits(limits: &Limits, option: &DecisionOption) -> BoundaryChecks {
    let results = BoundaryCheck::ORDER.map(|check| (check, check.evaluate(limits, option)));
    BoundaryChecks { results }
}

/// One-line explanation for the first failing check (or a fit message).
pub fn explain_failure(
    failure: Option<BoundaryCheck>,
    limits: &Limits,
    option: &DecisionOption,
) -> String {
    match failure {
        None => "Fits within your boundaries.".to_string(),
        Some(BoundaryCheck::Financial) => format!(
            "This risks {}, which is above your limit ({}).",
            format_usd(option.money_at_risk_usd),
            format_usd(limits.money_max_usd)
        ),
        Some(BoundaryCheck::Time) => format!(
            "This asks for more time than your limit ({} hrs/week).",
            limits.time_hours_per_week
        ),
        Some(BoundaryCheck::Stress) => {
            "This creates more sustained stress than you said you can sustain.".to_string()
        }
        Some(BoundaryCheck::Relationships) => {
            "This risks straining important relationships beyond what you said you can accept."
                .to_string()
        }
    }
}

/// Dollar amount with thousands separators, e.g. `$12,500`.
pub fn format_usd(amount: u64) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("${}", grouped)
}
