//! Static criteria catalog.

use serde::Serialize;

use super::Category;

/// One weighted, bounded scoring dimension.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Criterion {
    pub key: &'static str,
    pub label: &'static str,
    pub help: &'static str,
    pub min_value: i64,
    pub max_value: i64,
    pub default: i64,
    pub weight: f64,
}

impl Criterion {
    /// Creates a criterion on the standard 0-10 scale with default 5.
    pub const fn new(
        key: &'static str,
        label: &'static str,
        help: &'static str,
        weight: f64,
    ) -> Self {
        Self {
            key,
            label,
            help,
            min_value: 0,
            max_value: 10,
            default: 5,
            weight,
        }
    }

    /// Clamps a raw rating into this criterion's bounds.
    pub fn clamp(&self, rating: i64) -> i64 {
        rating.clamp(self.min_value, self.max_value)
    }
}

const CAREER: &[Criterion] = &[
    Criterion::new(
        "skill_compounding",
        "Skill compounding",
        "Does this build transferable skills that stack over time?",
        1.3,
    ),
    Criterion::new(
        "resume_signal",
        "Resume signal",
        "How strongly does this signal competence to employers?",
        1.2,
    ),
    Criterion::new(
        "upside",
        "Upside",
        "Ceiling over 2–5 years if executed well.",
        1.1,
    ),
    Criterion::new(
        "optionality",
        "Optionality",
        "Does this keep doors open / reduce lock-in?",
        1.0,
    ),
    Criterion::new(
        "day_to_day_fit",
        "Day-to-day fit",
        "Do you realistically like the daily work?",
        0.9,
    ),
];

const FINANCIAL: &[Criterion] = &[
    Criterion::new(
        "expected_roi",
        "Expected ROI",
        "Expected financial return relative to effort/time.",
        1.3,
    ),
    Criterion::new(
        "cashflow_timing",
        "Cashflow timing",
        "How quickly benefits arrive.",
        1.1,
    ),
    Criterion::new(
        "volatility",
        "Stability",
        "How predictable the outcome is (higher = more stable).",
        1.2,
    ),
    Criterion::new(
        "simplicity",
        "Simplicity",
        "How easy it is to execute and maintain.",
        0.9,
    ),
];

const RELATIONSHIP: &[Criterion] = &[
    Criterion::new(
        "trust",
        "Trust impact",
        "Does this increase trust and stability?",
        1.3,
    ),
    Criterion::new(
        "conflict_risk",
        "Conflict reduction",
        "Does this reduce recurring conflict?",
        1.1,
    ),
    Criterion::new(
        "long_term_alignment",
        "Long-term alignment",
        "Are values + trajectory aligned?",
        1.2,
    ),
    Criterion::new(
        "repairability",
        "Repairability",
        "If it goes wrong, can it be repaired?",
        1.0,
    ),
];

const HEALTH: &[Criterion] = &[
    Criterion::new(
        "health_outcome",
        "Health outcome",
        "Expected improvement to health/fitness.",
        1.3,
    ),
    Criterion::new(
        "adherence",
        "Adherence",
        "How likely you are to stick with it.",
        1.2,
    ),
    Criterion::new("energy", "Energy / mood", "Impact on energy and mood.", 1.0),
    Criterion::new(
        "sustainability",
        "Sustainability",
        "Can you maintain it long-term?",
        1.1,
    ),
];

const PERSONAL: &[Criterion] = &[
    Criterion::new(
        "quality_of_life",
        "Quality of life",
        "Does it improve your life overall?",
        1.2,
    ),
    Criterion::new(
        "identity_fit",
        "Identity fit",
        "Does this fit who you want to be?",
        1.1,
    ),
    Criterion::new(
        "regret_minimization",
        "Regret minimization",
        "Will you regret not doing this?",
        1.0,
    ),
    Criterion::new(
        "simplicity",
        "Simplicity",
        "Execution simplicity / low friction.",
        0.9,
    ),
];

impl Category {
    /// The fixed criteria list for this category.
    pub fn criteria(&self) -> &'static [Criterion] {
        match self {
            Category::Career => CAREER,
            Category::Personal => PERSONAL,
            Category::Financial => FINANCIAL,
            Category::Relationship => RELATIONSHIP,
            Category::Health => HEALTH,
        }
    }
}

/// Returns the criteria for a category name.
///
/// Unknown names get the fallback category's list, so the result is never empty.
pub fn criteria_for(category: &str) -> &'static [Criterion] {
    Category::resolve(category).criteria()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn career_lists_five_criteria_in_order() {
        let keys: Vec<_> = criteria_for("Career").iter().map(|c| c.key).collect();
        assert_eq!(
            keys,
            vec![
                "skill_compounding",
                "resume_signal",
                "upside",
                "optionality",
                "day_to_day_fit"
            ]
        );
    }

    #[test]
    fn unknown_category_uses_personal_list() {
        assert_eq!(criteria_for("Travel"), criteria_for("Personal"));
        assert_eq!(criteria_for(""), Category::Personal.criteria());
    }

    #[test]
    fn every_category_is_non_empty_with_unique_keys() {
        for category in Category::ALL {
            let list = category.criteria();
            assert!(!list.is_empty(), "{} has no criteria", category);
            let keys: HashSet<_> = list.iter().map(|c| c.key).collect();
            assert_eq!(keys.len(), list.len(), "{} repeats a key", category);
        }
    }

    #[test]
    fn every_criterion_has_sane_bounds_and_positive_weight() {
        for category in Category::ALL {
            for c in category.criteria() {
                assert!(c.min_value < c.max_value);
                assert!((c.min_value..=c.max_value).contains(&c.default));
                assert!(c.weight > 0.0);
            }
        }
    }

    #[test]
    fn clamp_respects_bounds() {
        let c = CAREER[0];
        assert_eq!(c.clamp(-4), 0);
        assert_eq!(c.clamp(7), 7);
        assert_eq!(c.clamp(42), 10);
    }

    #[test]
    fn help_text_is_kept_verbatim() {
        let help = |category: &str, key: &str| {
            criteria_for(category)
                .iter()
                .find(|c| c.key == key)
                .map(|c| c.help)
                .unwrap()
        };

        assert_eq!(help("Career", "upside"), "Ceiling over 2–5 years if executed well.");
        assert_eq!(
            help("Career", "optionality"),
            "Does this keep doors open / reduce lock-in?"
        );
        assert_eq!(
            help("Financial", "expected_roi"),
            "Expected financial return relative to effort/time."
        );
        assert_eq!(
            help("Relationship", "long_term_alignment"),
            "Are values + trajectory aligned?"
        );
        assert_eq!(
            help("Health", "health_outcome"),
            "Expected improvement to health/fitness."
        );
        assert_eq!(
            help("Personal", "simplicity"),
            "Execution simplicity / low friction."
        );
    }

    #[test]
    fn criteria_serialize_with_every_field() {
        let json = serde_json::to_value(criteria_for("Career")).unwrap();

        assert_eq!(json.as_array().map(Vec::len), Some(5));
        assert_eq!(
            json[0],
            serde_json::json!({
                "key": "skill_compounding",
                "label": "Skill compounding",
                "help": "Does this build transferable skills that stack over time?",
                "min_value": 0,
                "max_value": 10,
                "default": 5,
                "weight": 1.3,
            })
        );
    }
}
