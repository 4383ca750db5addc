//! Scoring Engine - Weighted normalization of criteria ratings.

use crate::domain::criteria::{criteria_for, Criterion};
use crate::domain::decision::CriteriaValues;

/// Scores criteria ratings for a category on a 0-100 scale.
///
/// # Algorithm
/// For each criterion of the category: take the rating (or the criterion
/// default when absent), clamp it into `[min_value, max_value]`, multiply by
/// the weight and sum. Divide by `Σ(max_value × weight)` and scale to 100.
///
/// # Edge Cases
/// - Unknown category: scored against the fallback category's criteria
/// - Keys not in the category: ignored
/// - Out-of-range ratings: clamped, never rejected
/// - Non-positive total weight or max sum: returns 0.0
pub fn weighted_score(category: &str, values: &CriteriaValues) -> f64 {
    score_criteria(criteria_for(category), values)
}

/// [`weighted_score`] over an explicit criteria list.
pub fn score_criteria(criteria: &[Criterion], values: &CriteriaValues) -> f64 {
    let total_weight: f64 = criteria.iter().map(|c| c.weight).sum();
    if total_weight <= 0.0 {
        return 0.0;
    }

    let max_raw: f64 = criteria
        .iter()
        .map(|c| c.max_value as f64 * c.weight)
        .sum();
    if max_raw <= 0.0 {
        return 0.0;
    }

    let actual: f64 = criteria
        .iter()
        .map(|c| {
            let rating = values.get(c.key).copied().unwrap_or(c.default);
            c.clamp(rating) as f64 * c.weight
        })
        .sum();

    (actual / max_raw) * 100.0
}
