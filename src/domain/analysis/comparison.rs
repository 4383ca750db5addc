//! Comparison - Boundary filtering followed by weighted ranking of survivors.

use serde::Serialize;
use thiserror::Error;

use super::{check_limits, explain_failure, weighted_score, BoundaryCheck, BoundaryChecks};
use crate::domain::criteria::Category;
use crate::domain::decision::{Decision, DecisionOption, OptionSide};
use crate::domain::foundation::{DomainError, ErrorCode};

/// Errors that prevent a comparison from running.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ComparisonError {
    #[error("Limits must be confirmed before options can be compared")]
    LimitsNotConfirmed,
}

impl From<ComparisonError> for DomainError {
    fn from(err: ComparisonError) -> Self {
        match err {
            ComparisonError::LimitsNotConfirmed => {
                DomainError::new(ErrorCode::LimitsNotConfirmed, err.to_string())
            }
        }
    }
}

/// How one option fared.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OptionAssessment {
    pub side: OptionSide,
    pub name: String,
    pub checks: BoundaryChecks,
    pub passed: bool,
    pub first_failure: Option<BoundaryCheck>,
    pub explanation: String,
    /// What changes day-to-day, trimmed; empty when none was entered.
    pub summary: String,
    /// Weighted score; always computed, but only meaningful when `passed`.
    #[serde(skip)]
    pub raw_score: f64,
    /// Serialized score, `null` for an option that crossed a boundary.
    score: Option<f64>,
}

/// Shown when an option carries no day-to-day summary.
pub const MISSING_SUMMARY: &str = "No day-to-day summary was entered on the Options page.";

impl OptionAssessment {
    fn assess(side: OptionSide, decision: &Decision, option: &DecisionOption, category: Category) -> Self {
        let checks = check_limits(&decision.limits, option);
        let first_failure = checks.first_failure();
        let passed = checks.passed();
        let raw_score = weighted_score(category.name(), &option.criteria);
        Self {
            side,
            name: option.name.clone(),
            passed,
            explanation: explain_failure(first_failure, &decision.limits, option),
            summary: option.summary.trim().to_string(),
            first_failure,
            checks,
            raw_score,
            score: passed.then_some(raw_score),
        }
    }

    /// Score shown to the user: withheld for removed options.
    pub fn score(&self) -> Option<f64> {
        self.score
    }

    /// Day-to-day summary for display, with a placeholder when blank.
    pub fn summary_text(&self) -> &str {
        if self.summary.is_empty() {
            MISSING_SUMMARY
        } else {
            &self.summary
        }
    }
}

/// Overall result of comparing the two options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "side", rename_all = "snake_case")]
pub enum Verdict {
    /// Exactly one option stays within the boundaries.
    OnlyOneFits(OptionSide),
    /// Both options cross at least one boundary.
    NeitherFits,
    /// Both fit and this side scored strictly higher.
    Prefer(OptionSide),
    /// Both fit with identical scores; neither is favored.
    Tie,
}

/// Full comparison output for the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonOutcome {
    pub category: Category,
    pub option_a: OptionAssessment,
    pub option_b: OptionAssessment,
    pub verdict: Verdict,
}

impl ComparisonOutcome {
    pub fn assessment(&self, side: OptionSide) -> &OptionAssessment {
        match side {
            OptionSide::A => &self.option_a,
            OptionSide::B => &self.option_b,
        }
    }

    /// Short headline describing the verdict, using the option names.
    pub fn headline(&self) -> String {
        match self.verdict {
            Verdict::OnlyOneFits(side) => format!(
                "Only one option fits within your boundaries: {}.",
                self.assessment(side).name
            ),
            Verdict::NeitherFits => {
                "Neither option fits within the boundaries you set.".to_string()
            }
            Verdict::Prefer(side) => format!(
                "Based on what you set, {} fits better.",
                self.assessment(side).name
            ),
            Verdict::Tie => "Based on what you set, this is a tie.".to_string(),
        }
    }
}

/// Filters both options by the limits, then ranks the survivors.
///
/// # Errors
/// [`ComparisonError::LimitsNotConfirmed`] if the user has not locked the limits.
pub fn compare_options(
    decision: &Decision,
    option_a: &DecisionOption,
    option_b: &DecisionOption,
) -> Result<ComparisonOutcome, ComparisonError> {
    if !decision.limits.confirmed {
        return Err(ComparisonError::LimitsNotConfirmed);
    }

    let category = decision.resolved_category();
    let a = OptionAssessment::assess(OptionSide::A, decision, option_a, category);
    let b = OptionAssessment::assess(OptionSide::B, decision, option_b, category);

    let verdict = match (a.passed, b.passed) {
        (true, false) => Verdict::OnlyOneFits(OptionSide::A),
        (false, true) => Verdict::OnlyOneFits(OptionSide::B),
        (false, false) => Verdict::NeitherFits,
        (true, true) => {
            if a.raw_score > b.raw_score {
                Verdict::Prefer(OptionSide::A)
            } else if b.raw_score > a.raw_score {
                Verdict::Prefer(OptionSide::B)
            } else {
                Verdict::Tie
            }
        }
    };

    Ok(ComparisonOutcome {
        category,
        option_a: a,
        option_b: b,
        verdict,
    })
}
