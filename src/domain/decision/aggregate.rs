//! Decision aggregate and the session-owned workspace.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{DecisionOption, Limits, WizardStage};
use crate::domain::criteria::Category;

/// What is being decided, its category and the user's limits.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decision {
    pub title: String,
    /// Category display name; unknown values fall back when criteria are looked up.
    pub category: String,
    pub limits: Limits,
}

impl Decision {
    /// The category whose criteria apply to this decision.
    pub fn resolved_category(&self) -> Category {
        Category::resolve(&self.category)
    }
}

/// Which of the two options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OptionSide {
    A,
    B,
}

impl OptionSide {
    pub const BOTH: [OptionSide; 2] = [OptionSide::A, OptionSide::B];

    /// Name given to a fresh option on this side.
    pub fn default_name(&self) -> &'static str {
        match self {
            OptionSide::A => "Option A",
            OptionSide::B => "Option B",
        }
    }

    /// Key of this side inside a snapshot's `options` object.
    pub fn snapshot_key(&self) -> &'static str {
        match self {
            OptionSide::A => "opt_a",
            OptionSide::B => "opt_b",
        }
    }
}

impl fmt::Display for OptionSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.default_name())
    }
}

/// One session's decision together with its two options.
///
/// Exclusively owned by the active session and passed explicitly to every
/// operation that reads or mutates it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecisionWorkspace {
    pub decision: Decision,
    pub option_a: DecisionOption,
    pub option_b: DecisionOption,
}

impl DecisionWorkspace {
    /// Fresh workspace with default limits and options "Option A"/"Option B".
    pub fn new() -> Self {
        Self {
            decision: Decision::default(),
            option_a: DecisionOption::named(OptionSide::A.default_name()),
            option_b: DecisionOption::named(OptionSide::B.default_name()),
        }
    }

    pub fn option(&self, side: OptionSide) -> &DecisionOption {
        match side {
            OptionSide::A => &self.option_a,
            OptionSide::B => &self.option_b,
        }
    }

    pub fn option_mut(&mut self, side: OptionSide) -> &mut DecisionOption {
        match side {
            OptionSide::A => &mut self.option_a,
            OptionSide::B => &mut self.option_b,
        }
    }

    /// Whether the wizard may move to `stage` given the current state.
    ///
    /// Only the compare stage is gated: it needs confirmed limits.
    pub fn can_enter(&self, stage: WizardStage) -> bool {
        match stage {
            WizardStage::Compare => self.decision.limits.confirmed,
            WizardStage::Category | WizardStage::Limits | WizardStage::Options => true,
        }
    }
}

impl Default for DecisionWorkspace {
    fn default() -> Self {
        Self::new()
    }
}
