//! WizardStage - The fixed linear sequence the user walks through.
//!
//! Category → Limits → Options → Compare

use serde::{Deserialize, Serialize};
use std::fmt;

/// A step of the decision wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WizardStage {
    Category,
    Limits,
    Options,
    Compare,
}

impl WizardStage {
    /// The canonical order of stages.
    pub const ORDER: [WizardStage; 4] = [
        WizardStage::Category,
        WizardStage::Limits,
        WizardStage::Options,
        WizardStage::Compare,
    ];

    /// Returns the 0-based index of the stage in the sequence.
    pub fn order_index(&self) -> usize {
        match self {
            WizardStage::Category => 0,
            WizardStage::Limits => 1,
            WizardStage::Options => 2,
            WizardStage::Compare => 3,
        }
    }

    /// Returns the next stage, or None at the end.
    pub fn next(&self) -> Option<WizardStage> {
        Self::ORDER.get(self.order_index() + 1).copied()
    }

    /// Returns the previous stage, or None at the start.
    pub fn previous(&self) -> Option<WizardStage> {
        self.order_index()
            .checked_sub(1)
            .and_then(|idx| Self::ORDER.get(idx).copied())
    }

    pub fn label(&self) -> &'static str {
        match self {
            WizardStage::Category => "Category",
            WizardStage::Limits => "Limits",
            WizardStage::Options => "Options",
            WizardStage::Compare => "Compare",
        }
    }
}

impl fmt::Display for WizardStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_index_matches_order_array() {
        for (idx, stage) in WizardStage::ORDER.iter().enumerate() {
            assert_eq!(stage.order_index(), idx);
        }
    }

    #[test]
    fn next_walks_forward_and_stops() {
        assert_eq!(WizardStage::Category.next(), Some(WizardStage::Limits));
        assert_eq!(WizardStage::Options.next(), Some(WizardStage::Compare));
        assert_eq!(WizardStage::Compare.next(), None);
    }

    #[test]
    fn previous_walks_back_and_stops() {
        assert_eq!(WizardStage::Compare.previous(), Some(WizardStage::Options));
        assert_eq!(WizardStage::Category.previous(), None);
    }
}
