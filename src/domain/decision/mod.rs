//! Decision Module - Limits, candidate options and the decision aggregate.
//!
//! A decision is created once per session together with exactly two options,
//! then mutated field by field as the user walks the wizard stages. Nothing
//! in here knows about persistence; see `snapshot` for the wire format.

mod aggregate;
mod limits;
mod option;
mod stage;

pub use aggregate::{Decision, DecisionWorkspace, OptionSide};
pub use limits::Limits;
pub use option::{CriteriaValues, DecisionOption};
pub use stage::WizardStage;
