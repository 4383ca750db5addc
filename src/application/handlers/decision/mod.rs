//! Decision application handlers.
//!
//! Command and query handlers for saving, restoring and comparing decisions.

mod compare_options;
mod delete_saved_decision;
mod import_decision;
mod list_saved_decisions;
mod load_decision;
mod save_decision;

pub use compare_options::{CompareOptionsHandler, CompareOptionsQuery, CompareOptionsResult};
pub use delete_saved_decision::{
    DeleteSavedDecisionCommand, DeleteSavedDecisionHandler, DeleteSavedDecisionResult,
};
pub use import_decision::{ImportDecisionCommand, ImportDecisionHandler, ImportDecisionResult};
pub use list_saved_decisions::{ListSavedDecisionsHandler, ListSavedDecisionsQuery};
pub use load_decision::{LoadDecisionHandler, LoadDecisionQuery, LoadDecisionResult};
pub use save_decision::{SaveDecisionCommand, SaveDecisionHandler, SaveDecisionResult};
