//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod decision;

pub use decision::{
    CompareOptionsHandler, CompareOptionsQuery, CompareOptionsResult,
    DeleteSavedDecisionCommand, DeleteSavedDecisionHandler, DeleteSavedDecisionResult,
    ImportDecisionCommand, ImportDecisionHandler, ImportDecisionResult,
    ListSavedDecisionsHandler, ListSavedDecisionsQuery,
    LoadDecisionHandler, LoadDecisionQuery, LoadDecisionResult,
    SaveDecisionCommand, SaveDecisionHandler, SaveDecisionResult,
};
