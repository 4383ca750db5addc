//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Command handlers write to the snapshot store; query handlers read from it.

pub mod handlers;

pub use handlers::{
    CompareOptionsHandler, CompareOptionsQuery, CompareOptionsResult,
    DeleteSavedDecisionCommand, DeleteSavedDecisionHandler, DeleteSavedDecisionResult,
    ImportDecisionCommand, ImportDecisionHandler, ImportDecisionResult,
    ListSavedDecisionsHandler, ListSavedDecisionsQuery,
    LoadDecisionHandler, LoadDecisionQuery, LoadDecisionResult,
    SaveDecisionCommand, SaveDecisionHandler, SaveDecisionResult,
};
