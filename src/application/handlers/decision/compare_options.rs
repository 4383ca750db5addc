//! CompareOptions - Query handler running the boundary filter and ranking.

use std::sync::Arc;

use tracing::{debug, info};

use super::load_decision::parse_id;
use crate::domain::analysis::{compare_options, ComparisonOutcome};
use crate::domain::decision::DecisionWorkspace;
use crate::domain::foundation::DomainError;
use crate::ports::SnapshotStore;

/// Where the decision to compare comes from.
#[derive(Debug, Clone)]
pub enum CompareOptionsQuery {
    /// A workspace already in hand, e.g. restored from a file.
    Workspace(Box<DecisionWorkspace>),
    /// A decision saved in the store.
    Saved { id: String },
}

/// Result of comparing the two options.
pub type CompareOptionsResult = ComparisonOutcome;

/// Handler for comparing options.
pub struct CompareOptionsHandler {
    store: Arc<dyn SnapshotStore>,
}

impl CompareOptionsHandler {
    pub fn new(store: Arc<dyn SnapshotStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, query: CompareOptionsQuery) -> Result<CompareOptionsResult, DomainError> {
        let workspace = match query {
            CompareOptionsQuery::Workspace(workspace) => *workspace,
            CompareOptionsQuery::Saved { id } => {
                let id = parse_id(&id)?;
                let document = self.store.load(&id).await?;
                let mut workspace = DecisionWorkspace::new();
                workspace.restore(&document)?;
                debug!(snapshot_id = %id, "Comparing saved decision");
                workspace
            }
        };

        let outcome = compare_options(
            &workspace.decision,
            &workspace.option_a,
            &workspace.option_b,
        )?;

        info!(
            category = %outcome.category,
            verdict = ?outcome.verdict,
            "Options compared"
        );
        Ok(outcome)
    }
}
