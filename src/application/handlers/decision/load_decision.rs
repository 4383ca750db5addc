//! LoadDecision - Query handler restoring a saved decision into a fresh workspace.

use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, info};

use crate::domain::decision::DecisionWorkspace;
use crate::domain::foundation::{DomainError, ErrorCode, SnapshotId};
use crate::domain::snapshot::SnapshotShape;
use crate::ports::SnapshotStore;

/// Query to load one saved decision.
#[derive(Debug, Clone)]
pub struct LoadDecisionQuery {
    /// Raw identifier as typed by the user.
    pub id: String,
}

/// A restored workspace and the layout it was read from.
#[derive(Debug, Clone)]
pub struct LoadDecisionResult {
    pub id: SnapshotId,
    /// The stored document as read.
    pub document: Value,
    pub workspace: DecisionWorkspace,
    pub shape: SnapshotShape,
}

/// Handler for loading decisions.
pub struct LoadDecisionHandler {
    store: Arc<dyn SnapshotStore>,
}

impl LoadDecisionHandler {
    pub fn new(store: Arc<dyn SnapshotStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, query: LoadDecisionQuery) -> Result<LoadDecisionResult, DomainError> {
        let id = parse_id(&query.id)?;
        let document = self.store.load(&id).await?;

        let mut workspace = DecisionWorkspace::new();
        let shape = workspace.restore(&document)?;

        if shape == SnapshotShape::Legacy {
            debug!(snapshot_id = %id, "Restored legacy snapshot layout");
        }
        info!(snapshot_id = %id, "Decision loaded");

        Ok(LoadDecisionResult {
            id,
            document,
            workspace,
            shape,
        })
    }
}

/// Parses a user-supplied identifier into a [`SnapshotId`].
pub(crate) fn parse_id(raw: &str) -> Result<SnapshotId, DomainError> {
    SnapshotId::parse(raw).map_err(|e| {
        DomainError::new(ErrorCode::InvalidIdentifier, e.to_string()).with_detail("id", raw)
    })
}
