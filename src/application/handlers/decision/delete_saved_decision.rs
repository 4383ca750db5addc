//! DeleteSavedDecision - Command handler for removing a saved decision.

use std::sync::Arc;

use tracing::info;

use super::load_decision::parse_id;
use crate::domain::foundation::{DomainError, SnapshotId};
use crate::ports::SnapshotStore;

/// Command to delete one saved decision.
#[derive(Debug, Clone)]
pub struct DeleteSavedDecisionCommand {
    pub id: String,
}

/// Result of deletion.
#[derive(Debug, Clone)]
pub struct DeleteSavedDecisionResult {
    pub deleted_id: SnapshotId,
}

/// Handler for deleting saved decisions.
pub struct DeleteSavedDecisionHandler {
    store: Arc<dyn SnapshotStore>,
}

impl DeleteSavedDecisionHandler {
    pub fn new(store: Arc<dyn SnapshotStore>) -> Self {
        Self { store }
    }

    pub async fn handle(
        &self,
        cmd: DeleteSavedDecisionCommand,
    ) -> Result<DeleteSavedDecisionResult, DomainError> {
        let id = parse_id(&cmd.id)?;
        self.store.delete(&id).await?;

        info!(snapshot_id = %id, "Saved decision deleted");
        Ok(DeleteSavedDecisionResult { deleted_id: id })
    }
}
