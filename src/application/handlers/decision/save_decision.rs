//! SaveDecision - Command handler for persisting the current workspace.

use std::sync::Arc;

use tracing::info;

use crate::domain::decision::DecisionWorkspace;
use crate::domain::foundation::DomainError;
use crate::ports::{SavedSnapshotSummary, SnapshotStore};

/// Command to save the decision and both options.
#[derive(Debug, Clone)]
pub struct SaveDecisionCommand {
    pub workspace: DecisionWorkspace,
    /// Optional label; stores that name entries use it instead of the title.
    pub label: Option<String>,
}

/// Result of saving.
pub type SaveDecisionResult = SavedSnapshotSummary;

/// Handler for saving decisions.
pub struct SaveDecisionHandler {
    store: Arc<dyn SnapshotStore>,
}

impl SaveDecisionHandler {
    pub fn new(store: Arc<dyn SnapshotStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, cmd: SaveDecisionCommand) -> Result<SaveDecisionResult, DomainError> {
        let snapshot = cmd.workspace.snapshot();
        let summary = self.store.save(&snapshot, cmd.label.as_deref()).await?;

        info!(snapshot_id = %summary.id, title = %summary.title, "Decision saved");
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemorySnapshotStore;

    #[tokio::test]
    async fn saves_snapshot_of_workspace() {
        let store = Arc::new(InMemorySnapshotStore::new());
        let handler = SaveDecisionHandler::new(store.clone());

        let mut workspace = DecisionWorkspace::new();
        workspace.decision.title = "Take the offer".to_string();
        workspace.decision.category = "Career".to_string();

        let summary = handler
            .handle(SaveDecisionCommand {
                workspace,
                label: None,
            })
            .await
            .unwrap();

        assert_eq!(summary.title, "Take the offer");
        assert_eq!(summary.category, "Career");
        assert_eq!(store.len().await, 1);

        let stored = store.load(&summary.id).await.unwrap();
        assert_eq!(stored["version"], "0.1");
        assert_eq!(stored["decision"]["title"], "Take the offer");
    }

    #[tokio::test]
    async fn blank_title_lists_as_untitled() {
        let store = Arc::new(InMemorySnapshotStore::new());
        let handler = SaveDecisionHandler::new(store);

        let summary = handler
            .handle(SaveDecisionCommand {
                workspace: DecisionWorkspace::new(),
                label: Some("draft".to_string()),
            })
            .await
            .unwrap();

        assert_eq!(summary.title, "Untitled");
    }
}
