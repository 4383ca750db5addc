//! ImportDecision - Command handler storing an external snapshot document.
//!
//! The document is restored into a fresh workspace first so that only
//! well-formed decisions enter the store, then saved in the canonical layout.

use std::sync::Arc;

use serde_json::Value;
use tracing::info;

use crate::domain::decision::DecisionWorkspace;
use crate::domain::foundation::DomainError;
use crate::domain::snapshot::SnapshotShape;
use crate::ports::{SavedSnapshotSummary, SnapshotStore};

/// Command to import a snapshot document.
#[derive(Debug, Clone)]
pub struct ImportDecisionCommand {
    pub document: Value,
    pub label: Option<String>,
}

/// Result of import.
#[derive(Debug, Clone)]
pub struct ImportDecisionResult {
    pub summary: SavedSnapshotSummary,
    /// Layout the document was read from.
    pub source_shape: SnapshotShape,
}

/// Handler for importing decisions.
pub struct ImportDecisionHandler {
    store: Arc<dyn SnapshotStore>,
}

impl ImportDecisionHandler {
    pub fn new(store: Arc<dyn SnapshotStore>) -> Self {
        Self { store }
    }

    pub async fn handle(
        &self,
        cmd: ImportDecisionCommand,
    ) -> Result<ImportDecisionResult, DomainError> {
        let mut workspace = DecisionWorkspace::new();
        let source_shape = workspace.restore(&cmd.document)?;

        let summary = self
            .store
            .save(&workspace.snapshot(), cmd.label.as_deref())
            .await?;

        info!(
            snapshot_id = %summary.id,
            shape = ?source_shape,
            "Decision imported"
        );
        Ok(ImportDecisionResult {
            summary,
            source_shape,
        })
    }
}
