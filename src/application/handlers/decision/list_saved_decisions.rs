//! ListSavedDecisions - Query handler for the saved decision listing.

use std::sync::Arc;

use crate::domain::foundation::DomainError;
use crate::ports::{SavedSnapshotSummary, SnapshotStore};

/// Query for all saved decisions, newest first.
#[derive(Debug, Clone, Default)]
pub struct ListSavedDecisionsQuery;

/// Handler for listing saved decisions.
pub struct ListSavedDecisionsHandler {
    store: Arc<dyn SnapshotStore>,
}

impl ListSavedDecisionsHandler {
    pub fn new(store: Arc<dyn SnapshotStore>) -> Self {
        Self { store }
    }

    pub async fn handle(
        &self,
        _query: ListSavedDecisionsQuery,
    ) -> Result<Vec<SavedSnapshotSummary>, DomainError> {
        Ok(self.store.list().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemorySnapshotStore;
    use crate::domain::decision::DecisionWorkspace;

    #[tokio::test]
    async fn empty_store_lists_nothing() {
        let handler = ListSavedDecisionsHandler::new(Arc::new(InMemorySnapshotStore::new()));
        assert!(handler.handle(ListSavedDecisionsQuery).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn lists_every_saved_decision() {
        let store = Arc::new(InMemorySnapshotStore::new());
        for title in ["One", "Two", "Three"] {
            let mut ws = DecisionWorkspace::new();
            ws.decision.title = title.to_string();
            store.save(&ws.snapshot(), None).await.unwrap();
        }
        let handler = ListSavedDecisionsHandler::new(store);

        let listed = handler.handle(ListSavedDecisionsQuery).await.unwrap();

        assert_eq!(listed.len(), 3);
        assert_eq!(listed[0].title, "Three");
    }
}
