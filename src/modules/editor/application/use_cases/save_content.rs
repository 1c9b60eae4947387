use std::sync::Arc;

use crate::content::application::content_store::{ContentStore, SaveError};
use crate::editor::application::services::validation_registry::ValidationRegistry;

#[derive(Debug, Clone, thiserror::Error)]
pub enum SaveContentError {
    #[error("validation errors outstanding for: {}", .0.join(", "))]
    ValidationOutstanding(Vec<String>),
    #[error(transparent)]
    Save(#[from] SaveError),
}

/// The explicit "Save" action. Remote persistence never happens as a side
/// effect of editing; this use case is the only path that pushes the
/// document to the remote store.
///
/// Save is hard-blocked while any entity still fails validation; an invalid
/// published document has no recovery path for a single-user system.
pub struct SaveContentUseCase {
    store: Arc<ContentStore>,
    registry: Arc<ValidationRegistry>,
}

impl SaveContentUseCase {
    pub fn new(store: Arc<ContentStore>, registry: Arc<ValidationRegistry>) -> Self {
        Self { store, registry }
    }

    pub async fn execute(&self) -> Result<(), SaveContentError> {
        let failing = self.registry.failing_keys();
        if !failing.is_empty() {
            return Err(SaveContentError::ValidationOutstanding(failing));
        }
        self.store.save().await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::application::ports::outgoing::DocumentStore;
    use crate::content::domain::validation::ErrorMap;
    use crate::tests::support::{content_store_with, MemoryLocalState, MockDocumentStore};

    #[tokio::test]
    async fn clean_registry_saves_to_remote() {
        let remote = Arc::new(MockDocumentStore::empty());
        let store = Arc::new(
            content_store_with(
                Arc::clone(&remote) as Arc<dyn DocumentStore>,
                Arc::new(MemoryLocalState::default()),
            )
            .await,
        );
        let registry = Arc::new(ValidationRegistry::default());

        let use_case = SaveContentUseCase::new(store, registry);
        use_case.execute().await.unwrap();
        assert_eq!(remote.replace_calls(), 1);
    }

    #[tokio::test]
    async fn outstanding_validation_blocks_the_save() {
        let remote = Arc::new(MockDocumentStore::empty());
        let store = Arc::new(
            content_store_with(
                Arc::clone(&remote) as Arc<dyn DocumentStore>,
                Arc::new(MemoryLocalState::default()),
            )
            .await,
        );
        let registry = Arc::new(ValidationRegistry::default());
        let mut errors = ErrorMap::new();
        errors.insert("title".to_string(), "This field is required".to_string());
        registry.record("project:7".to_string(), errors);

        let use_case = SaveContentUseCase::new(store, registry);
        let result = use_case.execute().await;

        match result {
            Err(SaveContentError::ValidationOutstanding(keys)) => {
                assert_eq!(keys, vec!["project:7".to_string()]);
            }
            other => panic!("expected ValidationOutstanding, got {:?}", other),
        }
        assert_eq!(remote.replace_calls(), 0);
    }

    #[tokio::test]
    async fn remote_failure_is_surfaced_not_retried() {
        let remote = Arc::new(MockDocumentStore::failing());
        let store = Arc::new(
            content_store_with(
                Arc::clone(&remote) as Arc<dyn DocumentStore>,
                Arc::new(MemoryLocalState::default()),
            )
            .await,
        );
        let use_case = SaveContentUseCase::new(store, Arc::new(ValidationRegistry::default()));

        assert!(matches!(
            use_case.execute().await,
            Err(SaveContentError::Save(SaveError::Store(_)))
        ));
        assert_eq!(remote.replace_calls(), 1);
    }
}
