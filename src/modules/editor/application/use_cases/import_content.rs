use std::sync::Arc;

use crate::content::application::content_store::{ContentStore, SaveError};
use crate::content::domain::entities::PortfolioDocument;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ImportContentError {
    #[error("import file is not valid JSON: {0}")]
    InvalidJson(String),
    #[error(transparent)]
    Save(#[from] SaveError),
}

/// Import is one atomic user action: parse the supplied text, replace the
/// in-memory document, and immediately push it to the remote store. There is
/// no staged preview. A file that does not parse aborts before any state is
/// touched and no save is attempted.
pub struct ImportContentUseCase {
    store: Arc<ContentStore>,
}

impl ImportContentUseCase {
    pub fn new(store: Arc<ContentStore>) -> Self {
        Self { store }
    }

    pub async fn execute(&self, raw: &str) -> Result<(), ImportContentError> {
        let document: PortfolioDocument =
            serde_json::from_str(raw).map_err(|e| ImportContentError::InvalidJson(e.to_string()))?;
        self.store.replace(document);
        self.store.save().await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::application::ports::outgoing::DocumentStore;
    use crate::content::domain::defaults::baseline_document;
    use crate::editor::application::use_cases::export_content::ExportContentUseCase;
    use crate::tests::support::{content_store_with, MemoryLocalState, MockDocumentStore};

    #[tokio::test]
    async fn invalid_json_leaves_document_unchanged_and_never_saves() {
        let remote = Arc::new(MockDocumentStore::empty());
        let store = Arc::new(
            content_store_with(
                Arc::clone(&remote) as Arc<dyn DocumentStore>,
                Arc::new(MemoryLocalState::default()),
            )
            .await,
        );
        let before = store.current();

        let use_case = ImportContentUseCase::new(Arc::clone(&store));
        let result = use_case.execute("{not valid json").await;

        assert!(matches!(result, Err(ImportContentError::InvalidJson(_))));
        assert_eq!(store.current(), before);
        assert_eq!(remote.replace_calls(), 0);
    }

    #[tokio::test]
    async fn valid_import_replaces_and_saves_remotely() {
        let remote = Arc::new(MockDocumentStore::empty());
        let store = Arc::new(
            content_store_with(
                Arc::clone(&remote) as Arc<dyn DocumentStore>,
                Arc::new(MemoryLocalState::default()),
            )
            .await,
        );

        let mut imported = baseline_document();
        imported.contact.name = "Imported Owner".to_string();
        let raw = serde_json::to_string(&imported).unwrap();

        ImportContentUseCase::new(Arc::clone(&store))
            .execute(&raw)
            .await
            .unwrap();

        assert_eq!(store.current(), imported);
        assert_eq!(remote.replace_calls(), 1);
        assert_eq!(remote.stored().unwrap(), imported);
    }

    #[tokio::test]
    async fn export_then_import_round_trips_deep_equal() {
        let remote = Arc::new(MockDocumentStore::empty());
        let store = Arc::new(
            content_store_with(
                Arc::clone(&remote) as Arc<dyn DocumentStore>,
                Arc::new(MemoryLocalState::default()),
            )
            .await,
        );
        let original = store.current();

        let exported = ExportContentUseCase::new(Arc::clone(&store))
            .execute()
            .unwrap();
        ImportContentUseCase::new(Arc::clone(&store))
            .execute(&exported)
            .await
            .unwrap();

        assert_eq!(store.current(), original);
    }
}
