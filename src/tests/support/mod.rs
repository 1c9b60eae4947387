use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;

use crate::content::application::content_store::{ContentStore, PersistenceMode};
use crate::content::application::ports::outgoing::{
    DocumentStore, DocumentStoreError, LocalStateStore, RawJsonSink,
};
use crate::content::domain::entities::PortfolioDocument;
use crate::editor::application::services::{CollectionEditor, SectionEditor, ValidationRegistry};
use crate::editor::application::use_cases::{
    ExportContentUseCase, ImportContentUseCase, SaveContentUseCase,
};
use crate::AppState;

/// In-memory stand-in for the remote document store. Counts every `replace`
/// call, including ones that fail.
pub struct MockDocumentStore {
    document: Mutex<Option<PortfolioDocument>>,
    fail: bool,
    delay: Option<Duration>,
    replace_calls: AtomicUsize,
}

impl MockDocumentStore {
    pub fn empty() -> Self {
        Self {
            document: Mutex::new(None),
            fail: false,
            delay: None,
            replace_calls: AtomicUsize::new(0),
        }
    }

    pub fn with_document(document: PortfolioDocument) -> Self {
        Self {
            document: Mutex::new(Some(document)),
            ..Self::empty()
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::empty()
        }
    }

    pub fn with_delay(delay: Duration) -> Self {
        Self {
            delay: Some(delay),
            ..Self::empty()
        }
    }

    pub fn replace_calls(&self) -> usize {
        self.replace_calls.load(Ordering::SeqCst)
    }

    pub fn stored(&self) -> Option<PortfolioDocument> {
        self.document.lock().unwrap().clone()
    }
}

#[async_trait]
impl DocumentStore for MockDocumentStore {
    async fn load(&self) -> Result<Option<PortfolioDocument>, DocumentStoreError> {
        if self.fail {
            return Err(DocumentStoreError::Unavailable("mock failure".to_string()));
        }
        Ok(self.document.lock().unwrap().clone())
    }

    async fn replace(&self, document: &PortfolioDocument) -> Result<(), DocumentStoreError> {
        self.replace_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        if self.fail {
            return Err(DocumentStoreError::Unavailable("mock failure".to_string()));
        }
        *self.document.lock().unwrap() = Some(document.clone());
        Ok(())
    }
}

#[derive(Default)]
pub struct MemoryLocalState {
    entries: Mutex<HashMap<String, String>>,
}

impl LocalStateStore for MemoryLocalState {
    fn read(&self, key: &str) -> Option<String> {
        self.entries.lock().unwrap().get(key).cloned()
    }

    fn write(&self, key: &str, value: &str) {
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.entries.lock().unwrap().remove(key);
    }
}

#[derive(Default)]
pub struct MockRawSink {
    written: Mutex<Option<serde_json::Value>>,
}

impl MockRawSink {
    pub fn last_written(&self) -> Option<serde_json::Value> {
        self.written.lock().unwrap().clone()
    }
}

#[async_trait]
impl RawJsonSink for MockRawSink {
    async fn overwrite(&self, value: &serde_json::Value) -> Result<(), DocumentStoreError> {
        *self.written.lock().unwrap() = Some(value.clone());
        Ok(())
    }
}

/// Server-first store over the given tiers with a generous save timeout.
pub async fn content_store_with(
    remote: Arc<dyn DocumentStore>,
    local: Arc<dyn LocalStateStore>,
) -> ContentStore {
    ContentStore::resolve(remote, local, PersistenceMode::ServerFirst, Duration::from_secs(5)).await
}

pub async fn editor_fixture() -> (Arc<ContentStore>, Arc<ValidationRegistry>, CollectionEditor) {
    let store = Arc::new(
        content_store_with(
            Arc::new(MockDocumentStore::empty()),
            Arc::new(MemoryLocalState::default()),
        )
        .await,
    );
    let registry = Arc::new(ValidationRegistry::default());
    let editor = CollectionEditor::new(Arc::clone(&store), Arc::clone(&registry));
    (store, registry, editor)
}

pub async fn section_fixture() -> (Arc<ContentStore>, Arc<ValidationRegistry>, SectionEditor) {
    let store = Arc::new(
        content_store_with(
            Arc::new(MockDocumentStore::empty()),
            Arc::new(MemoryLocalState::default()),
        )
        .await,
    );
    let registry = Arc::new(ValidationRegistry::default());
    let editor = SectionEditor::new(Arc::clone(&store), Arc::clone(&registry));
    (store, registry, editor)
}

/// Fully wired [`AppState`] over mocks, for handler tests. Keeps direct
/// handles on the mocks so assertions can inspect what reached them.
pub struct TestApp {
    pub state: AppState,
    pub remote: Arc<MockDocumentStore>,
    pub raw_sink: Arc<MockRawSink>,
}

pub async fn test_app_state() -> TestApp {
    let remote = Arc::new(MockDocumentStore::empty());
    let raw_sink = Arc::new(MockRawSink::default());
    let content_store = Arc::new(
        content_store_with(
            Arc::clone(&remote) as Arc<dyn DocumentStore>,
            Arc::new(MemoryLocalState::default()),
        )
        .await,
    );

    let registry = Arc::new(ValidationRegistry::default());
    let state = AppState {
        collection_editor: Arc::new(CollectionEditor::new(
            Arc::clone(&content_store),
            Arc::clone(&registry),
        )),
        section_editor: Arc::new(SectionEditor::new(
            Arc::clone(&content_store),
            Arc::clone(&registry),
        )),
        save_content: Arc::new(SaveContentUseCase::new(
            Arc::clone(&content_store),
            Arc::clone(&registry),
        )),
        import_content: Arc::new(ImportContentUseCase::new(Arc::clone(&content_store))),
        export_content: Arc::new(ExportContentUseCase::new(Arc::clone(&content_store))),
        content_store,
        document_store: Arc::clone(&remote) as Arc<dyn DocumentStore>,
        raw_sink: Arc::clone(&raw_sink) as Arc<dyn RawJsonSink>,
        registry,
    };

    TestApp {
        state,
        remote,
        raw_sink,
    }
}
