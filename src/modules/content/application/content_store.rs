use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};
use std::time::Duration;

use tokio::sync::watch;
use tracing::{info, warn};

use crate::content::application::ports::outgoing::{
    DocumentStore, DocumentStoreError, LocalStateStore,
};
use crate::content::domain::defaults::baseline_document;
use crate::content::domain::entities::PortfolioDocument;

/// Fixed key the document is mirrored under in the local state store.
pub const CONTENT_STATE_KEY: &str = "portfolio_content";

/// Which persistence tier mutations are mirrored to. Exactly one mode is
/// active per deployment; running both against the same data would let the
/// tiers diverge.
///
/// - `ServerFirst`: mutations stay in memory until an explicit save pushes
///   the document to the remote store. Nothing touches local state.
/// - `LocalFirst`: every mutation also mirrors the document into the local
///   state store; the explicit save still targets the remote store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PersistenceMode {
    ServerFirst,
    LocalFirst,
}

impl PersistenceMode {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "server-first" => Some(Self::ServerFirst),
            "local-first" => Some(Self::LocalFirst),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum SaveError {
    #[error("a save is already in progress")]
    SaveInProgress,
    #[error("save timed out after {0:?}")]
    Timeout(Duration),
    #[error(transparent)]
    Store(#[from] DocumentStoreError),
}

/// Holds the single authoritative document for the process, resolved once
/// from the layered sources, and coordinates mutation and persistence
/// propagation.
///
/// Consumers never mutate sub-objects in place: every mutation is a
/// whole-document replacement applied under the write lock, after which
/// watchers are notified through a revision counter.
pub struct ContentStore {
    document: RwLock<PortfolioDocument>,
    remote: Arc<dyn DocumentStore>,
    local: Arc<dyn LocalStateStore>,
    mode: PersistenceMode,
    save_timeout: Duration,
    save_in_flight: AtomicBool,
    revision: watch::Sender<u64>,
}

impl ContentStore {
    /// Resolve the initial document. Precedence, highest first:
    ///
    /// 1. local state under [`CONTENT_STATE_KEY`], if it parses; a corrupt
    ///    entry is discarded (key removed) and never surfaced to the user;
    /// 2. the remote document store, if it holds a document;
    /// 3. the built-in baseline.
    pub async fn resolve(
        remote: Arc<dyn DocumentStore>,
        local: Arc<dyn LocalStateStore>,
        mode: PersistenceMode,
        save_timeout: Duration,
    ) -> Self {
        let document = match Self::resolve_local(local.as_ref()) {
            Some(doc) => {
                info!("content resolved from local state");
                doc
            }
            None => match remote.load().await {
                Ok(Some(doc)) => {
                    info!("content resolved from document store");
                    doc
                }
                Ok(None) => {
                    info!("no persisted content found, using baseline document");
                    baseline_document()
                }
                Err(e) => {
                    warn!("document store unavailable during resolution: {e}");
                    baseline_document()
                }
            },
        };

        let (revision, _) = watch::channel(0);
        Self {
            document: RwLock::new(document),
            remote,
            local,
            mode,
            save_timeout,
            save_in_flight: AtomicBool::new(false),
            revision,
        }
    }

    /// Read the local tier. A value that fails to parse, or that does not
    /// deserialize into the schema, is treated as absent and removed. A
    /// parsed value whose `skills` field is not an array gets `skills`
    /// coerced to `[]`; the rest of the document is trusted as-is.
    fn resolve_local(local: &dyn LocalStateStore) -> Option<PortfolioDocument> {
        let raw = local.read(CONTENT_STATE_KEY)?;
        let mut value: serde_json::Value = match serde_json::from_str(&raw) {
            Ok(v) => v,
            Err(e) => {
                warn!("discarding unparseable local content state: {e}");
                local.remove(CONTENT_STATE_KEY);
                return None;
            }
        };
        if let Some(obj) = value.as_object_mut() {
            let skills_ok = obj.get("skills").map(|s| s.is_array()).unwrap_or(false);
            if !skills_ok {
                obj.insert("skills".to_string(), serde_json::Value::Array(Vec::new()));
            }
        }
        match serde_json::from_value(value) {
            Ok(doc) => Some(doc),
            Err(e) => {
                warn!("discarding local content state with unexpected shape: {e}");
                local.remove(CONTENT_STATE_KEY);
                None
            }
        }
    }

    /// Snapshot of the current document.
    pub fn current(&self) -> PortfolioDocument {
        self.document
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// Subscribe to change notifications. The value is a revision counter;
    /// subscribers re-read [`current`](Self::current) whenever it changes.
    /// It ticks on every mutation and again after a successful save.
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.revision.subscribe()
    }

    /// Apply a pure `document -> document` transformation as a whole-document
    /// replacement, notify subscribers, and mirror to local state when the
    /// deployment runs local-first. Returns the new document.
    pub fn apply<F>(&self, transform: F) -> PortfolioDocument
    where
        F: FnOnce(PortfolioDocument) -> PortfolioDocument,
    {
        let updated = {
            let mut guard = self
                .document
                .write()
                .unwrap_or_else(|poisoned| poisoned.into_inner());
            let next = transform(guard.clone());
            *guard = next.clone();
            next
        };

        if self.mode == PersistenceMode::LocalFirst {
            match serde_json::to_string(&updated) {
                Ok(serialized) => self.local.write(CONTENT_STATE_KEY, &serialized),
                Err(e) => warn!("failed to serialize document for local mirror: {e}"),
            }
        }

        self.notify();
        updated
    }

    /// Replace the document outright (import, PUT /api/portfolio).
    pub fn replace(&self, document: PortfolioDocument) {
        self.apply(move |_| document);
    }

    /// Push the current document to the remote store.
    ///
    /// A second save while one is outstanding is rejected with
    /// [`SaveError::SaveInProgress`] instead of racing it, and the remote
    /// call runs under an explicit timeout. On failure the in-memory
    /// document is untouched and no retry is attempted.
    pub async fn save(&self) -> Result<(), SaveError> {
        if self.save_in_flight.swap(true, Ordering::SeqCst) {
            return Err(SaveError::SaveInProgress);
        }

        let snapshot = self.current();
        let outcome = tokio::time::timeout(self.save_timeout, self.remote.replace(&snapshot)).await;
        self.save_in_flight.store(false, Ordering::SeqCst);

        match outcome {
            Err(_) => {
                warn!("save timed out after {:?}", self.save_timeout);
                Err(SaveError::Timeout(self.save_timeout))
            }
            Ok(Err(e)) => {
                warn!("save failed: {e}");
                Err(e.into())
            }
            Ok(Ok(())) => {
                info!("document saved to remote store");
                self.notify();
                Ok(())
            }
        }
    }

    fn notify(&self) {
        self.revision.send_modify(|rev| *rev += 1);
    }
}
