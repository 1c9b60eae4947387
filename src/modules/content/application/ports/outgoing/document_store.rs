use async_trait::async_trait;

use crate::content::domain::entities::PortfolioDocument;

#[derive(Debug, Clone, thiserror::Error)]
pub enum DocumentStoreError {
    #[error("document store unavailable: {0}")]
    Unavailable(String),
    #[error("stored document is malformed: {0}")]
    Malformed(String),
    #[error("document store call timed out")]
    Timeout,
}

/// Remote tier of the persistence gateway. Whole-document only: there is no
/// partial-update operation anywhere in this contract, every write transmits
/// the entire document.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// `Ok(None)` means the store is reachable but holds no document (or an
    /// empty one); resolution falls through to the next tier.
    async fn load(&self) -> Result<Option<PortfolioDocument>, DocumentStoreError>;

    /// Replace the stored document wholesale.
    async fn replace(&self, document: &PortfolioDocument) -> Result<(), DocumentStoreError>;
}

/// Sink behind `POST /api/save`: overwrites the backing file with the given
/// JSON verbatim. No schema validation at this layer.
#[async_trait]
pub trait RawJsonSink: Send + Sync {
    async fn overwrite(&self, value: &serde_json::Value) -> Result<(), DocumentStoreError>;
}
