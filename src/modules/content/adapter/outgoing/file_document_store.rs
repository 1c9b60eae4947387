use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::{error, info};

use crate::content::application::ports::outgoing::{
    DocumentStore, DocumentStoreError, RawJsonSink,
};
use crate::content::domain::entities::PortfolioDocument;

/// Document store backed by a single JSON file on disk. This is the only
/// durable storage the system has: every save rewrites the whole file.
pub struct FileDocumentStore {
    path: PathBuf,
}

impl FileDocumentStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write via a sibling temp file and rename, so a crash mid-write never
    /// leaves a truncated document behind.
    async fn write_atomically(&self, contents: &str) -> Result<(), DocumentStoreError> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| DocumentStoreError::Unavailable(e.to_string()))?;
        }
        let tmp = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp, contents)
            .await
            .map_err(|e| DocumentStoreError::Unavailable(e.to_string()))?;
        tokio::fs::rename(&tmp, &self.path)
            .await
            .map_err(|e| DocumentStoreError::Unavailable(e.to_string()))?;
        Ok(())
    }
}

#[async_trait]
impl DocumentStore for FileDocumentStore {
    async fn load(&self) -> Result<Option<PortfolioDocument>, DocumentStoreError> {
        let raw = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(DocumentStoreError::Unavailable(e.to_string())),
        };
        if raw.trim().is_empty() {
            return Ok(None);
        }
        serde_json::from_str(&raw)
            .map(Some)
            .map_err(|e| DocumentStoreError::Malformed(e.to_string()))
    }

    async fn replace(&self, document: &PortfolioDocument) -> Result<(), DocumentStoreError> {
        let serialized = serde_json::to_string_pretty(document)
            .map_err(|e| DocumentStoreError::Malformed(e.to_string()))?;
        match self.write_atomically(&serialized).await {
            Ok(()) => {
                info!(path = %self.path.display(), "document file replaced");
                Ok(())
            }
            Err(e) => {
                error!(path = %self.path.display(), "document file write failed: {e}");
                Err(e)
            }
        }
    }
}

#[async_trait]
impl RawJsonSink for FileDocumentStore {
    async fn overwrite(&self, value: &serde_json::Value) -> Result<(), DocumentStoreError> {
        let serialized = serde_json::to_string_pretty(value)
            .map_err(|e| DocumentStoreError::Malformed(e.to_string()))?;
        match self.write_atomically(&serialized).await {
            Ok(()) => {
                info!(path = %self.path.display(), bytes = serialized.len(), "raw save written");
                Ok(())
            }
            Err(e) => {
                error!(path = %self.path.display(), "raw save failed: {e}");
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::domain::defaults::baseline_document;
    use crate::content::domain::entities::mint_entity_id;

    fn scratch_file(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("portfolio-backend-test-{}", mint_entity_id()))
            .join(name)
    }

    #[tokio::test]
    async fn missing_file_loads_as_none() {
        let store = FileDocumentStore::new(scratch_file("missing.json"));
        assert!(store.load().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn empty_file_loads_as_none() {
        let path = scratch_file("empty.json");
        tokio::fs::create_dir_all(path.parent().unwrap())
            .await
            .unwrap();
        tokio::fs::write(&path, "   \n").await.unwrap();
        let store = FileDocumentStore::new(path);
        assert!(store.load().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn replace_then_load_round_trips() {
        let store = FileDocumentStore::new(scratch_file("doc.json"));
        let mut doc = baseline_document();
        doc.contact.name = "Disk Owner".to_string();

        store.replace(&doc).await.unwrap();
        let loaded = store.load().await.unwrap().unwrap();
        assert_eq!(loaded, doc);
    }

    #[tokio::test]
    async fn malformed_file_is_reported_not_swallowed() {
        let path = scratch_file("garbage.json");
        tokio::fs::create_dir_all(path.parent().unwrap())
            .await
            .unwrap();
        tokio::fs::write(&path, "{not json").await.unwrap();
        let store = FileDocumentStore::new(path);
        assert!(matches!(
            store.load().await,
            Err(DocumentStoreError::Malformed(_))
        ));
    }

    #[tokio::test]
    async fn raw_overwrite_accepts_arbitrary_json() {
        let path = scratch_file("raw.json");
        let store = FileDocumentStore::new(path.clone());
        let value = serde_json::json!({"anything": ["goes", 1, null]});

        store.overwrite(&value).await.unwrap();
        let on_disk: serde_json::Value =
            serde_json::from_str(&tokio::fs::read_to_string(&path).await.unwrap()).unwrap();
        assert_eq!(on_disk, value);
    }
}
