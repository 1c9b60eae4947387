use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;

use crate::content::application::ports::outgoing::{DocumentStore, DocumentStoreError};
use crate::content::domain::entities::PortfolioDocument;

/// Client side of the remote document contract:
///
/// - `GET  <base>/portfolio` returns the full document;
/// - `PUT  <base>/portfolio` replaces it wholesale.
///
/// Used when the editor runs against a separately deployed content server
/// instead of the local file. Every request carries an explicit timeout.
pub struct HttpDocumentStore {
    client: reqwest::Client,
    base_url: String,
}

impl HttpDocumentStore {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    fn document_url(&self) -> String {
        format!("{}/portfolio", self.base_url)
    }

    fn map_error(e: reqwest::Error) -> DocumentStoreError {
        if e.is_timeout() {
            DocumentStoreError::Timeout
        } else {
            DocumentStoreError::Unavailable(e.to_string())
        }
    }
}

#[async_trait]
impl DocumentStore for HttpDocumentStore {
    async fn load(&self) -> Result<Option<PortfolioDocument>, DocumentStoreError> {
        let response = self
            .client
            .get(self.document_url())
            .send()
            .await
            .map_err(Self::map_error)?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !response.status().is_success() {
            return Err(DocumentStoreError::Unavailable(format!(
                "GET {} returned {}",
                self.document_url(),
                response.status()
            )));
        }

        let body = response.text().await.map_err(Self::map_error)?;
        if body.trim().is_empty() {
            return Ok(None);
        }
        serde_json::from_str(&body)
            .map(Some)
            .map_err(|e| DocumentStoreError::Malformed(e.to_string()))
    }

    async fn replace(&self, document: &PortfolioDocument) -> Result<(), DocumentStoreError> {
        let response = self
            .client
            .put(self.document_url())
            .json(document)
            .send()
            .await
            .map_err(Self::map_error)?;

        if !response.status().is_success() {
            return Err(DocumentStoreError::Unavailable(format!(
                "PUT {} returned {}",
                self.document_url(),
                response.status()
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_trailing_slash_is_normalized() {
        let store =
            HttpDocumentStore::new("http://localhost:4000/api/", Duration::from_secs(5)).unwrap();
        assert_eq!(store.document_url(), "http://localhost:4000/api/portfolio");
    }
}
