use std::sync::Arc;

use crate::content::application::content_store::ContentStore;

/// Suggested filename for the download the export is served as.
pub const EXPORT_FILE_NAME: &str = "portfolio-content.json";

/// Serialize the current document as pretty-printed JSON. Pure read: no
/// network, no mutation, no persistence.
pub struct ExportContentUseCase {
    store: Arc<ContentStore>,
}

impl ExportContentUseCase {
    pub fn new(store: Arc<ContentStore>) -> Self {
        Self { store }
    }

    pub fn execute(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.store.current())
    }
}
