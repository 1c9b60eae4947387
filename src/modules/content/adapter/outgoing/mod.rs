pub mod file_document_store;
pub mod file_local_state;
pub mod http_document_store;

pub use file_document_store::FileDocumentStore;
pub use file_local_state::FileLocalStateStore;
pub use http_document_store::HttpDocumentStore;
