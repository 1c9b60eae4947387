pub mod document_store;
pub mod local_state;

pub use document_store::{DocumentStore, DocumentStoreError, RawJsonSink};
pub use local_state::LocalStateStore;
