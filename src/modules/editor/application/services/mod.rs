pub mod collection_editor;
pub mod section_editor;
pub mod validation_registry;

pub use collection_editor::CollectionEditor;
pub use section_editor::SectionEditor;
pub use validation_registry::ValidationRegistry;
