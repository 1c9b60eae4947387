pub mod encode_upload;
pub mod export_content;
pub mod import_content;
pub mod save_content;

pub use export_content::ExportContentUseCase;
pub use import_content::ImportContentUseCase;
pub use save_content::SaveContentUseCase;
