pub mod edit_experience;
pub mod edit_positional;
pub mod edit_projects;
pub mod edit_sections;
pub mod encode_upload;
pub mod export_portfolio;
pub mod get_validation;
pub mod import_portfolio;
pub mod save_portfolio;

pub use edit_experience::{
    add_experience_handler, delete_experience_handler, update_experience_handler,
};
pub use edit_positional::{
    add_collection_item_handler, delete_collection_item_handler, update_collection_item_handler,
};
pub use edit_projects::{add_project_handler, delete_project_handler, update_project_handler};
pub use edit_sections::update_section_handler;
pub use encode_upload::encode_upload_handler;
pub use export_portfolio::export_portfolio_handler;
pub use get_validation::get_validation_handler;
pub use import_portfolio::import_portfolio_handler;
pub use save_portfolio::save_portfolio_handler;
