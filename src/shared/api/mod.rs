pub mod json_config;
pub mod response;

pub use json_config::{custom_json_config, MAX_JSON_BODY_BYTES};
pub use response::{ApiError, ApiResponse};
