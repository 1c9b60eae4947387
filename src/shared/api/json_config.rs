use crate::shared::api::ApiResponse;
use actix_web::web::JsonConfig;

/// Raw saves may carry documents with embedded data-URL images, so the JSON
/// body limit is far above actix's default.
pub const MAX_JSON_BODY_BYTES: usize = 50 * 1024 * 1024;

pub fn custom_json_config() -> JsonConfig {
    JsonConfig::default()
        .limit(MAX_JSON_BODY_BYTES)
        .error_handler(|err, _req| {
            let message = err.to_string();
            actix_web::error::InternalError::from_response(
                err,
                ApiResponse::bad_request("VALIDATION_ERROR", &message),
            )
            .into()
        })
}
