use actix_web::{http::StatusCode, post, web, HttpResponse, Responder};
use tracing::warn;

use crate::content::application::content_store::SaveError;
use crate::editor::application::use_cases::save_content::SaveContentError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// The explicit "Save" action: pushes the current document to the remote
/// store. Blocked while any entity still fails validation.
#[post("/api/portfolio/save")]
pub async fn save_portfolio_handler(data: web::Data<AppState>) -> impl Responder {
    match data.save_content.execute().await {
        Ok(()) => ApiResponse::success(serde_json::json!({ "saved": true })),
        Err(e) => save_error_response(e),
    }
}

fn save_error_response(e: SaveContentError) -> HttpResponse {
    match e {
        SaveContentError::ValidationOutstanding(keys) => {
            warn!("save blocked by outstanding validation: {}", keys.join(", "));
            ApiResponse::error(
                StatusCode::UNPROCESSABLE_ENTITY,
                "VALIDATION_OUTSTANDING",
                &format!("Fix validation errors before saving: {}", keys.join(", ")),
            )
        }
        SaveContentError::Save(SaveError::SaveInProgress) => {
            ApiResponse::conflict("SAVE_IN_PROGRESS", "A save is already in progress")
        }
        SaveContentError::Save(SaveError::Timeout(elapsed)) => ApiResponse::service_unavailable(
            "SAVE_TIMEOUT",
            &format!("Save did not complete within {}s", elapsed.as_secs()),
        ),
        SaveContentError::Save(SaveError::Store(e)) => {
            warn!("save failed at the store: {e}");
            ApiResponse::internal_error()
        }
    }
}
