use actix_web::{post, web, HttpResponse, Responder};
use tracing::warn;

use crate::content::application::content_store::SaveError;
use crate::editor::application::use_cases::import_content::ImportContentError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Import a previously exported document. The body is the raw JSON text of
/// the export; a file that does not parse is rejected before any state is
/// touched.
#[post("/api/portfolio/import")]
pub async fn import_portfolio_handler(
    body: String,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.import_content.execute(&body).await {
        Ok(()) => ApiResponse::success(serde_json::json!({ "imported": true })),
        Err(e) => import_error_response(e),
    }
}

fn import_error_response(e: ImportContentError) -> HttpResponse {
    match e {
        ImportContentError::InvalidJson(detail) => {
            ApiResponse::bad_request("INVALID_IMPORT", &detail)
        }
        ImportContentError::Save(SaveError::SaveInProgress) => {
            ApiResponse::conflict("SAVE_IN_PROGRESS", "A save is already in progress")
        }
        ImportContentError::Save(SaveError::Timeout(elapsed)) => {
            ApiResponse::service_unavailable(
                "SAVE_TIMEOUT",
                &format!("Save did not complete within {}s", elapsed.as_secs()),
            )
        }
        ImportContentError::Save(SaveError::Store(e)) => {
            warn!("import saved locally but remote push failed: {e}");
            ApiResponse::internal_error()
        }
    }
}
