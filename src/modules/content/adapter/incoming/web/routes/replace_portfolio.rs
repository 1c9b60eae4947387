use actix_web::{put, web, Responder};
use tracing::error;

use crate::content::application::content_store::SaveError;
use crate::content::domain::entities::PortfolioDocument;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Whole-document replace. The body must deserialize into the schema; it is
/// swapped in and pushed to the remote store in one action. There is no
/// partial-update endpoint; every write carries the entire document.
#[put("/api/portfolio")]
pub async fn replace_portfolio_handler(
    body: web::Json<PortfolioDocument>,
    data: web::Data<AppState>,
) -> impl Responder {
    data.content_store.replace(body.into_inner());

    match data.content_store.save().await {
        Ok(()) => ApiResponse::success(serde_json::json!({ "replaced": true })),
        Err(SaveError::SaveInProgress) => {
            ApiResponse::conflict("SAVE_IN_PROGRESS", "A save is already in progress")
        }
        Err(SaveError::Timeout(_)) => {
            ApiResponse::service_unavailable("SAVE_TIMEOUT", "The document store timed out")
        }
        Err(SaveError::Store(e)) => {
            error!("document replace failed: {e}");
            ApiResponse::internal_error()
        }
    }
}
