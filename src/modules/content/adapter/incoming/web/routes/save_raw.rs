use actix_web::{post, web, HttpResponse, Responder};
use tracing::error;

use crate::AppState;

/// File-backed sink for the alternate deployment mode: overwrites the
/// backing JSON file with the request body verbatim. No schema validation at
/// this layer; bodies up to the configured 50 MB limit are accepted so
/// documents with embedded data-URL images fit.
#[post("/api/save")]
pub async fn save_raw_handler(
    body: web::Json<serde_json::Value>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.raw_sink.overwrite(&body).await {
        Ok(()) => HttpResponse::Ok().json(serde_json::json!({
            "success": true,
            "message": "Content saved successfully"
        })),
        Err(e) => {
            error!("raw save failed: {e}");
            HttpResponse::InternalServerError().json(serde_json::json!({
                "success": false,
                "message": e.to_string()
            }))
        }
    }
}
