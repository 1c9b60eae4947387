use actix_web::http::header::{ContentDisposition, DispositionParam, DispositionType};
use actix_web::{get, web, HttpResponse, Responder};
use tracing::error;

use crate::editor::application::use_cases::export_content::EXPORT_FILE_NAME;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Download the current document as a pretty-printed JSON attachment.
#[get("/api/portfolio/export")]
pub async fn export_portfolio_handler(data: web::Data<AppState>) -> impl Responder {
    match data.export_content.execute() {
        Ok(json) => HttpResponse::Ok()
            .content_type("application/json")
            .insert_header(ContentDisposition {
                disposition: DispositionType::Attachment,
                parameters: vec![DispositionParam::Filename(EXPORT_FILE_NAME.to_string())],
            })
            .body(json),
        Err(e) => {
            error!("export serialization failed: {e}");
            ApiResponse::internal_error()
        }
    }
}
