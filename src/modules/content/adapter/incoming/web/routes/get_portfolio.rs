use actix_web::{get, web, HttpResponse, Responder};

use crate::AppState;

/// Read side of the document contract. Serves the resolved in-memory
/// document; presentation consumers re-fetch on change notification.
#[get("/api/portfolio")]
pub async fn get_portfolio_handler(data: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(data.content_store.current())
}
