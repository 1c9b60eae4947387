use actix_web::{get, web, HttpResponse, Responder};
use serde::Serialize;

use crate::AppState;

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
}

#[derive(Serialize)]
struct ReadinessResponse {
    status: &'static str,
    document_store: &'static str,
}

/// LIVENESS PROBE
/// - No I/O
/// - No store access
#[get("/health")]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse { status: "ok" })
}

/// READINESS PROBE
/// - Checks that the document store answers
#[get("/ready")]
pub async fn readiness(data: web::Data<AppState>) -> impl Responder {
    let store_status = match data.document_store.load().await {
        Ok(_) => "ok",
        Err(_) => "unhealthy",
    };

    if store_status == "ok" {
        HttpResponse::Ok().json(ReadinessResponse {
            status: "ok",
            document_store: store_status,
        })
    } else {
        HttpResponse::ServiceUnavailable().json(ReadinessResponse {
            status: "unhealthy",
            document_store: store_status,
        })
    }
}
