use actix_web::{delete, patch, post, web, Responder};

use crate::editor::application::services::collection_editor::{EditError, ProjectPatch};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[post("/api/projects")]
pub async fn add_project_handler(data: web::Data<AppState>) -> impl Responder {
    let id = data.collection_editor.add_project();
    ApiResponse::created(serde_json::json!({ "id": id }))
}

/// Partial update; the response carries the entity's validation state so the
/// panel can render inline messages without a second round trip.
#[patch("/api/projects/{id}")]
pub async fn update_project_handler(
    path: web::Path<i64>,
    body: web::Json<ProjectPatch>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .collection_editor
        .update_project(path.into_inner(), body.into_inner())
    {
        Ok(errors) => ApiResponse::success(serde_json::json!({ "validation": errors })),
        Err(EditError::NotFound { .. }) => {
            ApiResponse::not_found("PROJECT_NOT_FOUND", "Project not found")
        }
    }
}

#[delete("/api/projects/{id}")]
pub async fn delete_project_handler(
    path: web::Path<i64>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.collection_editor.delete_project(path.into_inner()) {
        Ok(()) => ApiResponse::no_content(),
        Err(EditError::NotFound { .. }) => {
            ApiResponse::not_found("PROJECT_NOT_FOUND", "Project not found")
        }
    }
}
