use actix_web::{delete, patch, post, web, Responder};

use crate::editor::application::services::collection_editor::{EditError, ExperiencePatch};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[post("/api/experience")]
pub async fn add_experience_handler(data: web::Data<AppState>) -> impl Responder {
    let id = data.collection_editor.add_experience();
    ApiResponse::created(serde_json::json!({ "id": id }))
}

#[patch("/api/experience/{id}")]
pub async fn update_experience_handler(
    path: web::Path<i64>,
    body: web::Json<ExperiencePatch>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .collection_editor
        .update_experience(path.into_inner(), body.into_inner())
    {
        Ok(errors) => ApiResponse::success(serde_json::json!({ "validation": errors })),
        Err(EditError::NotFound { .. }) => {
            ApiResponse::not_found("EXPERIENCE_NOT_FOUND", "Experience entry not found")
        }
    }
}

#[delete("/api/experience/{id}")]
pub async fn delete_experience_handler(
    path: web::Path<i64>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.collection_editor.delete_experience(path.into_inner()) {
        Ok(()) => ApiResponse::no_content(),
        Err(EditError::NotFound { .. }) => {
            ApiResponse::not_found("EXPERIENCE_NOT_FOUND", "Experience entry not found")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::test_app_state;
    use actix_web::{test, App};

    #[actix_web::test]
    async fn experience_add_then_complete_update_is_valid() {
        let app_ctx = test_app_state().await;
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(app_ctx.state.clone()))
                .service(add_experience_handler)
                .service(update_experience_handler),
        )
        .await;

        let req = test::TestRequest::post().uri("/api/experience").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 201);
        let body: serde_json::Value = test::read_body_json(resp).await;
        let id = body["data"]["id"].as_i64().unwrap();

        let req = test::TestRequest::patch()
            .uri(&format!("/api/experience/{id}"))
            .set_json(serde_json::json!({
                "title": "Design Lead",
                "company": "Acme",
                "duration": "2025 - Present",
                "current": true
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["validation"], serde_json::json!({}));
        assert!(app_ctx.state.registry.is_clean());
    }
}
