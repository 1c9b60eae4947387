use actix_web::{get, web, Responder};

use crate::shared::api::ApiResponse;
use crate::AppState;

/// Snapshot of every entity that currently fails validation, keyed by
/// "project:{id}", "experience:{id}", "skill:{index}" or "section:{name}".
#[get("/api/validation")]
pub async fn get_validation_handler(data: web::Data<AppState>) -> impl Responder {
    ApiResponse::success(data.registry.snapshot())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::domain::validation::ErrorMap;
    use crate::tests::support::test_app_state;
    use actix_web::{test, App};

    #[actix_web::test]
    async fn snapshot_reflects_recorded_errors() {
        let app_ctx = test_app_state().await;
        let mut errors = ErrorMap::new();
        errors.insert("email".to_string(), "Invalid email address".to_string());
        app_ctx
            .state
            .registry
            .record("section:contact".to_string(), errors);

        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(app_ctx.state.clone()))
                .service(get_validation_handler),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/validation").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(
            body["data"]["section:contact"]["email"],
            "Invalid email address"
        );
    }
}
