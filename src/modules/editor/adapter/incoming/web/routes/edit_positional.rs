use actix_web::{delete, patch, post, web, HttpResponse, Responder};

use crate::editor::application::services::collection_editor::{
    ClientPatch, DatedItemPatch, EditError, HobbyPatch, SkillPatch, TestimonialPatch,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

// The positional collections share one route family; the path segment names
// the collection. These are the document collections addressed purely by
// array index.

fn unknown_collection(name: &str) -> HttpResponse {
    ApiResponse::not_found(
        "UNKNOWN_COLLECTION",
        &format!("No positional collection named '{name}'"),
    )
}

fn bad_patch(e: serde_json::Error) -> HttpResponse {
    ApiResponse::bad_request("INVALID_PATCH", &e.to_string())
}

fn edit_result(result: Result<crate::content::domain::validation::ErrorMap, EditError>) -> HttpResponse {
    match result {
        Ok(errors) => ApiResponse::success(serde_json::json!({ "validation": errors })),
        Err(EditError::NotFound { entity, identity }) => ApiResponse::not_found(
            "ITEM_NOT_FOUND",
            &format!("{entity} {identity} not found"),
        ),
    }
}

#[post("/api/collections/{collection}")]
pub async fn add_collection_item_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let editor = &data.collection_editor;
    let index = match path.as_str() {
        "skills" => editor.add_skill(),
        "clients" => editor.add_client(),
        "testimonials" => editor.add_testimonial(),
        "certifications" => editor.add_certification(),
        "activities" => editor.add_activity(),
        "hobbies" => editor.add_hobby(),
        other => return unknown_collection(other),
    };
    ApiResponse::created(serde_json::json!({ "index": index }))
}

#[patch("/api/collections/{collection}/{index}")]
pub async fn update_collection_item_handler(
    path: web::Path<(String, usize)>,
    body: web::Json<serde_json::Value>,
    data: web::Data<AppState>,
) -> impl Responder {
    let (collection, index) = path.into_inner();
    let body = body.into_inner();
    let editor = &data.collection_editor;

    match collection.as_str() {
        "skills" => match serde_json::from_value::<SkillPatch>(body) {
            Ok(patch) => edit_result(editor.update_skill(index, patch)),
            Err(e) => bad_patch(e),
        },
        "clients" => match serde_json::from_value::<ClientPatch>(body) {
            Ok(patch) => edit_result(editor.update_client(index, patch)),
            Err(e) => bad_patch(e),
        },
        "testimonials" => match serde_json::from_value::<TestimonialPatch>(body) {
            Ok(patch) => edit_result(editor.update_testimonial(index, patch)),
            Err(e) => bad_patch(e),
        },
        "certifications" => match serde_json::from_value::<DatedItemPatch>(body) {
            Ok(patch) => edit_result(editor.update_certification(index, patch)),
            Err(e) => bad_patch(e),
        },
        "activities" => match serde_json::from_value::<DatedItemPatch>(body) {
            Ok(patch) => edit_result(editor.update_activity(index, patch)),
            Err(e) => bad_patch(e),
        },
        "hobbies" => match serde_json::from_value::<HobbyPatch>(body) {
            Ok(patch) => edit_result(editor.update_hobby(index, patch)),
            Err(e) => bad_patch(e),
        },
        other => unknown_collection(other),
    }
}

#[delete("/api/collections/{collection}/{index}")]
pub async fn delete_collection_item_handler(
    path: web::Path<(String, usize)>,
    data: web::Data<AppState>,
) -> impl Responder {
    let (collection, index) = path.into_inner();
    let editor = &data.collection_editor;

    let result = match collection.as_str() {
        "skills" => editor.delete_skill(index),
        "clients" => editor.delete_client(index),
        "testimonials" => editor.delete_testimonial(index),
        "certifications" => editor.delete_certification(index),
        "activities" => editor.delete_activity(index),
        "hobbies" => editor.delete_hobby(index),
        other => return unknown_collection(other),
    };

    match result {
        Ok(()) => ApiResponse::no_content(),
        Err(EditError::NotFound { entity, identity }) => ApiResponse::not_found(
            "ITEM_NOT_FOUND",
            &format!("{entity} {identity} not found"),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::test_app_state;
    use actix_web::{test, App};

    #[actix_web::test]
    async fn skill_add_update_delete_by_index() {
        let app_ctx = test_app_state().await;
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(app_ctx.state.clone()))
                .service(add_collection_item_handler)
                .service(update_collection_item_handler)
                .service(delete_collection_item_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/collections/skills")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 201);
        let body: serde_json::Value = test::read_body_json(resp).await;
        let index = body["data"]["index"].as_u64().unwrap();

        let req = test::TestRequest::patch()
            .uri(&format!("/api/collections/skills/{index}"))
            .set_json(serde_json::json!({ "category": "Tooling", "items": ["Figma"] }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["validation"], serde_json::json!({}));

        let req = test::TestRequest::delete()
            .uri(&format!("/api/collections/skills/{index}"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 204);
    }

    #[actix_web::test]
    async fn unknown_collection_is_404() {
        let app_ctx = test_app_state().await;
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(app_ctx.state.clone()))
                .service(add_collection_item_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/collections/widgets")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 404);
    }

    #[actix_web::test]
    async fn out_of_range_index_is_404() {
        let app_ctx = test_app_state().await;
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(app_ctx.state.clone()))
                .service(delete_collection_item_handler),
        )
        .await;

        let req = test::TestRequest::delete()
            .uri("/api/collections/testimonials/42")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 404);
    }
}
