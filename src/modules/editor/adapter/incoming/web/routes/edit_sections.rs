use actix_web::{put, web, HttpResponse, Responder};

use crate::editor::application::services::section_editor::{
    AboutPatch, ContactPatch, EducationPatch, StatsPatch,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Field-level edits of the singleton sections. The response carries the
/// section's validation state; about and education always validate clean.
#[put("/api/sections/{section}")]
pub async fn update_section_handler(
    path: web::Path<String>,
    body: web::Json<serde_json::Value>,
    data: web::Data<AppState>,
) -> impl Responder {
    let body = body.into_inner();
    let editor = &data.section_editor;

    let errors = match path.as_str() {
        "contact" => match serde_json::from_value::<ContactPatch>(body) {
            Ok(patch) => editor.update_contact(patch),
            Err(e) => return bad_patch(e),
        },
        "about" => match serde_json::from_value::<AboutPatch>(body) {
            Ok(patch) => editor.update_about(patch),
            Err(e) => return bad_patch(e),
        },
        "education" => match serde_json::from_value::<EducationPatch>(body) {
            Ok(patch) => editor.update_education(patch),
            Err(e) => return bad_patch(e),
        },
        "stats" => match serde_json::from_value::<StatsPatch>(body) {
            Ok(patch) => editor.update_stats(patch),
            Err(e) => return bad_patch(e),
        },
        other => {
            return ApiResponse::not_found(
                "UNKNOWN_SECTION",
                &format!("No section named '{other}'"),
            )
        }
    };

    ApiResponse::success(serde_json::json!({ "validation": errors }))
}

fn bad_patch(e: serde_json::Error) -> HttpResponse {
    ApiResponse::bad_request("INVALID_PATCH", &e.to_string())
}
