use actix_web::{post, web, HttpRequest, Responder};

use crate::editor::application::use_cases::encode_upload::encode_data_url;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Encode an uploaded file body as a data URL. The client stores the result
/// into an image or resume field through the ordinary field-update routes.
#[post("/api/uploads/encode")]
pub async fn encode_upload_handler(
    req: HttpRequest,
    body: web::Bytes,
    _data: web::Data<AppState>,
) -> impl Responder {
    let mime = req
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    ApiResponse::success(serde_json::json!({
        "dataUrl": encode_data_url(mime, &body)
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::test_app_state;
    use actix_web::{test, App};

    #[actix_web::test]
    async fn encodes_body_with_declared_mime() {
        let app_ctx = test_app_state().await;
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(app_ctx.state.clone()))
                .service(encode_upload_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/uploads/encode")
            .insert_header(("content-type", "image/png"))
            .set_payload(&b"\x89PNG"[..])
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);

        let body: serde_json::Value = test::read_body_json(resp).await;
        let data_url = body["data"]["dataUrl"].as_str().unwrap();
        assert!(data_url.starts_with("data:image/png;base64,"));
    }
}
