use actix_web::{get, post, web, HttpResponse};
use uuid::Uuid;

use crate::{
    app_state::AppState,
    errors::AppError,
    models::dto::{
        request::GenerateDraftRequest,
        response::{DraftResponse, QuestionsResponse, DRAFT_FILE_NAME},
    },
    services::http_helpers::{success_json, text_attachment},
};

#[post("/api/sessions/{id}/questions")]
pub async fn generate_questions(
    state: web::Data<AppState>,
    id: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let shared = state.session(&id).await?;
    let mut session = shared.lock().await;

    state
        .question_service
        .generate_for_session(&mut session)
        .await?;

    Ok(success_json(QuestionsResponse {
        tender_questions: session.tender_questions.questions.clone(),
        supplier_questions: session.supplier_questions.questions.clone(),
    }))
}

#[post("/api/sessions/{id}/draft")]
pub async fn generate_draft(
    state: web::Data<AppState>,
    id: web::Path<Uuid>,
    request: web::Json<GenerateDraftRequest>,
) -> Result<HttpResponse, AppError> {
    let shared = state.session(&id).await?;
    let mut session = shared.lock().await;

    let draft = state
        .draft_service
        .draft_for_session(&mut session, request.into_inner())
        .await?;

    Ok(success_json(DraftResponse::new(draft)))
}

#[get("/api/sessions/{id}/draft/download")]
pub async fn download_draft(
    state: web::Data<AppState>,
    id: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let shared = state.session(&id).await?;
    let session = shared.lock().await;

    let draft = session
        .draft
        .clone()
        .ok_or_else(|| AppError::NotFound("No draft has been generated yet".to_string()))?;

    Ok(text_attachment(DRAFT_FILE_NAME, draft))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        handlers::{link_handler::discover_links, session_handler::create_session},
        test_utils::fakes::{fake_state, FAKE_DRAFT},
    };
    use actix_web::{http::StatusCode, test, App};
    use serde_json::{json, Value};

    #[actix_web::test]
    async fn questions_then_draft_then_download() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(fake_state()))
                .service(create_session)
                .service(discover_links)
                .service(generate_questions)
                .service(generate_draft)
                .service(download_draft),
        )
        .await;

        let req = test::TestRequest::post().uri("/api/sessions").to_request();
        let created: Value = test::call_and_read_body_json(&app, req).await;
        let id = created["id"].as_str().unwrap().to_string();

        let req = test::TestRequest::post()
            .uri(&format!("/api/sessions/{}/links/discover", id))
            .set_json(json!({"product_name": "smart bins"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let req = test::TestRequest::post()
            .uri(&format!("/api/sessions/{}/questions", id))
            .to_request();
        let questions: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(questions["tender_questions"].as_array().unwrap().len(), 5);
        assert_eq!(questions["supplier_questions"].as_array().unwrap().len(), 5);

        let req = test::TestRequest::post()
            .uri(&format!("/api/sessions/{}/draft", id))
            .set_json(json!({
                "tender_answers": [{"question": questions["tender_questions"][0], "answer": "€2m"}]
            }))
            .to_request();
        let draft: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(draft["file_name"], "Requirements.txt");
        assert_eq!(draft["content"], FAKE_DRAFT);

        let req = test::TestRequest::get()
            .uri(&format!("/api/sessions/{}/draft/download", id))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(
            resp.headers().get("content-disposition").unwrap(),
            "attachment; filename=\"Requirements.txt\""
        );
        let body = test::read_body(resp).await;
        assert_eq!(body, FAKE_DRAFT);
    }

    #[actix_web::test]
    async fn questions_require_discovered_links() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(fake_state()))
                .service(create_session)
                .service(generate_questions),
        )
        .await;

        let req = test::TestRequest::post().uri("/api/sessions").to_request();
        let created: Value = test::call_and_read_body_json(&app, req).await;
        let id = created["id"].as_str().unwrap();

        let req = test::TestRequest::post()
            .uri(&format!("/api/sessions/{}/questions", id))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn download_without_draft_is_not_found() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(fake_state()))
                .service(create_session)
                .service(download_draft),
        )
        .await;

        let req = test::TestRequest::post().uri("/api/sessions").to_request();
        let created: Value = test::call_and_read_body_json(&app, req).await;
        let id = created["id"].as_str().unwrap();

        let req = test::TestRequest::get()
            .uri(&format!("/api/sessions/{}/draft/download", id))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn draft_with_invalid_pdf_is_a_bad_request() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(fake_state()))
                .service(create_session)
                .service(generate_draft),
        )
        .await;

        let req = test::TestRequest::post().uri("/api/sessions").to_request();
        let created: Value = test::call_and_read_body_json(&app, req).await;
        let id = created["id"].as_str().unwrap();

        let req = test::TestRequest::post()
            .uri(&format!("/api/sessions/{}/draft", id))
            .set_json(json!({
                "supplier_answers": [{"question": "1. Lead time?", "answer": "6 weeks"}],
                "pdfs": [{"file_name": "old.pdf", "content_base64": "%%%"}]
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}
