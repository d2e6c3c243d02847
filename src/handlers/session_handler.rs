use actix_web::{delete, get, post, web, HttpResponse};
use uuid::Uuid;

use crate::{
    app_state::AppState,
    errors::AppError,
    models::{
        domain::ResearchSession,
        dto::{
            request::CreateSessionRequest,
            response::{DeleteSessionResponse, SessionView},
        },
    },
    services::http_helpers::{created_json, success_json},
};

#[post("/api/sessions")]
pub async fn create_session(
    state: web::Data<AppState>,
    request: Option<web::Json<CreateSessionRequest>>,
) -> Result<HttpResponse, AppError> {
    let request = request.map(web::Json::into_inner).unwrap_or_default();
    let shared = state
        .sessions
        .create(ResearchSession::new(request.english_only))
        .await?;

    let session = shared.lock().await;
    Ok(created_json(SessionView::from(&*session)))
}

#[get("/api/sessions/{id}")]
pub async fn get_session(
    state: web::Data<AppState>,
    id: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let shared = state.session(&id).await?;
    let session = shared.lock().await;
    Ok(success_json(SessionView::from(&*session)))
}

#[delete("/api/sessions/{id}")]
pub async fn delete_session(
    state: web::Data<AppState>,
    id: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    if !state.sessions.delete(&id).await? {
        return Err(AppError::NotFound(format!("Session '{}' not found", id)));
    }

    Ok(success_json(DeleteSessionResponse {
        message: format!("Session '{}' discarded", id),
    }))
}

#[get("/health")]
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION")
    }))
}
