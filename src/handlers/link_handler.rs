use actix_web::{post, web, HttpResponse};
use uuid::Uuid;

use crate::{
    app_state::AppState,
    errors::AppError,
    models::{
        domain::LinkCategory,
        dto::{
            request::{DiscoverLinksRequest, LinkRequest},
            response::{CategoryView, SessionView},
        },
    },
    services::http_helpers::success_json,
};

fn category_path(path: web::Path<(Uuid, String)>) -> Result<(Uuid, LinkCategory), AppError> {
    let (id, category) = path.into_inner();
    Ok((id, category.parse()?))
}

#[post("/api/sessions/{id}/links/discover")]
pub async fn discover_links(
    state: web::Data<AppState>,
    id: web::Path<Uuid>,
    request: web::Json<DiscoverLinksRequest>,
) -> Result<HttpResponse, AppError> {
    let shared = state.session(&id).await?;
    let mut session = shared.lock().await;

    state
        .curation_service
        .discover_links(&mut session, request.into_inner())
        .await?;

    Ok(success_json(SessionView::from(&*session)))
}

#[post("/api/sessions/{id}/links/{category}/accept")]
pub async fn accept_link(
    state: web::Data<AppState>,
    path: web::Path<(Uuid, String)>,
    request: web::Json<LinkRequest>,
) -> Result<HttpResponse, AppError> {
    let (id, category) = category_path(path)?;
    let shared = state.session(&id).await?;
    let mut session = shared.lock().await;

    state
        .curation_service
        .accept(&mut session, category, &request)?;

    Ok(success_json(CategoryView::new(category, session.curation(category))))
}

#[post("/api/sessions/{id}/links/{category}/reject")]
pub async fn reject_link(
    state: web::Data<AppState>,
    path: web::Path<(Uuid, String)>,
    request: web::Json<LinkRequest>,
) -> Result<HttpResponse, AppError> {
    let (id, category) = category_path(path)?;
    let shared = state.session(&id).await?;
    let mut session = shared.lock().await;

    state
        .curation_service
        .reject(&mut session, category, &request)?;

    Ok(success_json(CategoryView::new(category, session.curation(category))))
}

#[post("/api/sessions/{id}/links/{category}/add")]
pub async fn add_link(
    state: web::Data<AppState>,
    path: web::Path<(Uuid, String)>,
    request: web::Json<LinkRequest>,
) -> Result<HttpResponse, AppError> {
    let (id, category) = category_path(path)?;
    let shared = state.session(&id).await?;
    let mut session = shared.lock().await;

    state
        .curation_service
        .manual_add(&mut session, category, &request)?;

    Ok(success_json(CategoryView::new(category, session.curation(category))))
}

#[post("/api/sessions/{id}/links/{category}/more")]
pub async fn fetch_more_links(
    state: web::Data<AppState>,
    path: web::Path<(Uuid, String)>,
) -> Result<HttpResponse, AppError> {
    let (id, category) = category_path(path)?;
    let shared = state.session(&id).await?;
    let mut session = shared.lock().await;

    state
        .curation_service
        .fetch_more(&mut session, category)
        .await?;

    Ok(success_json(CategoryView::new(category, session.curation(category))))
}
