use async_graphql::ErrorExtensions;
use uuid::Uuid;

use crate::{
    app_state::AppState,
    errors::{AppError, AppResult},
    repositories::SharedSession,
};

/// Helper to parse UUID from GraphQL ID string
pub fn parse_id(id: &str) -> AppResult<Uuid> {
    Uuid::parse_str(id).map_err(|_| AppError::ValidationError("Invalid UUID format".to_string()))
}

/// Resolves a GraphQL session id, carrying the error code into the response.
pub async fn find_session(state: &AppState, id: &str) -> async_graphql::Result<SharedSession> {
    let uuid = parse_id(id).map_err(|e| e.extend())?;
    state.session(&uuid).await.map_err(|e| e.extend())
}
