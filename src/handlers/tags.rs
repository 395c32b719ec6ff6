use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;
use serde_json::json;

use crate::db::Tag;
use crate::error::SanastoError;
use crate::middleware::auth::AuthUser;
use crate::router::SanastoState;

#[derive(Debug, Deserialize)]
pub struct TagPayload {
    #[serde(default)]
    pub tag: Option<String>,
}

/// GET /tags -> every stored tag.
pub async fn list(State(state): State<SanastoState>) -> Result<Json<Vec<Tag>>, SanastoError> {
    Ok(Json(state.storage.list_tags().await?))
}

/// POST /tags -> insert a new label.
pub async fn create(
    State(state): State<SanastoState>,
    _auth: AuthUser,
    Json(payload): Json<TagPayload>,
) -> Result<impl IntoResponse, SanastoError> {
    state
        .storage
        .insert_tag(payload.tag.as_deref().unwrap_or(""))
        .await?;
    Ok((
        StatusCode::CREATED,
        Json(json!({"message": "Tag added successfully"})),
    ))
}

/// DELETE /tags/{id} -> 204 on success, 404 when the id matches nothing.
/// Referencing translations keep their tag id.
pub async fn remove(
    State(state): State<SanastoState>,
    _auth: AuthUser,
    Path(id): Path<i64>,
) -> Result<StatusCode, SanastoError> {
    if state.storage.delete_tag(id).await? == 0 {
        return Err(SanastoError::TagNotFound);
    }
    Ok(StatusCode::NO_CONTENT)
}
