use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;
use serde_json::{Value, json};
use tracing::info;

use crate::db::Translation;
use crate::error::SanastoError;
use crate::middleware::auth::AuthUser;
use crate::router::SanastoState;

#[derive(Debug, Deserialize)]
pub struct TranslationPayload {
    #[serde(rename = "finnishWord", default)]
    pub finnish_word: Option<String>,
    #[serde(rename = "englishWord", default)]
    pub english_word: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct TagAssignmentPayload {
    #[serde(default)]
    pub tag: Option<i64>,
}

/// GET /words -> every stored word pair.
pub async fn list(
    State(state): State<SanastoState>,
) -> Result<Json<Vec<Translation>>, SanastoError> {
    Ok(Json(state.storage.list_translations().await?))
}

/// POST /words -> insert a new pair.
pub async fn create(
    State(state): State<SanastoState>,
    auth: AuthUser,
    Json(payload): Json<TranslationPayload>,
) -> Result<impl IntoResponse, SanastoError> {
    state
        .storage
        .insert_translation(
            payload.finnish_word.as_deref().unwrap_or(""),
            payload.english_word.as_deref().unwrap_or(""),
        )
        .await?;
    info!(user_id = auth.user_id, "word pair added");
    Ok((
        StatusCode::CREATED,
        Json(json!({"message": "Words added successfully"})),
    ))
}

/// PUT /words/{id} -> overwrite both words of an existing pair.
pub async fn update(
    State(state): State<SanastoState>,
    _auth: AuthUser,
    Path(id): Path<i64>,
    Json(payload): Json<TranslationPayload>,
) -> Result<Json<Value>, SanastoError> {
    state
        .storage
        .update_translation(
            id,
            payload.finnish_word.as_deref().unwrap_or(""),
            payload.english_word.as_deref().unwrap_or(""),
        )
        .await?;
    Ok(Json(json!({"message": "Word updated successfully"})))
}

/// PUT /words/{id}/tag -> point the pair at a tag, or clear it with null.
pub async fn update_tag(
    State(state): State<SanastoState>,
    _auth: AuthUser,
    Path(id): Path<i64>,
    Json(payload): Json<TagAssignmentPayload>,
) -> Result<Json<Value>, SanastoError> {
    state.storage.update_translation_tag(id, payload.tag).await?;
    Ok(Json(json!({"message": "Tag updated successfully"})))
}

/// DELETE /words/{id} -> 204 on success, 404 when the id matches nothing.
pub async fn remove(
    State(state): State<SanastoState>,
    _auth: AuthUser,
    Path(id): Path<i64>,
) -> Result<StatusCode, SanastoError> {
    if state.storage.delete_translation(id).await? == 0 {
        return Err(SanastoError::WordNotFound);
    }
    Ok(StatusCode::NO_CONTENT)
}
