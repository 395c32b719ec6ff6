use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde::Deserialize;
use serde_json::{Value, json};
use tokio::task;
use tracing::info;

use crate::db::User;
use crate::error::SanastoError;
use crate::middleware::auth::issue_token;
use crate::router::SanastoState;

const BCRYPT_COST: u32 = 10;

#[derive(Debug, Deserialize)]
pub struct CredentialsPayload {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

/// GET /users -> stored accounts (diagnostic; passwords are bcrypt hashes).
pub async fn list(State(state): State<SanastoState>) -> Result<Json<Vec<User>>, SanastoError> {
    Ok(Json(state.storage.list_users().await?))
}

/// POST /register -> hash the password and store the account.
pub async fn register(
    State(state): State<SanastoState>,
    Json(payload): Json<CredentialsPayload>,
) -> Result<impl IntoResponse, SanastoError> {
    let username = payload.username.unwrap_or_default();
    let password = payload.password.unwrap_or_default();
    if username.trim().is_empty() || password.is_empty() {
        return Err(SanastoError::InvalidInput("Both fields are required"));
    }

    // bcrypt is CPU-bound; run it on the blocking pool
    let hashed = task::spawn_blocking(move || bcrypt::hash(password, BCRYPT_COST)).await??;
    state.storage.insert_user(&username, &hashed).await?;
    info!(username = %username, "user registered");
    Ok((
        StatusCode::CREATED,
        Json(json!({"message": "User added successfully"})),
    ))
}

/// POST /login -> check credentials, hand out a signed token.
pub async fn login(
    State(state): State<SanastoState>,
    Json(payload): Json<CredentialsPayload>,
) -> Result<Json<Value>, SanastoError> {
    let username = payload.username.unwrap_or_default();
    let password = payload.password.unwrap_or_default();

    let user = state
        .storage
        .get_user_by_username(&username)
        .await?
        .ok_or(SanastoError::UserNotFound)?;

    let stored_hash = user.password.clone();
    let password_ok =
        task::spawn_blocking(move || bcrypt::verify(password, &stored_hash)).await??;
    if !password_ok {
        return Err(SanastoError::InvalidPassword);
    }

    let token = issue_token(user.id, &state.secret)?;
    info!(username = %user.username, "login succeeded");
    Ok(Json(json!({"token": token, "user": {"username": user.username}})))
}
