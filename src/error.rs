use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::Serialize;
use sqlx::Error as SqlxError;
use thiserror::Error as ThisError;
use tracing::error;

#[derive(Debug, ThisError)]
pub enum SanastoError {
    #[error("{0}")]
    InvalidInput(&'static str),

    #[error("Word already exists")]
    DuplicateWord,

    #[error("User already exists")]
    DuplicateUser,

    #[error("User not found")]
    UserNotFound,

    #[error("No words found with the provided ID")]
    WordNotFound,

    #[error("No tags found with the provided ID")]
    TagNotFound,

    #[error("Invalid password")]
    InvalidPassword,

    #[error("Invalid or missing bearer token")]
    Unauthorized,

    #[error("Database error: {0}")]
    Database(#[from] SqlxError),

    #[error("Password hashing error: {0}")]
    Hash(#[from] bcrypt::BcryptError),

    #[error("Token error: {0}")]
    Token(#[from] jsonwebtoken::errors::Error),

    #[error("Blocking task failed: {0}")]
    Blocking(#[from] tokio::task::JoinError),
}

impl IntoResponse for SanastoError {
    fn into_response(self) -> axum::response::Response {
        let (status, code) = match &self {
            SanastoError::InvalidInput(_) => (StatusCode::BAD_REQUEST, "INVALID_INPUT"),
            SanastoError::DuplicateWord | SanastoError::DuplicateUser => {
                (StatusCode::BAD_REQUEST, "DUPLICATE")
            }
            SanastoError::UserNotFound | SanastoError::WordNotFound | SanastoError::TagNotFound => {
                (StatusCode::NOT_FOUND, "NOT_FOUND")
            }
            SanastoError::InvalidPassword | SanastoError::Unauthorized | SanastoError::Token(_) => {
                (StatusCode::UNAUTHORIZED, "UNAUTHORIZED")
            }
            SanastoError::Database(_) | SanastoError::Hash(_) | SanastoError::Blocking(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR")
            }
        };

        let message = if status == StatusCode::INTERNAL_SERVER_ERROR {
            error!(error = %self, "internal error");
            "An internal server error occurred.".to_string()
        } else {
            self.to_string()
        };

        let body = ApiErrorBody {
            code: code.to_string(),
            message,
        };
        (status, Json(ApiErrorResponse { error: body })).into_response()
    }
}

/// Standardized API error response body
#[derive(Serialize)]
pub struct ApiErrorBody {
    pub code: String,
    pub message: String,
}

#[derive(Serialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorBody,
}
