use axum::extract::FromRequestParts;
use axum::http::{header, request::Parts};
use chrono::Utc;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use crate::error::SanastoError;
use crate::router::SanastoState;

/// Hours a login token stays valid.
pub const TOKEN_TTL_HOURS: i64 = 24;

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    #[serde(rename = "userId")]
    pub user_id: i64,
    pub exp: i64,
}

/// Sign a token carrying the user id, expiring after [`TOKEN_TTL_HOURS`].
pub fn issue_token(user_id: i64, secret: &str) -> Result<String, SanastoError> {
    let exp = (Utc::now() + chrono::Duration::hours(TOKEN_TTL_HOURS)).timestamp();
    let claims = Claims { user_id, exp };
    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )?;
    Ok(token)
}

pub fn verify_token(token: &str, secret: &str) -> Result<Claims, SanastoError> {
    let data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )?;
    Ok(data.claims)
}

/// Extractor gating the parent-control mutations.
/// Accepts `Authorization: Bearer <token>`; anything else is rejected 401
/// before the handler body runs.
#[derive(Debug, Clone, Copy)]
pub struct AuthUser {
    pub user_id: i64,
}

impl FromRequestParts<SanastoState> for AuthUser {
    type Rejection = SanastoError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &SanastoState,
    ) -> Result<Self, Self::Rejection> {
        let auth = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .ok_or(SanastoError::Unauthorized)?
            .trim();

        let token = auth
            .strip_prefix("Bearer ")
            .or_else(|| auth.strip_prefix("bearer "))
            .ok_or(SanastoError::Unauthorized)?;

        let claims = verify_token(token, &state.secret).map_err(|_| SanastoError::Unauthorized)?;
        Ok(Self {
            user_id: claims.user_id,
        })
    }
}
