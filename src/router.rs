//! Axum router and shared application state.

use axum::{
    Router,
    routing::{delete, get, post, put},
};
use std::sync::Arc;

use crate::db::VocabularyStorage;
use crate::handlers::{tags, users, words};

#[derive(Clone)]
pub struct SanastoState {
    pub storage: VocabularyStorage,
    pub secret: Arc<str>,
}

impl SanastoState {
    pub fn new(storage: VocabularyStorage, secret: Arc<str>) -> Self {
        Self { storage, secret }
    }
}

/// Every route of the HTTP contract. Mutating routes authenticate through
/// the `AuthUser` extractor; reads, registration and login are open.
pub fn sanasto_router(state: SanastoState) -> Router {
    Router::new()
        .route("/words", get(words::list).post(words::create))
        .route("/words/{id}", put(words::update).delete(words::remove))
        .route("/words/{id}/tag", put(words::update_tag))
        .route("/tags", get(tags::list).post(tags::create))
        .route("/tags/{id}", delete(tags::remove))
        .route("/users", get(users::list))
        .route("/register", post(users::register))
        .route("/login", post(users::login))
        .with_state(state)
}
