use std::path::PathBuf;
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use serde_json::Value;
use tower::ServiceExt;

use sanasto::db::VocabularyStorage;
use sanasto::router::{SanastoState, sanasto_router};

pub const TEST_SECRET: &str = "test-secret";

/// Process-unique temp sqlite path so parallel tests never share state.
pub fn temp_db_url(label: &str) -> (String, PathBuf) {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system time before UNIX_EPOCH")
        .as_nanos();
    let mut path = std::env::temp_dir();
    path.push(format!(
        "sanasto-{label}-{}-{}.sqlite",
        std::process::id(),
        nanos
    ));
    (format!("sqlite:{}", path.display()), path)
}

pub async fn spawn_app(label: &str) -> (Router, VocabularyStorage, PathBuf) {
    let (url, path) = temp_db_url(label);
    let storage = sanasto::db::spawn(&url)
        .await
        .expect("failed to open test database");
    let state = SanastoState::new(storage.clone(), Arc::from(TEST_SECRET));
    (sanasto_router(state), storage, path)
}

/// Fire one request at the router and decode the body as JSON
/// (`Value::Null` for empty bodies).
pub async fn send_json(
    app: &Router,
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string())),
        None => builder.body(Body::empty()),
    }
    .expect("failed to build request");

    let response = app.clone().oneshot(request).await.expect("request failed");
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("failed to read response body");
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes)
            .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
    };
    (status, value)
}

pub async fn register_and_login(app: &Router, username: &str, password: &str) -> String {
    let creds = serde_json::json!({"username": username, "password": password});
    let (status, _) = send_json(app, "POST", "/register", None, Some(creds.clone())).await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = send_json(app, "POST", "/login", None, Some(creds)).await;
    assert_eq!(status, StatusCode::OK);
    body["token"]
        .as_str()
        .expect("login response missing token")
        .to_string()
}
