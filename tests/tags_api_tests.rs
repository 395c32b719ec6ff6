mod common;

use axum::http::StatusCode;
use serde_json::json;

use common::{register_and_login, send_json, spawn_app};

#[tokio::test]
async fn create_and_list_tags() {
    let (app, _storage, path) = spawn_app("tags-roundtrip").await;
    let token = register_and_login(&app, "parent", "salasana").await;

    let (status, body) = send_json(
        &app,
        "POST",
        "/tags",
        Some(&token),
        Some(json!({"tag": "animals"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["message"], "Tag added successfully");

    let (status, body) = send_json(&app, "GET", "/tags", None, None).await;
    assert_eq!(status, StatusCode::OK);
    let tags = body.as_array().expect("GET /tags did not return an array");
    assert_eq!(tags.len(), 1);
    assert_eq!(tags[0]["tag"], "animals");
    assert!(tags[0]["id"].as_i64().is_some());

    let _ = std::fs::remove_file(&path);
}

#[tokio::test]
async fn empty_tag_is_rejected() {
    let (app, _storage, path) = spawn_app("tags-empty").await;
    let token = register_and_login(&app, "parent", "salasana").await;

    for payload in [json!({"tag": ""}), json!({})] {
        let (status, body) = send_json(&app, "POST", "/tags", Some(&token), Some(payload)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["message"], "Tag is required");
    }

    let _ = std::fs::remove_file(&path);
}

#[tokio::test]
async fn tag_mutations_require_token() {
    let (app, storage, path) = spawn_app("tags-auth").await;

    let (status, _) = send_json(&app, "POST", "/tags", None, Some(json!({"tag": "animals"}))).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = send_json(&app, "DELETE", "/tags/1", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    assert!(storage.list_tags().await.unwrap().is_empty());

    let _ = std::fs::remove_file(&path);
}

#[tokio::test]
async fn delete_tag_maps_zero_rows_to_404() {
    let (app, _storage, path) = spawn_app("tags-delete").await;
    let token = register_and_login(&app, "parent", "salasana").await;

    send_json(&app, "POST", "/tags", Some(&token), Some(json!({"tag": "animals"}))).await;
    let (_, tags) = send_json(&app, "GET", "/tags", None, None).await;
    let id = tags[0]["id"].as_i64().unwrap();

    let (status, _) = send_json(&app, "DELETE", &format!("/tags/{id}"), Some(&token), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, body) = send_json(&app, "DELETE", &format!("/tags/{id}"), Some(&token), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["message"], "No tags found with the provided ID");

    let _ = std::fs::remove_file(&path);
}

#[tokio::test]
async fn deleting_a_tag_leaves_dangling_references() {
    let (app, _storage, path) = spawn_app("tags-dangling").await;
    let token = register_and_login(&app, "parent", "salasana").await;

    send_json(
        &app,
        "POST",
        "/words",
        Some(&token),
        Some(json!({"finnishWord": "kissa", "englishWord": "cat"})),
    )
    .await;
    send_json(&app, "POST", "/tags", Some(&token), Some(json!({"tag": "animals"}))).await;

    let (_, tags) = send_json(&app, "GET", "/tags", None, None).await;
    let tag_id = tags[0]["id"].as_i64().unwrap();
    let (_, words) = send_json(&app, "GET", "/words", None, None).await;
    let word_id = words[0]["id"].as_i64().unwrap();

    send_json(
        &app,
        "PUT",
        &format!("/words/{word_id}/tag"),
        Some(&token),
        Some(json!({"tag": tag_id})),
    )
    .await;

    let (status, _) = send_json(&app, "DELETE", &format!("/tags/{tag_id}"), Some(&token), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    // the word keeps its now-dangling tag id
    let (_, words) = send_json(&app, "GET", "/words", None, None).await;
    assert_eq!(words[0]["tag"], tag_id);

    let _ = std::fs::remove_file(&path);
}
