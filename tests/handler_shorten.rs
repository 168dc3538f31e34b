mod common;

use axum::{Router, routing::post};
use axum_test::TestServer;
use serde_json::{Value, json};
use shorturl::api::handlers::shorten_handler;
use shorturl::domain::repositories::MappingRepository;

fn shorten_app(state: shorturl::AppState) -> Router {
    Router::new()
        .route("/api/shorten", post(shorten_handler))
        .with_state(state)
}

#[tokio::test]
async fn test_shorten_success() {
    let (state, _repository, _rx) = common::create_test_state();
    let server = TestServer::new(shorten_app(state)).unwrap();

    let response = server
        .post("/api/shorten")
        .json(&json!({ "url": "https://example.com/page" }))
        .await;

    response.assert_status_ok();

    let body: Value = response.json();
    let code = body["code"].as_str().unwrap();
    assert_eq!(code.len(), 8);
    assert!(
        code.chars()
            .all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase())
    );
    assert_eq!(body["long_url"], "https://example.com/page");
    assert_eq!(
        body["short_url"],
        format!("http://localhost:3000/{}", code)
    );
}

#[tokio::test]
async fn test_shorten_normalizes_url() {
    let (state, repository, _rx) = common::create_test_state();
    let server = TestServer::new(shorten_app(state)).unwrap();

    let response = server
        .post("/api/shorten")
        .json(&json!({ "url": "HTTPS://EXAMPLE.COM:443/Path#anchor" }))
        .await;

    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["long_url"], "https://example.com/Path");

    let code = body["code"].as_str().unwrap();
    let stored = repository.find_by_code(code).await.unwrap().unwrap();
    assert_eq!(stored.original_url, "https://example.com/Path");
}

#[tokio::test]
async fn test_shorten_is_idempotent_for_same_url() {
    let (state, _repository, _rx) = common::create_test_state();
    let server = TestServer::new(shorten_app(state)).unwrap();

    let first = server
        .post("/api/shorten")
        .json(&json!({ "url": "https://example.com/page" }))
        .await;
    first.assert_status_ok();

    let second = server
        .post("/api/shorten")
        .json(&json!({ "url": "https://example.com/page" }))
        .await;
    second.assert_status_ok();

    let first: Value = first.json();
    let second: Value = second.json();
    assert_eq!(first["code"], second["code"]);
}

#[tokio::test]
async fn test_shorten_distinct_urls_get_distinct_codes() {
    let (state, _repository, _rx) = common::create_test_state();
    let server = TestServer::new(shorten_app(state)).unwrap();

    let first = server
        .post("/api/shorten")
        .json(&json!({ "url": "https://example.com/one" }))
        .await;
    let second = server
        .post("/api/shorten")
        .json(&json!({ "url": "https://example.com/two" }))
        .await;

    let first: Value = first.json();
    let second: Value = second.json();
    assert_ne!(first["code"], second["code"]);
}

#[tokio::test]
async fn test_shorten_rejects_malformed_url() {
    let (state, _repository, _rx) = common::create_test_state();
    let server = TestServer::new(shorten_app(state)).unwrap();

    let response = server
        .post("/api/shorten")
        .json(&json!({ "url": "not-a-url" }))
        .await;

    response.assert_status_bad_request();

    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "validation_error");
}

#[tokio::test]
async fn test_shorten_rejects_non_http_scheme() {
    let (state, repository, _rx) = common::create_test_state();
    let server = TestServer::new(shorten_app(state)).unwrap();

    let response = server
        .post("/api/shorten")
        .json(&json!({ "url": "ftp://example.com/file.txt" }))
        .await;

    response.assert_status_bad_request();

    // No partial record persists on a rejected request.
    assert!(
        repository
            .find_by_url("ftp://example.com/file.txt")
            .await
            .unwrap()
            .is_none()
    );
}
