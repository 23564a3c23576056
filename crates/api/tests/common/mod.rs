#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{Method, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use taskdeck_api::auth::jwt::JwtConfig;
use taskdeck_api::config::ServerConfig;
use taskdeck_api::router::build_app_router;
use taskdeck_api::state::AppState;
use taskdeck_db::store::MemoryStore;

pub const TEST_PASSWORD: &str = "correct horse battery";

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default)
/// and a 30-second request timeout.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        jwt: JwtConfig::new("integration-test-secret"),
    }
}

/// Build the full application router over a fresh in-memory store.
///
/// Goes through the same [`build_app_router`] as `main.rs`, so tests exercise
/// the production middleware stack.
pub fn build_test_app() -> Router {
    let store = Arc::new(MemoryStore::new());
    let state = AppState::new(test_config(), store.clone(), store);
    build_app_router(state).expect("test CORS origins are valid")
}

async fn send(app: Router, request: Request<Body>) -> Response {
    app.oneshot(request).await.unwrap()
}

fn json_request(
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: serde_json::Value,
) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json");
    if let Some(token) = token {
        builder = builder.header(AUTHORIZATION, format!("Bearer {token}"));
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

/// Send an unauthenticated GET request.
pub async fn get(app: Router, uri: &str) -> Response {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    send(app, request).await
}

/// Send a GET request with a Bearer token.
pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response {
    let request = Request::builder()
        .uri(uri)
        .header(AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

/// Send an unauthenticated POST request with a JSON body.
pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    send(app, json_request(Method::POST, uri, None, body)).await
}

/// Send a POST request with a JSON body and a Bearer token.
pub async fn post_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response {
    send(app, json_request(Method::POST, uri, Some(token), body)).await
}

/// Send a PUT request with a JSON body and a Bearer token.
pub async fn put_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response {
    send(app, json_request(Method::PUT, uri, Some(token), body)).await
}

/// Send a DELETE request with a Bearer token.
pub async fn delete_auth(app: Router, uri: &str, token: &str) -> Response {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .header(AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Register an account through the API and log in, returning the token.
pub async fn register_and_login(app: &Router, email: &str) -> String {
    let body = serde_json::json!({
        "name": "Test User",
        "email": email,
        "password": TEST_PASSWORD,
    });
    let response = post_json(app.clone(), "/api/v1/auth/register", body).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let body = serde_json::json!({ "email": email, "password": TEST_PASSWORD });
    let response = post_json(app.clone(), "/api/v1/auth/login", body).await;
    assert_eq!(response.status(), StatusCode::OK);

    body_json(response).await["token"]
        .as_str()
        .expect("login response must contain a token")
        .to_string()
}
