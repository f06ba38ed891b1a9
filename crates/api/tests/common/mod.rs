//! Shared helpers for HTTP-level integration tests.
//!
//! Builds the same router the binary serves (via `build_app_router`) and
//! drives it with `tower::ServiceExt::oneshot`, so no TCP listener is
//! needed.

#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use seedweb_api::config::{AppEnv, ServerConfig};
use seedweb_api::router::build_app_router;
use seedweb_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
///
/// The database URL is unused because `#[sqlx::test]` injects the pool.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        env: AppEnv::Testing,
        host: "127.0.0.1".to_string(),
        port: 0,
        database_url: String::new(),
        secret_key: None,
        cors_origins: vec![
            "http://localhost".to_string(),
            "http://localhost:8080".to_string(),
        ],
        request_timeout_secs: 30,
    }
}

/// Build the full application router with all middleware layers, using
/// the given database pool.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

async fn send(app: Router, method: Method, uri: &str, body: Body) -> Response {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(body)
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a GET request.
pub async fn get(app: Router, uri: &str) -> Response {
    send(app, Method::GET, uri, Body::empty()).await
}

/// Send a POST request with a JSON body.
pub async fn post_json(app: Router, uri: &str, json: serde_json::Value) -> Response {
    send(app, Method::POST, uri, Body::from(json.to_string())).await
}

/// Send a PATCH request with a JSON body.
pub async fn patch_json(app: Router, uri: &str, json: serde_json::Value) -> Response {
    send(app, Method::PATCH, uri, Body::from(json.to_string())).await
}

/// Send a DELETE request.
pub async fn delete(app: Router, uri: &str) -> Response {
    send(app, Method::DELETE, uri, Body::empty()).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
