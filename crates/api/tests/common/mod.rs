#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use chrono::NaiveDate;
use http_body_util::BodyExt;
use tower::ServiceExt;

use assetwatch_api::config::{LogFormat, ServerConfig};
use assetwatch_api::router::build_app_router;
use assetwatch_api::state::AppState;
use assetwatch_core::clock::FixedClock;
use assetwatch_store::AssetStore;

/// The date every test app treats as "today".
pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()
}

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["*".to_string()],
        request_timeout_secs: 30,
        max_body_bytes: 4 * 1024 * 1024,
        log_format: LogFormat::Text,
    }
}

/// A router wired exactly like production, plus a handle on its store.
pub struct TestApp {
    pub router: Router,
    pub store: Arc<AssetStore>,
}

/// Build the full application router with a fresh store and a clock pinned
/// to [`today`].
pub fn build_test_app() -> TestApp {
    build_test_app_with(test_config())
}

pub fn build_test_app_with(config: ServerConfig) -> TestApp {
    let store = Arc::new(AssetStore::new());
    let state = AppState::new(Arc::clone(&store), Arc::new(FixedClock(today())), config.clone());
    TestApp {
        router: build_app_router(state, &config),
        store,
    }
}

pub async fn get(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    post_raw(app, uri, body.to_string()).await
}

pub async fn post_raw(app: Router, uri: &str, body: impl Into<Body>) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .body(body.into())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// A single asset payload object.
pub fn asset(id: &str, nominal_value: f64, due_date: &str, interest_rate: f64) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "nominal_value": nominal_value,
        "due_date": due_date,
        "interest_rate": interest_rate,
    })
}
