//! Shared helpers for API integration tests.
//!
//! Requests go through `tower::ServiceExt::oneshot` against the same
//! router (and middleware stack) production uses; no TCP listener.

use std::path::PathBuf;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use serde_json::Value;
use sqlx::PgPool;
use tower::ServiceExt;

use darkroom_api::config::ServerConfig;
use darkroom_api::router::build_app_router;
use darkroom_api::state::AppState;
use darkroom_site_config::SiteConfigStore;

/// Staff id attached to authenticated test requests.
pub const TEST_STAFF_ID: &str = "1";

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        site_config_path: PathBuf::from("site-config.json"),
    }
}

/// Build the application router with a scratch site-config path.
///
/// Tests that exercise site-config persistence should use
/// [`build_test_app_with_site_config`] with their own temp dir instead.
pub async fn build_test_app(pool: PgPool) -> Router {
    let scratch = std::env::temp_dir().join(format!(
        "darkroom-api-test-{}-site-config.json",
        std::process::id()
    ));
    build_test_app_with_site_config(pool, scratch).await
}

/// Build the application router with an explicit site-config override
/// file path.
pub async fn build_test_app_with_site_config(pool: PgPool, path: PathBuf) -> Router {
    let mut config = test_config();
    config.site_config_path = path.clone();

    let site_config = SiteConfigStore::load(path).await;
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        site_config: Arc::new(site_config),
    };
    build_app_router(state, &config)
}

async fn send(
    app: Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
    staff: bool,
) -> Response {
    let mut builder = Request::builder().method(method).uri(uri);
    if staff {
        builder = builder.header("x-staff-id", TEST_STAFF_ID);
    }
    let request = match body {
        Some(value) => builder
            .header("content-type", "application/json")
            .body(Body::from(value.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response {
    send(app, Method::GET, uri, None, true).await
}

pub async fn get_anon(app: Router, uri: &str) -> Response {
    send(app, Method::GET, uri, None, false).await
}

pub async fn post_json(app: Router, uri: &str, body: Value) -> Response {
    send(app, Method::POST, uri, Some(body), true).await
}

pub async fn post_json_anon(app: Router, uri: &str, body: Value) -> Response {
    send(app, Method::POST, uri, Some(body), false).await
}

pub async fn post_empty_anon(app: Router, uri: &str) -> Response {
    send(app, Method::POST, uri, None, false).await
}

pub async fn patch_json(app: Router, uri: &str, body: Value) -> Response {
    send(app, Method::PATCH, uri, Some(body), true).await
}

pub async fn patch_json_anon(app: Router, uri: &str, body: Value) -> Response {
    send(app, Method::PATCH, uri, Some(body), false).await
}

pub async fn put_json(app: Router, uri: &str, body: Value) -> Response {
    send(app, Method::PUT, uri, Some(body), true).await
}

pub async fn delete(app: Router, uri: &str) -> Response {
    send(app, Method::DELETE, uri, None, true).await
}

/// Collect a response body as JSON.
pub async fn body_json(response: Response) -> Value {
    use http_body_util::BodyExt;
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

// ---------------------------------------------------------------------------
// Seed helpers (via the API, so tests exercise the same surface)
// ---------------------------------------------------------------------------

/// Create a client through the API; returns its id.
pub async fn seed_client(pool: &PgPool, name: &str, email: &str) -> i64 {
    let app = build_test_app(pool.clone()).await;
    let response = post_json(
        app,
        "/api/v1/clients",
        serde_json::json!({"name": name, "email": email}),
    )
    .await;
    assert_eq!(response.status(), axum::http::StatusCode::CREATED);
    body_json(response).await["id"].as_i64().unwrap()
}

/// Create a shoot through the API; returns `(id, slug)`.
pub async fn seed_shoot(pool: &PgPool, client_id: i64, title: &str) -> (i64, String) {
    let app = build_test_app(pool.clone()).await;
    let response = post_json(
        app,
        "/api/v1/shoots",
        serde_json::json!({
            "client_id": client_id,
            "title": title,
            "shoot_type": "wedding",
            "shoot_date": "2026-06-20",
            "location": "Portland, OR",
        }),
    )
    .await;
    assert_eq!(response.status(), axum::http::StatusCode::CREATED);
    let json = body_json(response).await;
    (
        json["id"].as_i64().unwrap(),
        json["slug"].as_str().unwrap().to_string(),
    )
}

/// Register `count` images through the API; returns their ids in upload
/// order.
pub async fn seed_images(pool: &PgPool, shoot_id: i64, count: usize) -> Vec<i64> {
    let mut ids = Vec::with_capacity(count);
    for i in 0..count {
        let app = build_test_app(pool.clone()).await;
        let response = post_json(
            app,
            "/api/v1/images",
            serde_json::json!({
                "shoot_id": shoot_id,
                "filename": format!("img-{i}.jpg"),
                "storage_path": format!("shoots/{shoot_id}/img-{i}.jpg"),
            }),
        )
        .await;
        assert_eq!(response.status(), axum::http::StatusCode::CREATED);
        ids.push(body_json(response).await["id"].as_i64().unwrap());
    }
    ids
}
