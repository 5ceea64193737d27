//! Shared helpers for HTTP-level integration tests.
//!
//! Requests go straight to the router through `tower::ServiceExt::oneshot`
//! without a TCP listener.

#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use ampsite_api::auth::jwt::{generate_access_token, JwtConfig};
use ampsite_api::config::ServerConfig;
use ampsite_api::router::build_app_router;
use ampsite_api::state::AppState;
use ampsite_core::roles::UserRole;
use ampsite_db::repositories::RoleRepo;
use ampsite_events::EventBus;
use axum::body::Body;
use axum::http::{header, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

pub const ADMIN: &str = "admin-principal";
pub const EDITOR: &str = "editor-principal";
pub const GUEST: &str = "guest-principal";

pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        reminder_sweep_interval: Duration::from_secs(3600),
        reminder_webhook_url: None,
        bootstrap_admin: None,
        jwt: JwtConfig {
            secret: "integration-test-secret-long-enough".to_string(),
            access_token_expiry_mins: 15,
        },
    }
}

/// Build the full router over `pool`, with a fresh event bus.
pub fn build_test_app(pool: PgPool) -> Router {
    build_test_app_with_bus(pool, Arc::new(EventBus::default()))
}

pub fn build_test_app_with_bus(pool: PgPool, event_bus: Arc<EventBus>) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        event_bus,
    };
    build_app_router(state, &config)
}

/// Assign the standard test roles: [`ADMIN`] is admin, [`EDITOR`] is user.
/// [`GUEST`] has no assignment.
pub async fn seed_roles(pool: &PgPool) {
    RoleRepo::assign(pool, ADMIN, UserRole::Admin, "test").await.unwrap();
    RoleRepo::assign(pool, EDITOR, UserRole::User, "test").await.unwrap();
}

pub fn token_for(principal: &str) -> String {
    generate_access_token(principal, &test_config().jwt).unwrap()
}

async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.unwrap()
}

fn request(method: &str, uri: &str, principal: Option<&str>) -> axum::http::request::Builder {
    let builder = Request::builder().method(method).uri(uri);
    match principal {
        Some(p) => builder.header(header::AUTHORIZATION, format!("Bearer {}", token_for(p))),
        None => builder,
    }
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, request("GET", uri, None).body(Body::empty()).unwrap()).await
}

pub async fn get_as(app: Router, uri: &str, principal: &str) -> Response<Body> {
    send(app, request("GET", uri, Some(principal)).body(Body::empty()).unwrap()).await
}

pub async fn post_as(app: Router, uri: &str, principal: &str) -> Response<Body> {
    send(app, request("POST", uri, Some(principal)).body(Body::empty()).unwrap()).await
}

pub async fn post_json_as(
    app: Router,
    uri: &str,
    principal: &str,
    body: serde_json::Value,
) -> Response<Body> {
    json_request(app, "POST", uri, Some(principal), body).await
}

pub async fn put_json_as(
    app: Router,
    uri: &str,
    principal: &str,
    body: serde_json::Value,
) -> Response<Body> {
    json_request(app, "PUT", uri, Some(principal), body).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    json_request(app, "POST", uri, None, body).await
}

async fn json_request(
    app: Router,
    method: &str,
    uri: &str,
    principal: Option<&str>,
    body: serde_json::Value,
) -> Response<Body> {
    let request = request(method, uri, principal)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_vec(&body).unwrap()))
        .unwrap();
    send(app, request).await
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Create a project as [`EDITOR`] and return its id.
pub async fn create_project(pool: &PgPool, value: f64) -> i64 {
    let response = post_json_as(
        build_test_app(pool.clone()),
        "/api/v1/projects",
        EDITOR,
        serde_json::json!({
            "name": "Cedar Row Townhomes",
            "location": "88 Cedar Row",
            "client_name": "Cedar Row HOA",
            "general_contractor": "Summit Construction",
            "project_value": value,
        }),
    )
    .await;
    assert_eq!(response.status(), 201);
    body_json(response).await["data"]["id"].as_i64().unwrap()
}
