//! Shared helpers for HTTP-level integration tests.
//!
//! Tests drive the real router (same middleware stack as production)
//! through `tower::ServiceExt::oneshot`, with a fresh database per test
//! via `#[sqlx::test]`.

#![allow(dead_code)]

use std::sync::Arc;
use std::time::{Duration, Instant};

use axum::body::Body;
use axum::http::{Method, Request, Response, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use maison_api::auth::jwt::JwtConfig;
use maison_api::auth::password::hash_password;
use maison_api::config::{RateLimitConfig, ServerConfig};
use maison_api::middleware::rate_limit::RateLimiter;
use maison_api::router::build_app_router;
use maison_api::state::AppState;
use maison_core::types::DbId;
use maison_db::models::user::CreateUser;
use maison_db::repositories::UserRepo;

/// API key wired into the test config.
pub const TEST_API_KEY: &str = "test-api-key";

/// Password used for all test users.
pub const TEST_PASSWORD: &str = "integration-test-pw";

/// Build a test `ServerConfig` with safe defaults.
///
/// The rate limit is generous so ordinary tests never trip it; the
/// dedicated rate-limit tests construct a tighter one.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        cta_api_key: TEST_API_KEY.to_string(),
        rate_limit: RateLimitConfig {
            max_requests: 10_000,
            window: Duration::from_secs(60),
        },
        jwt: JwtConfig {
            secret: "test-secret-that-is-long-enough-for-hmac".to_string(),
            access_token_expiry_mins: 15,
            refresh_token_expiry_days: 7,
        },
    }
}

/// Build the full application router with all middleware layers, using
/// the given database pool.
pub fn build_test_app(pool: PgPool) -> Router {
    build_test_app_with_config(pool, test_config())
}

/// Same as [`build_test_app`] but with a caller-supplied config (used by
/// the rate-limit tests).
pub fn build_test_app_with_config(pool: PgPool, config: ServerConfig) -> Router {
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        notifier: Arc::new(maison_notify::Notifier::disabled()),
        rate_limiter: Arc::new(RateLimiter::new(&config.rate_limit)),
        started_at: Instant::now(),
    };
    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

async fn send(
    app: Router,
    method: Method,
    path: &str,
    token: Option<&str>,
    api_key: Option<&str>,
    body: Option<serde_json::Value>,
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(path);
    if let Some(token) = token {
        builder = builder.header("Authorization", format!("Bearer {token}"));
    }
    if let Some(key) = api_key {
        builder = builder.header("x-api-key", key);
    }

    let request = match body {
        Some(json) => builder
            .header("Content-Type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, path: &str) -> Response<Body> {
    send(app, Method::GET, path, None, None, None).await
}

pub async fn post_json(app: Router, path: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::POST, path, None, None, Some(body)).await
}

pub async fn put_json(app: Router, path: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::PUT, path, None, None, Some(body)).await
}

pub async fn get_auth(app: Router, path: &str, token: &str) -> Response<Body> {
    send(app, Method::GET, path, Some(token), None, None).await
}

pub async fn post_json_auth(
    app: Router,
    path: &str,
    token: &str,
    body: serde_json::Value,
) -> Response<Body> {
    send(app, Method::POST, path, Some(token), None, Some(body)).await
}

pub async fn post_auth(app: Router, path: &str, token: &str) -> Response<Body> {
    send(app, Method::POST, path, Some(token), None, None).await
}

pub async fn put_json_auth(
    app: Router,
    path: &str,
    token: &str,
    body: serde_json::Value,
) -> Response<Body> {
    send(app, Method::PUT, path, Some(token), None, Some(body)).await
}

pub async fn patch_json_auth(
    app: Router,
    path: &str,
    token: &str,
    body: serde_json::Value,
) -> Response<Body> {
    send(app, Method::PATCH, path, Some(token), None, Some(body)).await
}

pub async fn delete_auth(app: Router, path: &str, token: &str) -> Response<Body> {
    send(app, Method::DELETE, path, Some(token), None, None).await
}

pub async fn get_with_key(app: Router, path: &str, key: &str) -> Response<Body> {
    send(app, Method::GET, path, None, Some(key), None).await
}

pub async fn put_json_with_key(
    app: Router,
    path: &str,
    key: &str,
    body: serde_json::Value,
) -> Response<Body> {
    send(app, Method::PUT, path, None, Some(key), Some(body)).await
}

/// Collect a response body into parsed JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap_or_else(|e| {
        panic!(
            "response body was not JSON: {e}: {}",
            String::from_utf8_lossy(&bytes)
        )
    })
}

// ---------------------------------------------------------------------------
// User / auth fixtures
// ---------------------------------------------------------------------------

/// Insert a user with [`TEST_PASSWORD`] and the given role.
pub async fn create_user(pool: &PgPool, name: &str, email: &str, role: &str) -> DbId {
    let password_hash = hash_password(TEST_PASSWORD).expect("hashing should succeed");
    let user = UserRepo::create(
        pool,
        &CreateUser {
            name: name.to_string(),
            email: email.to_string(),
            password_hash,
            role: role.to_string(),
            phone: None,
        },
    )
    .await
    .expect("user insert should succeed");
    user.id
}

/// Log a user in through the real endpoint and return the access token.
pub async fn login_token(pool: &PgPool, email: &str) -> String {
    let app = build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/admin/auth/login",
        serde_json::json!({ "email": email, "password": TEST_PASSWORD }),
    )
    .await;
    assert_eq!(
        response.status(),
        StatusCode::OK,
        "test fixture login must succeed"
    );
    let json = body_json(response).await;
    json["access_token"].as_str().unwrap().to_string()
}

/// Create an admin and return (id, access token).
pub async fn admin_fixture(pool: &PgPool) -> (DbId, String) {
    let id = create_user(pool, "Admin", "admin@maison.test", "admin").await;
    let token = login_token(pool, "admin@maison.test").await;
    (id, token)
}

/// Create a salesman and return (id, access token).
pub async fn salesman_fixture(pool: &PgPool) -> (DbId, String) {
    let id = create_user(pool, "Sam Seller", "sam@maison.test", "salesman").await;
    let token = login_token(pool, "sam@maison.test").await;
    (id, token)
}

/// Submit a minimal valid lead through the public endpoint, returning
/// its id.
pub async fn submit_lead(pool: &PgPool, name: &str, source: Option<&str>) -> DbId {
    let mut payload = serde_json::json!({
        "name": name,
        "phone": "+91-9876543210",
        "location": "Bengaluru",
        "requirement": "2BHK interiors",
        "consent": true,
    });
    if let Some(source) = source {
        payload["utmSource"] = serde_json::json!(source);
    }

    let app = build_test_app(pool.clone());
    let response = post_json(app, "/api/cta/submit", payload).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["id"].as_i64().unwrap()
}
