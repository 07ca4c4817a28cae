//! Integration tests for the public CTA surface: lead submission,
//! config, analytics, and the published-design listing.

mod common;

use axum::http::StatusCode;
use common::{
    body_json, get, get_with_key, post_json, put_json, put_json_with_key, TEST_API_KEY,
};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Lead submission
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn submit_with_required_fields_returns_201_with_id(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/cta/submit",
        serde_json::json!({
            "name": "Asha Rao",
            "phone": "+91-9876543210",
            "location": "Bengaluru",
            "requirement": "3BHK full interiors",
            "consent": true,
            "email": "asha@example.com",
            "utmSource": "instagram",
            "variant": "hero-b",
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert!(json["id"].is_number());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn submit_without_consent_returns_400_naming_the_field(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/cta/submit",
        serde_json::json!({
            "name": "Asha Rao",
            "phone": "+91-9876543210",
            "location": "Bengaluru",
            "requirement": "3BHK full interiors",
            "consent": false,
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert!(json["fields"]["consent"].is_string());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn submit_with_too_short_name_returns_400(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/cta/submit",
        serde_json::json!({
            "name": "A",
            "phone": "+91-9876543210",
            "location": "Bengaluru",
            "requirement": "wardrobes",
            "consent": true,
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert!(json["fields"]["name"].is_string());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn submit_with_invalid_email_returns_400(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/cta/submit",
        serde_json::json!({
            "name": "Asha Rao",
            "phone": "+91-9876543210",
            "location": "Bengaluru",
            "requirement": "wardrobes",
            "consent": true,
            "email": "not-an-email",
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert!(json["fields"]["email"].is_string());
}

// ---------------------------------------------------------------------------
// Config
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn config_get_unknown_key_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/cta/config?key=missing").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn config_put_without_api_key_returns_401(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = put_json(
        app,
        "/api/cta/config",
        serde_json::json!({ "key": "default", "config": { "headline": "x" } }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn config_put_with_wrong_api_key_returns_401(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = put_json_with_key(
        app,
        "/api/cta/config",
        "wrong-key",
        serde_json::json!({ "config": { "headline": "x" } }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn config_roundtrip_persists_the_blob(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = put_json_with_key(
        app,
        "/api/cta/config",
        TEST_API_KEY,
        serde_json::json!({
            "key": "diwali-2026",
            "config": { "headline": "Festive offer", "cta": "Book now" },
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["ok"], true);
    assert_eq!(json["key"], "diwali-2026");

    let app = common::build_test_app(pool);
    let response = get(app, "/api/cta/config?key=diwali-2026").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["key"], "diwali-2026");
    assert_eq!(json["config"]["headline"], "Festive offer");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn config_put_overwrites_existing_key(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    put_json_with_key(
        app,
        "/api/cta/config",
        TEST_API_KEY,
        serde_json::json!({ "config": { "v": 1 } }),
    )
    .await;

    let app = common::build_test_app(pool.clone());
    put_json_with_key(
        app,
        "/api/cta/config",
        TEST_API_KEY,
        serde_json::json!({ "config": { "v": 2 } }),
    )
    .await;

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/api/cta/config").await).await;
    assert_eq!(json["config"]["v"], 2);
}

// ---------------------------------------------------------------------------
// Analytics
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn analytics_requires_api_key(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/cta/analytics?from=2026-01-01&to=2026-12-31").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn analytics_returns_grouped_counts(pool: PgPool) {
    common::submit_lead(&pool, "Lead One", Some("instagram")).await;
    common::submit_lead(&pool, "Lead Two", Some("instagram")).await;
    common::submit_lead(&pool, "Lead Three", None).await;

    let app = common::build_test_app(pool);
    let response = get_with_key(
        app,
        "/api/cta/analytics?from=2020-01-01&to=2030-12-31",
        TEST_API_KEY,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["total"], 3);
    assert!(json["byDay"].is_array());
    assert!(json["bySource"].is_array());
    assert!(json["byVariant"].is_array());

    // Two instagram leads, one direct.
    let by_source = json["bySource"].as_array().unwrap();
    let instagram = by_source
        .iter()
        .find(|b| b["source"] == "instagram")
        .expect("instagram bucket");
    assert_eq!(instagram["count"], 2);
    let direct = by_source
        .iter()
        .find(|b| b["source"] == "direct")
        .expect("direct bucket");
    assert_eq!(direct["count"], 1);

    // No variants were submitted, so everything lands on "default".
    let by_variant = json["byVariant"].as_array().unwrap();
    assert_eq!(by_variant.len(), 1);
    assert_eq!(by_variant[0]["variant"], "default");
    assert_eq!(by_variant[0]["count"], 3);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn analytics_rejects_bad_and_reversed_dates(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = get_with_key(
        app,
        "/api/cta/analytics?from=garbage&to=2026-01-01",
        TEST_API_KEY,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let app = common::build_test_app(pool);
    let response = get_with_key(
        app,
        "/api/cta/analytics?from=2026-06-01&to=2026-01-01",
        TEST_API_KEY,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Public designs
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn public_design_listing_hides_unpublished(pool: PgPool) {
    let (_admin_id, token) = common::admin_fixture(&pool).await;

    let app = common::build_test_app(pool.clone());
    common::post_json_auth(
        app,
        "/api/admin/designs",
        &token,
        serde_json::json!({
            "name": "Scandinavian Kitchen",
            "slug": "scandi-kitchen",
            "category": "kitchen",
            "rate": 145000,
            "is_published": true,
        }),
    )
    .await;

    let app = common::build_test_app(pool.clone());
    common::post_json_auth(
        app,
        "/api/admin/designs",
        &token,
        serde_json::json!({
            "name": "Unreleased Loft",
            "slug": "unreleased-loft",
            "category": "living",
            "rate": 99000,
        }),
    )
    .await;

    let app = common::build_test_app(pool);
    let response = get(app, "/api/cta/designs").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let designs = json.as_array().unwrap();
    assert_eq!(designs.len(), 1);
    assert_eq!(designs[0]["slug"], "scandi-kitchen");
    // camelCase contract on the public surface.
    assert!(designs[0].get("imageUrl").is_some());
    assert!(designs[0].get("is_published").is_none());
}
