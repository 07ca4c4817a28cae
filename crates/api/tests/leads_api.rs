//! Integration tests for back-office lead management: listing,
//! assignment, and funnel transitions.

mod common;

use axum::http::StatusCode;
use common::{body_json, get_auth, patch_json_auth, put_json_auth};
use sqlx::PgPool;

#[sqlx::test(migrations = "../db/migrations")]
async fn leads_listing_requires_staff(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = common::get(app, "/api/admin/leads").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn captured_leads_appear_in_the_listing(pool: PgPool) {
    let (_id, token) = common::salesman_fixture(&pool).await;
    common::submit_lead(&pool, "Lead One", Some("google")).await;
    common::submit_lead(&pool, "Lead Two", None).await;

    let app = common::build_test_app(pool);
    let response = get_auth(app, "/api/admin/leads", &token).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["total"], 2);
    assert_eq!(json["leads"].as_array().unwrap().len(), 2);
    // New leads enter the funnel at "new".
    assert_eq!(json["leads"][0]["status"], "new");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn listing_filters_by_source(pool: PgPool) {
    let (_id, token) = common::salesman_fixture(&pool).await;
    common::submit_lead(&pool, "Lead One", Some("google")).await;
    common::submit_lead(&pool, "Lead Two", Some("instagram")).await;

    let app = common::build_test_app(pool);
    let response = get_auth(app, "/api/admin/leads?source=google", &token).await;
    let json = body_json(response).await;
    assert_eq!(json["total"], 1);
    assert_eq!(json["leads"][0]["utm_source"], "google");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn funnel_advances_one_stage_at_a_time(pool: PgPool) {
    let (_id, token) = common::salesman_fixture(&pool).await;
    let lead_id = common::submit_lead(&pool, "Lead", None).await;

    let app = common::build_test_app(pool.clone());
    let response = put_json_auth(
        app,
        &format!("/api/admin/leads/{lead_id}/status"),
        &token,
        serde_json::json!({ "status": "contacted" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["status"], "contacted");

    // Skipping from contacted straight to converted is rejected.
    let app = common::build_test_app(pool);
    let response = put_json_auth(
        app,
        &format!("/api/admin/leads/{lead_id}/status"),
        &token,
        serde_json::json!({ "status": "converted" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn dropped_is_terminal(pool: PgPool) {
    let (_id, token) = common::salesman_fixture(&pool).await;
    let lead_id = common::submit_lead(&pool, "Lead", None).await;

    let app = common::build_test_app(pool.clone());
    let response = put_json_auth(
        app,
        &format!("/api/admin/leads/{lead_id}/status"),
        &token,
        serde_json::json!({ "status": "dropped" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let app = common::build_test_app(pool);
    let response = put_json_auth(
        app,
        &format!("/api/admin/leads/{lead_id}/status"),
        &token,
        serde_json::json!({ "status": "contacted" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn lead_can_be_assigned_to_an_active_salesman(pool: PgPool) {
    let (salesman_id, token) = common::salesman_fixture(&pool).await;
    let lead_id = common::submit_lead(&pool, "Lead", None).await;

    let app = common::build_test_app(pool);
    let response = patch_json_auth(
        app,
        &format!("/api/admin/leads/{lead_id}"),
        &token,
        serde_json::json!({ "assigned_to": salesman_id, "note": "call after 6pm" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["assigned_to"], salesman_id);
    assert_eq!(json["note"], "call after 6pm");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn lead_cannot_be_assigned_to_an_admin(pool: PgPool) {
    let (admin_id, token) = common::admin_fixture(&pool).await;
    let lead_id = common::submit_lead(&pool, "Lead", None).await;

    let app = common::build_test_app(pool);
    let response = patch_json_auth(
        app,
        &format!("/api/admin/leads/{lead_id}"),
        &token,
        serde_json::json!({ "assigned_to": admin_id }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn unknown_lead_returns_404(pool: PgPool) {
    let (_id, token) = common::salesman_fixture(&pool).await;

    let app = common::build_test_app(pool);
    let response = get_auth(app, "/api/admin/leads/999999", &token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
