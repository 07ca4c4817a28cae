//! Integration tests for projects and their child records: milestones,
//! materials, media, and the closure sub-record.

mod common;

use axum::http::StatusCode;
use common::{body_json, get_auth, post_json_auth, put_json_auth};
use sqlx::PgPool;

async fn create_project(pool: &PgPool, token: &str) -> i64 {
    let app = common::build_test_app(pool.clone());
    let response = post_json_auth(
        app,
        "/api/admin/projects",
        token,
        serde_json::json!({
            "client_name": "The Raos",
            "title": "Whitefield 3BHK",
            "budget": 250000000i64,
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["id"].as_i64().unwrap()
}

/// Walk a project along the given stages, asserting each step succeeds.
async fn advance(pool: &PgPool, token: &str, project_id: i64, stages: &[&str]) {
    for stage in stages {
        let app = common::build_test_app(pool.clone());
        let response = put_json_auth(
            app,
            &format!("/api/admin/projects/{project_id}/status"),
            token,
            serde_json::json!({ "status": stage }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK, "moving to {stage}");
    }
}

// ---------------------------------------------------------------------------
// Lifecycle
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn new_projects_start_at_enquiry(pool: PgPool) {
    let (_id, token) = common::salesman_fixture(&pool).await;
    let project_id = create_project(&pool, &token).await;

    let app = common::build_test_app(pool);
    let json = body_json(
        get_auth(app, &format!("/api/admin/projects/{project_id}"), &token).await,
    )
    .await;
    assert_eq!(json["status"], "enquiry");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn lifecycle_cannot_skip_stages(pool: PgPool) {
    let (_id, token) = common::salesman_fixture(&pool).await;
    let project_id = create_project(&pool, &token).await;

    let app = common::build_test_app(pool.clone());
    let response = put_json_auth(
        app,
        &format!("/api/admin/projects/{project_id}/status"),
        &token,
        serde_json::json!({ "status": "production" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    advance(&pool, &token, project_id, &["design", "production"]).await;
}

#[sqlx::test(migrations = "../db/migrations")]
async fn cancelled_projects_are_frozen(pool: PgPool) {
    let (_id, token) = common::salesman_fixture(&pool).await;
    let project_id = create_project(&pool, &token).await;

    advance(&pool, &token, project_id, &["cancelled"]).await;

    let app = common::build_test_app(pool);
    let response = put_json_auth(
        app,
        &format!("/api/admin/projects/{project_id}/status"),
        &token,
        serde_json::json!({ "status": "design" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

// ---------------------------------------------------------------------------
// Milestones
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn milestones_append_in_position_order(pool: PgPool) {
    let (_id, token) = common::salesman_fixture(&pool).await;
    let project_id = create_project(&pool, &token).await;

    for (title, amount) in [("Booking advance", 5000000i64), ("Design sign-off", 10000000)] {
        let app = common::build_test_app(pool.clone());
        let response = post_json_auth(
            app,
            &format!("/api/admin/projects/{project_id}/milestones"),
            &token,
            serde_json::json!({ "title": title, "amount": amount }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let app = common::build_test_app(pool);
    let json = body_json(
        get_auth(
            app,
            &format!("/api/admin/projects/{project_id}/milestones"),
            &token,
        )
        .await,
    )
    .await;
    let milestones = json.as_array().unwrap();
    assert_eq!(milestones.len(), 2);
    assert_eq!(milestones[0]["title"], "Booking advance");
    assert_eq!(milestones[0]["position"], 1);
    assert_eq!(milestones[1]["position"], 2);
    assert_eq!(milestones[0]["is_paid"], false);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn mark_paid_sets_paid_at_once(pool: PgPool) {
    let (_id, token) = common::salesman_fixture(&pool).await;
    let project_id = create_project(&pool, &token).await;

    let app = common::build_test_app(pool.clone());
    let milestone = body_json(
        post_json_auth(
            app,
            &format!("/api/admin/projects/{project_id}/milestones"),
            &token,
            serde_json::json!({ "title": "Advance", "amount": 100000 }),
        )
        .await,
    )
    .await;
    let milestone_id = milestone["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let paid = body_json(
        common::post_auth(
            app,
            &format!("/api/admin/projects/{project_id}/milestones/{milestone_id}/mark-paid"),
            &token,
        )
        .await,
    )
    .await;
    assert_eq!(paid["is_paid"], true);
    let first_paid_at = paid["paid_at"].as_str().unwrap().to_string();

    // Idempotent: a second call keeps the original timestamp.
    let app = common::build_test_app(pool);
    let paid_again = body_json(
        common::post_auth(
            app,
            &format!("/api/admin/projects/{project_id}/milestones/{milestone_id}/mark-paid"),
            &token,
        )
        .await,
    )
    .await;
    assert_eq!(paid_again["paid_at"], first_paid_at.as_str());
}

// ---------------------------------------------------------------------------
// Materials
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn material_status_only_moves_forward(pool: PgPool) {
    let (_id, token) = common::salesman_fixture(&pool).await;
    let project_id = create_project(&pool, &token).await;

    let app = common::build_test_app(pool.clone());
    let material = body_json(
        post_json_auth(
            app,
            &format!("/api/admin/projects/{project_id}/materials"),
            &token,
            serde_json::json!({
                "name": "Plywood BWP 19mm",
                "vendor": "Greenply",
                "quantity": 40,
                "unit": "sheet",
            }),
        )
        .await,
    )
    .await;
    assert_eq!(material["status"], "ordered");
    let material_id = material["id"].as_i64().unwrap();

    // Skipping ordered -> installed is rejected.
    let app = common::build_test_app(pool.clone());
    let response = put_json_auth(
        app,
        &format!("/api/admin/projects/{project_id}/materials/{material_id}"),
        &token,
        serde_json::json!({ "status": "installed" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    // One step forward is fine.
    let app = common::build_test_app(pool);
    let response = put_json_auth(
        app,
        &format!("/api/admin/projects/{project_id}/materials/{material_id}"),
        &token,
        serde_json::json!({ "status": "received" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["status"], "received");
}

// ---------------------------------------------------------------------------
// Media
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn media_attaches_and_lists(pool: PgPool) {
    let (_id, token) = common::salesman_fixture(&pool).await;
    let project_id = create_project(&pool, &token).await;

    let app = common::build_test_app(pool.clone());
    let response = post_json_auth(
        app,
        &format!("/api/admin/projects/{project_id}/media"),
        &token,
        serde_json::json!({
            "kind": "render",
            "url": "https://cdn.maison.test/renders/123.png",
            "caption": "Living room v2",
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let app = common::build_test_app(pool);
    let json = body_json(
        get_auth(
            app,
            &format!("/api/admin/projects/{project_id}/media"),
            &token,
        )
        .await,
    )
    .await;
    assert_eq!(json.as_array().unwrap().len(), 1);
    assert_eq!(json[0]["kind"], "render");
}

// ---------------------------------------------------------------------------
// Closure
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn closure_requires_handover(pool: PgPool) {
    let (_id, token) = common::salesman_fixture(&pool).await;
    let project_id = create_project(&pool, &token).await;

    let app = common::build_test_app(pool);
    let response = put_json_auth(
        app,
        &format!("/api/admin/projects/{project_id}/closure"),
        &token,
        serde_json::json!({ "summary": "done", "final_amount": 100 }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn closure_at_handover_closes_the_project(pool: PgPool) {
    let (_id, token) = common::salesman_fixture(&pool).await;
    let project_id = create_project(&pool, &token).await;
    advance(
        &pool,
        &token,
        project_id,
        &["design", "production", "installation", "handover"],
    )
    .await;

    let app = common::build_test_app(pool.clone());
    let response = put_json_auth(
        app,
        &format!("/api/admin/projects/{project_id}/closure"),
        &token,
        serde_json::json!({ "summary": "Handed over on time", "final_amount": 245000000i64 }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let app = common::build_test_app(pool.clone());
    let project = body_json(
        get_auth(app, &format!("/api/admin/projects/{project_id}"), &token).await,
    )
    .await;
    assert_eq!(project["status"], "closed");

    let app = common::build_test_app(pool);
    let closure = body_json(
        get_auth(
            app,
            &format!("/api/admin/projects/{project_id}/closure"),
            &token,
        )
        .await,
    )
    .await;
    assert_eq!(closure["summary"], "Handed over on time");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn closure_is_404_until_written(pool: PgPool) {
    let (_id, token) = common::salesman_fixture(&pool).await;
    let project_id = create_project(&pool, &token).await;

    let app = common::build_test_app(pool);
    let response = get_auth(
        app,
        &format!("/api/admin/projects/{project_id}/closure"),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
