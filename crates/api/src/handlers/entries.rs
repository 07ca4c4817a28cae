//! Handlers for salesman daily entries (`/api/admin/entries`).
//!
//! Clock-in/out is restricted to the `salesman` role; the listing
//! endpoint with a free `salesman_id` filter is admin-only.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::NaiveDate;
use serde::Deserialize;

use maison_core::error::CoreError;
use maison_core::roles::ROLE_SALESMAN;
use maison_core::types::DbId;
use maison_db::models::salesman_entry::SalesmanEntry;
use maison_db::repositories::SalesmanEntryRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::RequireAdmin;
use crate::state::AppState;

/// Query parameters for entry listings.
#[derive(Debug, Deserialize)]
pub struct EntryListQuery {
    pub salesman_id: Option<DbId>,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

fn ensure_salesman(user: &AuthUser) -> AppResult<()> {
    if user.role != ROLE_SALESMAN {
        return Err(AppError::Core(CoreError::Forbidden(
            "Only salesmen clock in and out".into(),
        )));
    }
    Ok(())
}

/// POST /api/admin/entries/clock-in
///
/// Opens today's entry. A second clock-in the same day returns 409.
pub async fn clock_in(
    State(state): State<AppState>,
    user: AuthUser,
) -> AppResult<(StatusCode, Json<SalesmanEntry>)> {
    ensure_salesman(&user)?;

    if SalesmanEntryRepo::find_today(&state.pool, user.user_id)
        .await?
        .is_some()
    {
        return Err(AppError::Core(CoreError::Conflict(
            "Already clocked in today".into(),
        )));
    }

    let entry = SalesmanEntryRepo::clock_in(&state.pool, user.user_id).await?;
    tracing::info!(user_id = user.user_id, "Salesman clocked in");
    Ok((StatusCode::CREATED, Json(entry)))
}

/// POST /api/admin/entries/clock-out
///
/// Closes today's open entry. Returns 409 when there is nothing to close.
pub async fn clock_out(
    State(state): State<AppState>,
    user: AuthUser,
) -> AppResult<Json<SalesmanEntry>> {
    ensure_salesman(&user)?;

    let entry = SalesmanEntryRepo::clock_out(&state.pool, user.user_id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::Conflict("No open entry to clock out of".into()))
        })?;

    tracing::info!(user_id = user.user_id, "Salesman clocked out");
    Ok(Json(entry))
}

/// GET /api/admin/entries/me -- the caller's own history.
pub async fn list_own(
    State(state): State<AppState>,
    user: AuthUser,
    Query(query): Query<EntryListQuery>,
) -> AppResult<Json<Vec<SalesmanEntry>>> {
    ensure_salesman(&user)?;

    let entries =
        SalesmanEntryRepo::list(&state.pool, Some(user.user_id), query.from, query.to).await?;
    Ok(Json(entries))
}

/// GET /api/admin/entries -- admin view over any salesman.
pub async fn list(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    Query(query): Query<EntryListQuery>,
) -> AppResult<Json<Vec<SalesmanEntry>>> {
    let entries =
        SalesmanEntryRepo::list(&state.pool, query.salesman_id, query.from, query.to).await?;
    Ok(Json(entries))
}
