//! Back-office handlers for leads (`/api/admin/leads`).
//!
//! Listing, assignment, notes, and funnel status transitions. Status
//! changes are validated against `maison_core::workflow` so the funnel
//! cannot skip or reverse stages.

use axum::extract::{Path, Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use maison_core::error::CoreError;
use maison_core::roles::ROLE_SALESMAN;
use maison_core::types::DbId;
use maison_core::workflow::LeadStatus;
use maison_db::models::lead::{Lead, LeadFilter, UpdateLead};
use maison_db::repositories::{LeadRepo, UserRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireStaff;
use crate::query::PaginationParams;
use crate::state::AppState;

/// Query parameters for the lead listing.
#[derive(Debug, Deserialize)]
pub struct LeadListQuery {
    pub status: Option<LeadStatus>,
    pub source: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// Paginated lead listing response.
#[derive(Debug, Serialize)]
pub struct LeadListResponse {
    pub leads: Vec<Lead>,
    pub total: i64,
    pub limit: i64,
    pub offset: i64,
}

/// Request body for the status transition endpoint.
#[derive(Debug, Deserialize)]
pub struct UpdateStatusRequest {
    pub status: LeadStatus,
}

/// GET /api/admin/leads
pub async fn list(
    _staff: RequireStaff,
    State(state): State<AppState>,
    Query(query): Query<LeadListQuery>,
) -> AppResult<Json<LeadListResponse>> {
    let filter = LeadFilter {
        status: query.status,
        source: query.source.clone(),
    };
    let page = PaginationParams {
        limit: query.limit,
        offset: query.offset,
    };
    let limit = page.limit();
    let offset = page.offset();

    let leads = LeadRepo::list(&state.pool, &filter, limit, offset).await?;
    let total = LeadRepo::count(&state.pool, &filter).await?;

    Ok(Json(LeadListResponse {
        leads,
        total,
        limit,
        offset,
    }))
}

/// GET /api/admin/leads/{id}
pub async fn get_by_id(
    _staff: RequireStaff,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Lead>> {
    let lead = LeadRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Lead", id }))?;
    Ok(Json(lead))
}

/// PATCH /api/admin/leads/{id} -- note and assignment.
///
/// Assignment targets must be active salesmen.
pub async fn update(
    _staff: RequireStaff,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateLead>,
) -> AppResult<Json<Lead>> {
    if let Some(assignee_id) = input.assigned_to {
        let assignee = UserRepo::find_by_id(&state.pool, assignee_id)
            .await?
            .ok_or_else(|| {
                AppError::BadRequest(format!("Assignee {assignee_id} does not exist"))
            })?;
        if assignee.role != ROLE_SALESMAN || !assignee.is_active {
            return Err(AppError::BadRequest(
                "Leads can only be assigned to active salesmen".into(),
            ));
        }
    }

    let lead = LeadRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Lead", id }))?;
    Ok(Json(lead))
}

/// PUT /api/admin/leads/{id}/status
///
/// Moves the lead along the funnel. Illegal transitions return 409.
pub async fn update_status(
    _staff: RequireStaff,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateStatusRequest>,
) -> AppResult<Json<Lead>> {
    let lead = LeadRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Lead", id }))?;

    if !lead.status.can_transition_to(input.status) {
        return Err(AppError::Core(CoreError::Conflict(format!(
            "Cannot move lead from '{}' to '{}'",
            lead.status.as_str(),
            input.status.as_str()
        ))));
    }

    let updated = LeadRepo::update_status(&state.pool, id, input.status)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Lead", id }))?;

    tracing::info!(
        lead_id = id,
        from = lead.status.as_str(),
        to = input.status.as_str(),
        "Lead status changed"
    );
    Ok(Json(updated))
}
