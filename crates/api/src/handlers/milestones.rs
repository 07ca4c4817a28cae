//! Back-office handlers for project milestones
//! (`/api/admin/projects/{project_id}/milestones`).

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use maison_core::error::CoreError;
use maison_core::types::DbId;
use maison_db::models::milestone::{CreateMilestone, Milestone, UpdateMilestone};
use maison_db::repositories::{MilestoneRepo, ProjectRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireStaff;
use crate::state::AppState;

/// Shared guard: the parent project must exist.
async fn ensure_project(state: &AppState, project_id: DbId) -> AppResult<()> {
    ProjectRepo::find_by_id(&state.pool, project_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id: project_id,
        }))?;
    Ok(())
}

/// POST /api/admin/projects/{project_id}/milestones
pub async fn create(
    _staff: RequireStaff,
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
    Json(input): Json<CreateMilestone>,
) -> AppResult<(StatusCode, Json<Milestone>)> {
    ensure_project(&state, project_id).await?;

    if input.title.trim().is_empty() {
        return Err(AppError::BadRequest("title must not be empty".into()));
    }
    if input.amount < 0 {
        return Err(AppError::BadRequest("amount must not be negative".into()));
    }

    let milestone = MilestoneRepo::create(&state.pool, project_id, &input).await?;
    Ok((StatusCode::CREATED, Json(milestone)))
}

/// GET /api/admin/projects/{project_id}/milestones
pub async fn list(
    _staff: RequireStaff,
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
) -> AppResult<Json<Vec<Milestone>>> {
    ensure_project(&state, project_id).await?;
    let milestones = MilestoneRepo::list_by_project(&state.pool, project_id).await?;
    Ok(Json(milestones))
}

/// PUT /api/admin/projects/{project_id}/milestones/{id}
pub async fn update(
    _staff: RequireStaff,
    State(state): State<AppState>,
    Path((project_id, id)): Path<(DbId, DbId)>,
    Json(input): Json<UpdateMilestone>,
) -> AppResult<Json<Milestone>> {
    if matches!(input.amount, Some(amount) if amount < 0) {
        return Err(AppError::BadRequest("amount must not be negative".into()));
    }

    let milestone = MilestoneRepo::update(&state.pool, project_id, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Milestone",
            id,
        }))?;
    Ok(Json(milestone))
}

/// POST /api/admin/projects/{project_id}/milestones/{id}/mark-paid
pub async fn mark_paid(
    RequireStaff(staff): RequireStaff,
    State(state): State<AppState>,
    Path((project_id, id)): Path<(DbId, DbId)>,
) -> AppResult<Json<Milestone>> {
    let milestone = MilestoneRepo::mark_paid(&state.pool, project_id, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Milestone",
            id,
        }))?;

    tracing::info!(
        project_id,
        milestone_id = id,
        by = staff.user_id,
        "Milestone marked paid"
    );
    Ok(Json(milestone))
}

/// DELETE /api/admin/projects/{project_id}/milestones/{id}
pub async fn delete(
    _staff: RequireStaff,
    State(state): State<AppState>,
    Path((project_id, id)): Path<(DbId, DbId)>,
) -> AppResult<StatusCode> {
    let deleted = MilestoneRepo::delete(&state.pool, project_id, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Milestone",
            id,
        }));
    }
    Ok(StatusCode::NO_CONTENT)
}
