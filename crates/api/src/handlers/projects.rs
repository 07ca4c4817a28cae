//! Back-office handlers for projects (`/api/admin/projects`), including
//! the status endpoint and the closure sub-record.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use maison_core::error::CoreError;
use maison_core::types::DbId;
use maison_core::workflow::ProjectStatus;
use maison_db::models::closure::{ProjectClosure, UpsertClosure};
use maison_db::models::project::{CreateProject, Project, UpdateProject};
use maison_db::repositories::{ClosureRepo, LeadRepo, ProjectRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireStaff;
use crate::state::AppState;

/// Request body for the status transition endpoint.
#[derive(Debug, Deserialize)]
pub struct UpdateStatusRequest {
    pub status: ProjectStatus,
}

/// POST /api/admin/projects
pub async fn create(
    RequireStaff(staff): RequireStaff,
    State(state): State<AppState>,
    Json(input): Json<CreateProject>,
) -> AppResult<(StatusCode, Json<Project>)> {
    if input.client_name.trim().is_empty() {
        return Err(AppError::BadRequest("client_name must not be empty".into()));
    }
    if input.title.trim().is_empty() {
        return Err(AppError::BadRequest("title must not be empty".into()));
    }
    if let Some(lead_id) = input.lead_id {
        LeadRepo::find_by_id(&state.pool, lead_id)
            .await?
            .ok_or_else(|| AppError::BadRequest(format!("Lead {lead_id} does not exist")))?;
    }

    let project = ProjectRepo::create(&state.pool, &input).await?;
    tracing::info!(project_id = project.id, by = staff.user_id, "Project created");
    Ok((StatusCode::CREATED, Json(project)))
}

/// GET /api/admin/projects
pub async fn list(
    _staff: RequireStaff,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<Project>>> {
    let projects = ProjectRepo::list(&state.pool).await?;
    Ok(Json(projects))
}

/// GET /api/admin/projects/{id}
pub async fn get_by_id(
    _staff: RequireStaff,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Project>> {
    let project = ProjectRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))?;
    Ok(Json(project))
}

/// PUT /api/admin/projects/{id}
pub async fn update(
    _staff: RequireStaff,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateProject>,
) -> AppResult<Json<Project>> {
    let project = ProjectRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))?;
    Ok(Json(project))
}

/// PUT /api/admin/projects/{id}/status
///
/// Moves the project one lifecycle stage. Illegal transitions return 409.
pub async fn update_status(
    _staff: RequireStaff,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateStatusRequest>,
) -> AppResult<Json<Project>> {
    let project = ProjectRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))?;

    if !project.status.can_transition_to(input.status) {
        return Err(AppError::Core(CoreError::Conflict(format!(
            "Cannot move project from '{}' to '{}'",
            project.status.as_str(),
            input.status.as_str()
        ))));
    }

    let updated = ProjectRepo::update_status(&state.pool, id, input.status)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))?;

    tracing::info!(
        project_id = id,
        from = project.status.as_str(),
        to = input.status.as_str(),
        "Project status changed"
    );
    Ok(Json(updated))
}

/// DELETE /api/admin/projects/{id}
pub async fn delete(
    RequireStaff(staff): RequireStaff,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = ProjectRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }));
    }
    tracing::info!(project_id = id, by = staff.user_id, "Project deleted");
    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Closure sub-record
// ---------------------------------------------------------------------------

/// GET /api/admin/projects/{id}/closure
pub async fn get_closure(
    _staff: RequireStaff,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ProjectClosure>> {
    // 404 on the project before 404 on the closure so the two cases read
    // differently to the client.
    ProjectRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))?;

    let closure = ClosureRepo::find_by_project(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Project {id} has no closure record")))?;
    Ok(Json(closure))
}

/// PUT /api/admin/projects/{id}/closure
///
/// Writes the closure record and moves the project to `closed`. Only a
/// project at `handover` can be closed; anything else returns 409.
pub async fn put_closure(
    RequireStaff(staff): RequireStaff,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpsertClosure>,
) -> AppResult<Json<ProjectClosure>> {
    let project = ProjectRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))?;

    if input.final_amount < 0 {
        return Err(AppError::BadRequest(
            "final_amount must not be negative".into(),
        ));
    }

    // Rewriting the closure of an already-closed project is allowed;
    // closing from any other stage must be a legal transition.
    if project.status != ProjectStatus::Closed
        && !project.status.can_transition_to(ProjectStatus::Closed)
    {
        return Err(AppError::Core(CoreError::Conflict(format!(
            "Cannot close a project at '{}'",
            project.status.as_str()
        ))));
    }

    let closure = ClosureRepo::upsert(
        &state.pool,
        id,
        input.summary.trim(),
        input.final_amount,
        staff.user_id,
    )
    .await?;

    if project.status != ProjectStatus::Closed {
        ProjectRepo::update_status(&state.pool, id, ProjectStatus::Closed).await?;
    }

    tracing::info!(project_id = id, by = staff.user_id, "Project closed");
    Ok(Json(closure))
}
