//! Back-office handlers for project materials
//! (`/api/admin/projects/{project_id}/materials`).

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use maison_core::error::CoreError;
use maison_core::types::DbId;
use maison_db::models::material::{CreateMaterial, Material, UpdateMaterial};
use maison_db::repositories::{MaterialRepo, ProjectRepo};

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

/// POST /api/admin/projects/{project_id}/materials
pub async fn create(
    _staff: RequireStaff,
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
    Json(input): Json<CreateMaterial>,
) -> AppResult<(StatusCode, Json<Material>)> {
    ensure_project(&state, project_id).await?;

    if input.name.trim().is_empty() {
        return Err(AppError::BadRequest("name must not be empty".into()));
    }
    if input.quantity <= 0 {
        return Err(AppError::BadRequest("quantity must be positive".into()));
    }

    let material = MaterialRepo::create(&state.pool, project_id, &input).await?;
    Ok((StatusCode::CREATED, Json(material)))
}

/// GET /api/admin/projects/{project_id}/materials
pub async fn list(
    _staff: RequireStaff,
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
) -> AppResult<Json<Vec<Material>>> {
    ensure_project(&state, project_id).await?;
    let materials = MaterialRepo::list_by_project(&state.pool, project_id).await?;
    Ok(Json(materials))
}

/// PUT /api/admin/projects/{project_id}/materials/{id}
///
/// Material status only moves forward (`ordered -> received ->
/// installed`); a backward or skipping status returns 409.
pub async fn update(
    _staff: RequireStaff,
    State(state): State<AppState>,
    Path((project_id, id)): Path<(DbId, DbId)>,
    Json(input): Json<UpdateMaterial>,
) -> AppResult<Json<Material>> {
    if matches!(input.quantity, Some(quantity) if quantity <= 0) {
        return Err(AppError::BadRequest("quantity must be positive".into()));
    }

    if let Some(next_status) = input.status {
        let current = MaterialRepo::find_by_id(&state.pool, project_id, id)
            .await?
            .ok_or(AppError::Core(CoreError::NotFound {
                entity: "Material",
                id,
            }))?;

        if current.status != next_status && !current.status.can_transition_to(next_status) {
            return Err(AppError::Core(CoreError::Conflict(
                "Material status can only advance one step forward".into(),
            )));
        }
    }

    let material = MaterialRepo::update(&state.pool, project_id, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Material",
            id,
        }))?;
    Ok(Json(material))
}

/// DELETE /api/admin/projects/{project_id}/materials/{id}
pub async fn delete(
    _staff: RequireStaff,
    State(state): State<AppState>,
    Path((project_id, id)): Path<(DbId, DbId)>,
) -> AppResult<StatusCode> {
    let deleted = MaterialRepo::delete(&state.pool, project_id, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Material",
            id,
        }));
    }
    Ok(StatusCode::NO_CONTENT)
}
