//! Back-office handlers for project media
//! (`/api/admin/projects/{project_id}/media`).

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use maison_core::error::CoreError;
use maison_core::types::DbId;
use maison_db::models::media::{CreateMediaItem, MediaItem};
use maison_db::repositories::{MediaRepo, ProjectRepo};

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

/// POST /api/admin/projects/{project_id}/media
pub async fn create(
    _staff: RequireStaff,
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
    Json(input): Json<CreateMediaItem>,
) -> AppResult<(StatusCode, Json<MediaItem>)> {
    ensure_project(&state, project_id).await?;

    if input.url.trim().is_empty() {
        return Err(AppError::BadRequest("url must not be empty".into()));
    }

    let item = MediaRepo::create(&state.pool, project_id, &input).await?;
    Ok((StatusCode::CREATED, Json(item)))
}

/// GET /api/admin/projects/{project_id}/media
pub async fn list(
    _staff: RequireStaff,
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
) -> AppResult<Json<Vec<MediaItem>>> {
    ensure_project(&state, project_id).await?;
    let items = MediaRepo::list_by_project(&state.pool, project_id).await?;
    Ok(Json(items))
}

/// DELETE /api/admin/projects/{project_id}/media/{id}
pub async fn delete(
    _staff: RequireStaff,
    State(state): State<AppState>,
    Path((project_id, id)): Path<(DbId, DbId)>,
) -> AppResult<StatusCode> {
    let deleted = MediaRepo::delete(&state.pool, project_id, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "MediaItem",
            id,
        }));
    }
    Ok(StatusCode::NO_CONTENT)
}
