//! Back-office handlers for the design catalog (`/api/admin/designs`).
//!
//! Reads are open to staff; writes are admin-only.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use maison_core::error::CoreError;
use maison_core::types::DbId;
use maison_db::models::design::{CreateDesign, Design, UpdateDesign};
use maison_db::repositories::DesignRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::{RequireAdmin, RequireStaff};
use crate::state::AppState;

/// Query parameters for the staff design listing.
#[derive(Debug, Deserialize)]
pub struct DesignListQuery {
    /// Include unpublished designs (default true for the back office).
    pub include_unpublished: Option<bool>,
}

/// POST /api/admin/designs
pub async fn create(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<CreateDesign>,
) -> AppResult<(StatusCode, Json<Design>)> {
    if input.name.trim().is_empty() {
        return Err(AppError::BadRequest("name must not be empty".into()));
    }
    if input.slug.trim().is_empty() {
        return Err(AppError::BadRequest("slug must not be empty".into()));
    }
    if input.rate < 0 {
        return Err(AppError::BadRequest("rate must not be negative".into()));
    }

    let design = DesignRepo::create(&state.pool, &input).await?;
    tracing::info!(design_id = design.id, by = admin.user_id, slug = %design.slug, "Design created");
    Ok((StatusCode::CREATED, Json(design)))
}

/// GET /api/admin/designs
pub async fn list(
    _staff: RequireStaff,
    State(state): State<AppState>,
    Query(query): Query<DesignListQuery>,
) -> AppResult<Json<Vec<Design>>> {
    let include_unpublished = query.include_unpublished.unwrap_or(true);
    let designs = DesignRepo::list(&state.pool, include_unpublished).await?;
    Ok(Json(designs))
}

/// GET /api/admin/designs/{id}
pub async fn get_by_id(
    _staff: RequireStaff,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Design>> {
    let design = DesignRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Design",
            id,
        }))?;
    Ok(Json(design))
}

/// PUT /api/admin/designs/{id}
pub async fn update(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateDesign>,
) -> AppResult<Json<Design>> {
    if matches!(input.rate, Some(rate) if rate < 0) {
        return Err(AppError::BadRequest("rate must not be negative".into()));
    }

    let design = DesignRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Design",
            id,
        }))?;
    Ok(Json(design))
}

/// DELETE /api/admin/designs/{id}
pub async fn delete(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = DesignRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Design",
            id,
        }));
    }
    tracing::info!(design_id = id, by = admin.user_id, "Design deleted");
    Ok(StatusCode::NO_CONTENT)
}
