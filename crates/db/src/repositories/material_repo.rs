//! Repository for the `project_materials` table.

use sqlx::PgPool;

use maison_core::types::DbId;

use crate::models::material::{CreateMaterial, Material, UpdateMaterial};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, project_id, name, vendor, quantity, unit, status, created_at, updated_at";

/// Provides CRUD operations for project materials.
pub struct MaterialRepo;

impl MaterialRepo {
    /// Insert a material at status `ordered`, returning the created row.
    pub async fn create(
        pool: &PgPool,
        project_id: DbId,
        input: &CreateMaterial,
    ) -> Result<Material, sqlx::Error> {
        let query = format!(
            "INSERT INTO project_materials (project_id, name, vendor, quantity, unit)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Material>(&query)
            .bind(project_id)
            .bind(&input.name)
            .bind(&input.vendor)
            .bind(input.quantity)
            .bind(&input.unit)
            .fetch_one(pool)
            .await
    }

    /// Find a material scoped to its project.
    pub async fn find_by_id(
        pool: &PgPool,
        project_id: DbId,
        id: DbId,
    ) -> Result<Option<Material>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM project_materials WHERE project_id = $1 AND id = $2");
        sqlx::query_as::<_, Material>(&query)
            .bind(project_id)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List a project's materials, oldest first.
    pub async fn list_by_project(
        pool: &PgPool,
        project_id: DbId,
    ) -> Result<Vec<Material>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM project_materials WHERE project_id = $1 ORDER BY id"
        );
        sqlx::query_as::<_, Material>(&query)
            .bind(project_id)
            .fetch_all(pool)
            .await
    }

    /// Update a material. The handler validates any status transition in
    /// `input` against the forward-only rule before calling this.
    pub async fn update(
        pool: &PgPool,
        project_id: DbId,
        id: DbId,
        input: &UpdateMaterial,
    ) -> Result<Option<Material>, sqlx::Error> {
        let query = format!(
            "UPDATE project_materials SET
                name = COALESCE($3, name),
                vendor = COALESCE($4, vendor),
                quantity = COALESCE($5, quantity),
                unit = COALESCE($6, unit),
                status = COALESCE($7, status),
                updated_at = NOW()
             WHERE project_id = $1 AND id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Material>(&query)
            .bind(project_id)
            .bind(id)
            .bind(&input.name)
            .bind(&input.vendor)
            .bind(input.quantity)
            .bind(&input.unit)
            .bind(input.status)
            .fetch_optional(pool)
            .await
    }

    /// Delete a material. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, project_id: DbId, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM project_materials WHERE project_id = $1 AND id = $2")
            .bind(project_id)
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
