//! Repository for the `project_milestones` table.
//!
//! All lookups are scoped by `(project_id, id)` so a milestone can never
//! be read or mutated through another project's URL.

use sqlx::PgPool;

use maison_core::types::DbId;

use crate::models::milestone::{CreateMilestone, Milestone, UpdateMilestone};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, project_id, title, amount, due_on, position, is_paid, paid_at, \
                        created_at, updated_at";

/// Provides CRUD operations for project milestones.
pub struct MilestoneRepo;

impl MilestoneRepo {
    /// Insert a milestone for a project. When `position` is omitted the
    /// milestone is appended after the current maximum.
    pub async fn create(
        pool: &PgPool,
        project_id: DbId,
        input: &CreateMilestone,
    ) -> Result<Milestone, sqlx::Error> {
        let query = format!(
            "INSERT INTO project_milestones (project_id, title, amount, due_on, position)
             VALUES ($1, $2, $3, $4,
                     COALESCE($5, (SELECT COALESCE(MAX(position), 0) + 1
                                   FROM project_milestones WHERE project_id = $1)))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Milestone>(&query)
            .bind(project_id)
            .bind(&input.title)
            .bind(input.amount)
            .bind(input.due_on)
            .bind(input.position)
            .fetch_one(pool)
            .await
    }

    /// List a project's milestones in position order.
    pub async fn list_by_project(
        pool: &PgPool,
        project_id: DbId,
    ) -> Result<Vec<Milestone>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM project_milestones
             WHERE project_id = $1
             ORDER BY position, id"
        );
        sqlx::query_as::<_, Milestone>(&query)
            .bind(project_id)
            .fetch_all(pool)
            .await
    }

    /// Update a milestone's descriptive fields.
    pub async fn update(
        pool: &PgPool,
        project_id: DbId,
        id: DbId,
        input: &UpdateMilestone,
    ) -> Result<Option<Milestone>, sqlx::Error> {
        let query = format!(
            "UPDATE project_milestones SET
                title = COALESCE($3, title),
                amount = COALESCE($4, amount),
                due_on = COALESCE($5, due_on),
                position = COALESCE($6, position),
                updated_at = NOW()
             WHERE project_id = $1 AND id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Milestone>(&query)
            .bind(project_id)
            .bind(id)
            .bind(&input.title)
            .bind(input.amount)
            .bind(input.due_on)
            .bind(input.position)
            .fetch_optional(pool)
            .await
    }

    /// Mark a milestone as paid now. Idempotent: an already-paid
    /// milestone keeps its original `paid_at`.
    pub async fn mark_paid(
        pool: &PgPool,
        project_id: DbId,
        id: DbId,
    ) -> Result<Option<Milestone>, sqlx::Error> {
        let query = format!(
            "UPDATE project_milestones SET
                is_paid = true,
                paid_at = COALESCE(paid_at, NOW()),
                updated_at = NOW()
             WHERE project_id = $1 AND id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Milestone>(&query)
            .bind(project_id)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Delete a milestone. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, project_id: DbId, id: DbId) -> Result<bool, sqlx::Error> {
        let result =
            sqlx::query("DELETE FROM project_milestones WHERE project_id = $1 AND id = $2")
                .bind(project_id)
                .bind(id)
                .execute(pool)
                .await?;
        Ok(result.rows_affected() > 0)
    }
}
