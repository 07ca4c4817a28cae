//! Repository for the `project_closures` table.

use sqlx::PgPool;

use maison_core::types::{DbId, Money};

use crate::models::closure::ProjectClosure;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, project_id, summary, final_amount, closed_by, closed_at";

/// Provides lookup and upsert for the one-per-project closure record.
pub struct ClosureRepo;

impl ClosureRepo {
    /// Find the closure record for a project, if written.
    pub async fn find_by_project(
        pool: &PgPool,
        project_id: DbId,
    ) -> Result<Option<ProjectClosure>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM project_closures WHERE project_id = $1");
        sqlx::query_as::<_, ProjectClosure>(&query)
            .bind(project_id)
            .fetch_optional(pool)
            .await
    }

    /// Write (or rewrite) a project's closure record, returning the row.
    pub async fn upsert(
        pool: &PgPool,
        project_id: DbId,
        summary: &str,
        final_amount: Money,
        closed_by: DbId,
    ) -> Result<ProjectClosure, sqlx::Error> {
        let query = format!(
            "INSERT INTO project_closures (project_id, summary, final_amount, closed_by)
             VALUES ($1, $2, $3, $4)
             ON CONFLICT (project_id) DO UPDATE SET
                summary = EXCLUDED.summary,
                final_amount = EXCLUDED.final_amount,
                closed_by = EXCLUDED.closed_by,
                closed_at = NOW()
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ProjectClosure>(&query)
            .bind(project_id)
            .bind(summary)
            .bind(final_amount)
            .bind(closed_by)
            .fetch_one(pool)
            .await
    }
}
