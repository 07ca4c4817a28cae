//! Repository for the `project_media` table.

use sqlx::PgPool;

use maison_core::types::DbId;

use crate::models::media::{CreateMediaItem, MediaItem};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, project_id, kind, url, caption, created_at";

/// Provides operations for project media references.
pub struct MediaRepo;

impl MediaRepo {
    /// Attach a media reference to a project.
    pub async fn create(
        pool: &PgPool,
        project_id: DbId,
        input: &CreateMediaItem,
    ) -> Result<MediaItem, sqlx::Error> {
        let query = format!(
            "INSERT INTO project_media (project_id, kind, url, caption)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, MediaItem>(&query)
            .bind(project_id)
            .bind(input.kind)
            .bind(&input.url)
            .bind(&input.caption)
            .fetch_one(pool)
            .await
    }

    /// List a project's media references, newest first.
    pub async fn list_by_project(
        pool: &PgPool,
        project_id: DbId,
    ) -> Result<Vec<MediaItem>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM project_media WHERE project_id = $1 ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, MediaItem>(&query)
            .bind(project_id)
            .fetch_all(pool)
            .await
    }

    /// Delete a media reference. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, project_id: DbId, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM project_media WHERE project_id = $1 AND id = $2")
            .bind(project_id)
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
