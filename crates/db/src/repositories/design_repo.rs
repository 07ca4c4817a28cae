//! Repository for the `designs` table.

use sqlx::PgPool;

use maison_core::types::DbId;

use crate::models::design::{CreateDesign, Design, UpdateDesign};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, name, slug, category, description, rate, image_url, is_published, created_at, updated_at";

/// Provides CRUD operations for catalog designs.
pub struct DesignRepo;

impl DesignRepo {
    /// Insert a new design, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateDesign) -> Result<Design, sqlx::Error> {
        let query = format!(
            "INSERT INTO designs (name, slug, category, description, rate, image_url, is_published)
             VALUES ($1, $2, $3, $4, $5, $6, COALESCE($7, false))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Design>(&query)
            .bind(&input.name)
            .bind(&input.slug)
            .bind(&input.category)
            .bind(&input.description)
            .bind(input.rate)
            .bind(&input.image_url)
            .bind(input.is_published)
            .fetch_one(pool)
            .await
    }

    /// Find a design by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Design>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM designs WHERE id = $1");
        sqlx::query_as::<_, Design>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List designs newest-first, optionally including unpublished ones.
    pub async fn list(pool: &PgPool, include_unpublished: bool) -> Result<Vec<Design>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM designs
             WHERE ($1 OR is_published = true)
             ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, Design>(&query)
            .bind(include_unpublished)
            .fetch_all(pool)
            .await
    }

    /// Update a design. Only non-`None` fields in `input` are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateDesign,
    ) -> Result<Option<Design>, sqlx::Error> {
        let query = format!(
            "UPDATE designs SET
                name = COALESCE($2, name),
                slug = COALESCE($3, slug),
                category = COALESCE($4, category),
                description = COALESCE($5, description),
                rate = COALESCE($6, rate),
                image_url = COALESCE($7, image_url),
                is_published = COALESCE($8, is_published),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Design>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.slug)
            .bind(&input.category)
            .bind(&input.description)
            .bind(input.rate)
            .bind(&input.image_url)
            .bind(input.is_published)
            .fetch_optional(pool)
            .await
    }

    /// Delete a design. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM designs WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
