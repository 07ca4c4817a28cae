//! Repository for the `cta_configs` table.

use sqlx::PgPool;

use crate::models::cta_config::CtaConfig;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, key, config, created_at, updated_at";

/// Provides lookup and upsert for landing-page config blobs.
pub struct CtaConfigRepo;

impl CtaConfigRepo {
    /// Find a config blob by its variant key.
    pub async fn find_by_key(pool: &PgPool, key: &str) -> Result<Option<CtaConfig>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM cta_configs WHERE key = $1");
        sqlx::query_as::<_, CtaConfig>(&query)
            .bind(key)
            .fetch_optional(pool)
            .await
    }

    /// Insert or replace the config blob for a key, returning the row.
    pub async fn upsert(
        pool: &PgPool,
        key: &str,
        config: &serde_json::Value,
    ) -> Result<CtaConfig, sqlx::Error> {
        let query = format!(
            "INSERT INTO cta_configs (key, config)
             VALUES ($1, $2)
             ON CONFLICT (key) DO UPDATE SET config = EXCLUDED.config, updated_at = NOW()
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, CtaConfig>(&query)
            .bind(key)
            .bind(config)
            .fetch_one(pool)
            .await
    }
}
