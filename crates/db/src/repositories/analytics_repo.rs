//! Grouped-count queries over the `leads` table for the analytics
//! endpoint.
//!
//! All queries take a half-open UTC timestamp range `[from, to)`; the
//! handler widens the inclusive `to` date by one day before calling.

use chrono::NaiveDate;
use sqlx::{FromRow, PgPool};

use maison_core::types::Timestamp;

/// One row of the per-day breakdown.
#[derive(Debug, FromRow)]
pub struct DayCount {
    pub day: NaiveDate,
    pub count: i64,
}

/// One row of a labelled breakdown (source or variant).
#[derive(Debug, FromRow)]
pub struct LabelCount {
    pub label: String,
    pub count: i64,
}

/// Read-only aggregation queries for lead analytics.
pub struct AnalyticsRepo;

impl AnalyticsRepo {
    /// Total leads captured in the range.
    pub async fn total(pool: &PgPool, from: Timestamp, to: Timestamp) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM leads WHERE created_at >= $1 AND created_at < $2",
        )
        .bind(from)
        .bind(to)
        .fetch_one(pool)
        .await
    }

    /// Lead counts grouped by UTC calendar day.
    pub async fn by_day(
        pool: &PgPool,
        from: Timestamp,
        to: Timestamp,
    ) -> Result<Vec<DayCount>, sqlx::Error> {
        sqlx::query_as::<_, DayCount>(
            "SELECT (created_at AT TIME ZONE 'UTC')::date AS day, COUNT(*) AS count
             FROM leads
             WHERE created_at >= $1 AND created_at < $2
             GROUP BY day
             ORDER BY day",
        )
        .bind(from)
        .bind(to)
        .fetch_all(pool)
        .await
    }

    /// Lead counts grouped by UTM source. Blank or missing sources group
    /// under `direct`.
    pub async fn by_source(
        pool: &PgPool,
        from: Timestamp,
        to: Timestamp,
    ) -> Result<Vec<LabelCount>, sqlx::Error> {
        sqlx::query_as::<_, LabelCount>(
            "SELECT COALESCE(NULLIF(TRIM(utm_source), ''), 'direct') AS label, COUNT(*) AS count
             FROM leads
             WHERE created_at >= $1 AND created_at < $2
             GROUP BY label
             ORDER BY count DESC, label",
        )
        .bind(from)
        .bind(to)
        .fetch_all(pool)
        .await
    }

    /// Lead counts grouped by landing-page variant. Missing variants group
    /// under `default`.
    pub async fn by_variant(
        pool: &PgPool,
        from: Timestamp,
        to: Timestamp,
    ) -> Result<Vec<LabelCount>, sqlx::Error> {
        sqlx::query_as::<_, LabelCount>(
            "SELECT COALESCE(NULLIF(TRIM(variant), ''), 'default') AS label, COUNT(*) AS count
             FROM leads
             WHERE created_at >= $1 AND created_at < $2
             GROUP BY label
             ORDER BY count DESC, label",
        )
        .bind(from)
        .bind(to)
        .fetch_all(pool)
        .await
    }
}
