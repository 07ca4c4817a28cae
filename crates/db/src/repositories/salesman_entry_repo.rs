//! Repository for the `salesman_entries` table.
//!
//! One row per (salesman, day), enforced by a unique constraint. The
//! clock-out update is keyed on `clock_out_at IS NULL` so a double
//! clock-out affects zero rows and surfaces as a conflict upstream.

use chrono::NaiveDate;
use sqlx::PgPool;

use maison_core::types::DbId;

use crate::models::salesman_entry::SalesmanEntry;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, user_id, entry_date, clock_in_at, clock_out_at, created_at";

/// Provides clock-in/out and listing for salesman daily entries.
pub struct SalesmanEntryRepo;

impl SalesmanEntryRepo {
    /// Find today's entry (UTC calendar day) for a salesman.
    pub async fn find_today(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Option<SalesmanEntry>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM salesman_entries
             WHERE user_id = $1 AND entry_date = CURRENT_DATE"
        );
        sqlx::query_as::<_, SalesmanEntry>(&query)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// Open today's entry with `clock_in_at = NOW()`.
    ///
    /// Fails with a unique violation if today's row already exists; the
    /// handler checks first and treats the race as a conflict.
    pub async fn clock_in(pool: &PgPool, user_id: DbId) -> Result<SalesmanEntry, sqlx::Error> {
        let query = format!(
            "INSERT INTO salesman_entries (user_id, entry_date, clock_in_at)
             VALUES ($1, CURRENT_DATE, NOW())
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, SalesmanEntry>(&query)
            .bind(user_id)
            .fetch_one(pool)
            .await
    }

    /// Close today's open entry. Returns `None` when there is nothing to
    /// close (no entry today, or already clocked out).
    pub async fn clock_out(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Option<SalesmanEntry>, sqlx::Error> {
        let query = format!(
            "UPDATE salesman_entries SET clock_out_at = NOW()
             WHERE user_id = $1 AND entry_date = CURRENT_DATE AND clock_out_at IS NULL
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, SalesmanEntry>(&query)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// List entries, newest day first, optionally filtered by salesman
    /// and date range.
    pub async fn list(
        pool: &PgPool,
        user_id: Option<DbId>,
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
    ) -> Result<Vec<SalesmanEntry>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM salesman_entries
             WHERE ($1::bigint IS NULL OR user_id = $1)
               AND ($2::date IS NULL OR entry_date >= $2)
               AND ($3::date IS NULL OR entry_date <= $3)
             ORDER BY entry_date DESC, user_id"
        );
        sqlx::query_as::<_, SalesmanEntry>(&query)
            .bind(user_id)
            .bind(from)
            .bind(to)
            .fetch_all(pool)
            .await
    }
}
