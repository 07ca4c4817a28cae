//! Repository for the `leads` table.

use sqlx::PgPool;

use maison_core::types::DbId;
use maison_core::workflow::LeadStatus;

use crate::models::lead::{CreateLead, Lead, LeadFilter, UpdateLead};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, phone, email, location, requirement, message, consent, \
                        utm_source, utm_medium, utm_campaign, variant, status, assigned_to, \
                        note, ip_address, user_agent, created_at, updated_at";

/// Provides CRUD operations for leads.
pub struct LeadRepo;

impl LeadRepo {
    /// Insert a new lead with `consent = true` and status `new`,
    /// returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateLead) -> Result<Lead, sqlx::Error> {
        let query = format!(
            "INSERT INTO leads (name, phone, email, location, requirement, message, consent,
                                utm_source, utm_medium, utm_campaign, variant,
                                ip_address, user_agent)
             VALUES ($1, $2, $3, $4, $5, $6, true, $7, $8, $9, $10, $11, $12)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Lead>(&query)
            .bind(&input.name)
            .bind(&input.phone)
            .bind(&input.email)
            .bind(&input.location)
            .bind(&input.requirement)
            .bind(&input.message)
            .bind(&input.utm_source)
            .bind(&input.utm_medium)
            .bind(&input.utm_campaign)
            .bind(&input.variant)
            .bind(&input.ip_address)
            .bind(&input.user_agent)
            .fetch_one(pool)
            .await
    }

    /// Find a lead by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Lead>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM leads WHERE id = $1");
        sqlx::query_as::<_, Lead>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List leads newest-first with optional status/source filters.
    pub async fn list(
        pool: &PgPool,
        filter: &LeadFilter,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Lead>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM leads
             WHERE ($1::lead_status IS NULL OR status = $1)
               AND ($2::text IS NULL OR utm_source = $2)
             ORDER BY created_at DESC
             LIMIT $3 OFFSET $4"
        );
        sqlx::query_as::<_, Lead>(&query)
            .bind(filter.status)
            .bind(&filter.source)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Count leads matching the same filters as [`list`](Self::list).
    pub async fn count(pool: &PgPool, filter: &LeadFilter) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM leads
             WHERE ($1::lead_status IS NULL OR status = $1)
               AND ($2::text IS NULL OR utm_source = $2)",
        )
        .bind(filter.status)
        .bind(&filter.source)
        .fetch_one(pool)
        .await
    }

    /// Overwrite the lead's status. Transition legality is checked by the
    /// handler against `maison_core::workflow` before calling this.
    pub async fn update_status(
        pool: &PgPool,
        id: DbId,
        status: LeadStatus,
    ) -> Result<Option<Lead>, sqlx::Error> {
        let query = format!(
            "UPDATE leads SET status = $2, updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Lead>(&query)
            .bind(id)
            .bind(status)
            .fetch_optional(pool)
            .await
    }

    /// Partial update for note and assignment. Only non-`None` fields are
    /// applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateLead,
    ) -> Result<Option<Lead>, sqlx::Error> {
        let query = format!(
            "UPDATE leads SET
                note = COALESCE($2, note),
                assigned_to = COALESCE($3, assigned_to),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Lead>(&query)
            .bind(id)
            .bind(&input.note)
            .bind(input.assigned_to)
            .fetch_optional(pool)
            .await
    }
}
