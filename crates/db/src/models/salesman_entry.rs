//! Salesman daily entry (clock-in/out) model.

use chrono::NaiveDate;
use serde::Serialize;
use sqlx::FromRow;

use maison_core::types::{DbId, Timestamp};

/// One attendance row per (salesman, day) from the `salesman_entries`
/// table. `clock_out_at` stays NULL while the entry is open.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct SalesmanEntry {
    pub id: DbId,
    pub user_id: DbId,
    pub entry_date: NaiveDate,
    pub clock_in_at: Timestamp,
    pub clock_out_at: Option<Timestamp>,
    pub created_at: Timestamp,
}
