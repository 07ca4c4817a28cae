//! Project milestone model and DTOs.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use maison_core::types::{DbId, Money, Timestamp};

/// A payment/approval checkpoint row from the `project_milestones` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Milestone {
    pub id: DbId,
    pub project_id: DbId,
    pub title: String,
    pub amount: Money,
    pub due_on: Option<NaiveDate>,
    /// Ordering within the project; lower comes first.
    pub position: i32,
    pub is_paid: bool,
    pub paid_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a milestone.
#[derive(Debug, Deserialize)]
pub struct CreateMilestone {
    pub title: String,
    pub amount: Money,
    pub due_on: Option<NaiveDate>,
    pub position: Option<i32>,
}

/// DTO for updating a milestone. Payment state is changed through the
/// mark-paid endpoint, not here.
#[derive(Debug, Deserialize)]
pub struct UpdateMilestone {
    pub title: Option<String>,
    pub amount: Option<Money>,
    pub due_on: Option<NaiveDate>,
    pub position: Option<i32>,
}
