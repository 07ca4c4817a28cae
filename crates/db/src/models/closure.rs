//! Project closure sub-record model and DTO.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use maison_core::types::{DbId, Money, Timestamp};

/// The single closure row for a finished project, from the
/// `project_closures` table. One per project, written at handover.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ProjectClosure {
    pub id: DbId,
    pub project_id: DbId,
    pub summary: String,
    pub final_amount: Money,
    pub closed_by: DbId,
    pub closed_at: Timestamp,
}

/// DTO for writing (or rewriting) a project's closure record.
#[derive(Debug, Deserialize)]
pub struct UpsertClosure {
    pub summary: String,
    pub final_amount: Money,
}
