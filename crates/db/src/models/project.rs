//! Project (interior engagement) model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use maison_core::types::{DbId, Money, Timestamp};
use maison_core::workflow::ProjectStatus;

/// A project row from the `projects` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Project {
    pub id: DbId,
    /// The lead this engagement originated from, if any.
    pub lead_id: Option<DbId>,
    pub client_name: String,
    pub title: String,
    pub status: ProjectStatus,
    pub budget: Option<Money>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new project. Status always starts at `enquiry`.
#[derive(Debug, Deserialize)]
pub struct CreateProject {
    pub lead_id: Option<DbId>,
    pub client_name: String,
    pub title: String,
    pub budget: Option<Money>,
}

/// DTO for updating a project's descriptive fields. Status changes go
/// through the dedicated status endpoint so transitions are validated.
#[derive(Debug, Deserialize)]
pub struct UpdateProject {
    pub client_name: Option<String>,
    pub title: Option<String>,
    pub budget: Option<Money>,
}
