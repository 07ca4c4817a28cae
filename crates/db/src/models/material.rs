//! Project material model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use maison_core::types::{DbId, Timestamp};
use maison_core::workflow::MaterialStatus;

/// A tracked-material row from the `project_materials` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Material {
    pub id: DbId,
    pub project_id: DbId,
    pub name: String,
    pub vendor: Option<String>,
    pub quantity: i32,
    /// Unit label, e.g. `"sheet"`, `"sqft"`, `"litre"`.
    pub unit: String,
    pub status: MaterialStatus,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a material. Status always starts at `ordered`.
#[derive(Debug, Deserialize)]
pub struct CreateMaterial {
    pub name: String,
    pub vendor: Option<String>,
    pub quantity: i32,
    pub unit: String,
}

/// DTO for updating a material, including its forward-only status.
#[derive(Debug, Deserialize)]
pub struct UpdateMaterial {
    pub name: Option<String>,
    pub vendor: Option<String>,
    pub quantity: Option<i32>,
    pub unit: Option<String>,
    pub status: Option<MaterialStatus>,
}
