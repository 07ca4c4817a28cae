//! Design (catalog item) model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use maison_core::types::{DbId, Money, Timestamp};

/// A design row from the `designs` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Design {
    pub id: DbId,
    pub name: String,
    /// URL-safe unique identifier used by the public site.
    pub slug: String,
    pub category: String,
    pub description: Option<String>,
    /// Rate per square foot in minor units.
    pub rate: Money,
    pub image_url: Option<String>,
    pub is_published: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new design.
#[derive(Debug, Deserialize)]
pub struct CreateDesign {
    pub name: String,
    pub slug: String,
    pub category: String,
    pub description: Option<String>,
    pub rate: Money,
    pub image_url: Option<String>,
    /// Defaults to false: new designs stay hidden until published.
    pub is_published: Option<bool>,
}

/// DTO for updating an existing design. All fields are optional.
#[derive(Debug, Deserialize)]
pub struct UpdateDesign {
    pub name: Option<String>,
    pub slug: Option<String>,
    pub category: Option<String>,
    pub description: Option<String>,
    pub rate: Option<Money>,
    pub image_url: Option<String>,
    pub is_published: Option<bool>,
}
