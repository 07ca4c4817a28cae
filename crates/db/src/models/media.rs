//! Project media reference model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use maison_core::types::{DbId, Timestamp};
use maison_core::workflow::MediaKind;

/// A media reference row from the `project_media` table. Stores URLs
/// only; file storage itself lives elsewhere.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct MediaItem {
    pub id: DbId,
    pub project_id: DbId,
    pub kind: MediaKind,
    pub url: String,
    pub caption: Option<String>,
    pub created_at: Timestamp,
}

/// DTO for attaching a media reference to a project.
#[derive(Debug, Deserialize)]
pub struct CreateMediaItem {
    pub kind: MediaKind,
    pub url: String,
    pub caption: Option<String>,
}
