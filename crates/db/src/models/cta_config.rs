//! CTA landing-page configuration model.

use serde::Serialize;
use sqlx::FromRow;

use maison_core::types::{DbId, Timestamp};

/// A config row from the `cta_configs` table: one JSON blob per landing
/// page variant key.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CtaConfig {
    pub id: DbId,
    pub key: String,
    pub config: serde_json::Value,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
