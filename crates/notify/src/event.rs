//! The lead event envelope shared by all delivery channels.

use chrono::{DateTime, Utc};
use serde::Serialize;

use maison_core::types::DbId;
use maison_db::models::lead::Lead;

/// Snapshot of a freshly captured lead, serialized camelCase to match
/// the public API contract consumers already parse.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadEvent {
    pub id: DbId,
    pub name: String,
    pub phone: String,
    pub email: Option<String>,
    pub location: String,
    pub requirement: String,
    pub message: Option<String>,
    pub utm_source: Option<String>,
    pub utm_medium: Option<String>,
    pub utm_campaign: Option<String>,
    pub variant: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<&Lead> for LeadEvent {
    fn from(lead: &Lead) -> Self {
        LeadEvent {
            id: lead.id,
            name: lead.name.clone(),
            phone: lead.phone.clone(),
            email: lead.email.clone(),
            location: lead.location.clone(),
            requirement: lead.requirement.clone(),
            message: lead.message.clone(),
            utm_source: lead.utm_source.clone(),
            utm_medium: lead.utm_medium.clone(),
            utm_campaign: lead.utm_campaign.clone(),
            variant: lead.variant.clone(),
            created_at: lead.created_at,
        }
    }
}

impl LeadEvent {
    /// One-line human summary used by the Slack and email channels.
    pub fn summary(&self) -> String {
        let source = self.utm_source.as_deref().unwrap_or("direct");
        format!(
            "New lead #{}: {} ({}) from {} -- {} [source: {}]",
            self.id, self.name, self.phone, self.location, self.requirement, source
        )
    }
}
