//! Lead entity model and DTOs.
//!
//! A lead is a captured prospective-customer record from the public CTA
//! form, carrying contact details plus UTM attribution. The back office
//! moves it along the funnel in [`LeadStatus`].

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use maison_core::types::{DbId, Timestamp};
use maison_core::workflow::LeadStatus;

/// A lead row from the `leads` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Lead {
    pub id: DbId,
    pub name: String,
    pub phone: String,
    pub email: Option<String>,
    pub location: String,
    pub requirement: String,
    pub message: Option<String>,
    pub consent: bool,
    pub utm_source: Option<String>,
    pub utm_medium: Option<String>,
    pub utm_campaign: Option<String>,
    /// Landing-page variant the lead converted on.
    pub variant: Option<String>,
    pub status: LeadStatus,
    /// Salesman the lead is assigned to, if any.
    pub assigned_to: Option<DbId>,
    pub note: Option<String>,
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for inserting a new lead. Built by the submit handler after
/// validation; `ip_address` and `user_agent` come from the request, not
/// the client payload.
#[derive(Debug, Clone)]
pub struct CreateLead {
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
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
}

/// DTO for the back-office partial update (note, assignment).
#[derive(Debug, Deserialize)]
pub struct UpdateLead {
    pub note: Option<String>,
    pub assigned_to: Option<DbId>,
}

/// Back-office list filters.
#[derive(Debug, Default)]
pub struct LeadFilter {
    pub status: Option<LeadStatus>,
    pub source: Option<String>,
}
