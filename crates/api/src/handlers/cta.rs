//! Handlers for the public CTA surface: lead submission, landing-page
//! config, and the published-design listing.
//!
//! These endpoints speak camelCase JSON -- the contract the marketing
//! site already consumes -- unlike the snake_case back office.

use axum::extract::{Query, State};
use axum::http::header::USER_AGENT;
use axum::http::{HeaderMap, StatusCode};
use axum::Json;
use serde::{Deserialize, Serialize};
use validator::Validate;

use maison_core::types::{DbId, Money};
use maison_db::models::design::Design;
use maison_db::models::lead::CreateLead;
use maison_db::repositories::{CtaConfigRepo, DesignRepo, LeadRepo};
use maison_notify::LeadEvent;

use crate::error::{AppError, AppResult};
use crate::middleware::api_key::RequireApiKey;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /api/cta/submit`.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SubmitLeadRequest {
    #[validate(length(min = 2, max = 120, message = "name must be 2-120 characters"))]
    pub name: String,
    #[validate(length(min = 7, max = 20, message = "phone must be 7-20 characters"))]
    pub phone: String,
    #[validate(length(min = 2, max = 120, message = "location must be 2-120 characters"))]
    pub location: String,
    #[validate(length(min = 2, max = 500, message = "requirement must be 2-500 characters"))]
    pub requirement: String,
    /// Must be `true`; checked separately so the error names the field.
    #[serde(default)]
    pub consent: bool,
    #[validate(email(message = "email must be a valid address"))]
    pub email: Option<String>,
    #[validate(length(max = 2000, message = "message must be at most 2000 characters"))]
    pub message: Option<String>,
    pub utm_source: Option<String>,
    pub utm_medium: Option<String>,
    pub utm_campaign: Option<String>,
    pub variant: Option<String>,
}

/// Response body for a successful submission.
#[derive(Debug, Serialize)]
pub struct SubmitLeadResponse {
    pub id: DbId,
}

/// Query parameters for `GET /api/cta/config`.
#[derive(Debug, Deserialize)]
pub struct ConfigQuery {
    pub key: Option<String>,
}

/// Response body for `GET /api/cta/config`.
#[derive(Debug, Serialize)]
pub struct ConfigResponse {
    pub key: String,
    pub config: serde_json::Value,
}

/// Request body for `PUT /api/cta/config`.
#[derive(Debug, Deserialize)]
pub struct PutConfigRequest {
    pub key: Option<String>,
    pub config: serde_json::Value,
}

/// Response body for `PUT /api/cta/config`.
#[derive(Debug, Serialize)]
pub struct PutConfigResponse {
    pub ok: bool,
    pub key: String,
}

/// Public projection of a published design (camelCase, no admin fields).
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicDesign {
    pub id: DbId,
    pub name: String,
    pub slug: String,
    pub category: String,
    pub description: Option<String>,
    pub rate: Money,
    pub image_url: Option<String>,
}

impl From<Design> for PublicDesign {
    fn from(design: Design) -> Self {
        PublicDesign {
            id: design.id,
            name: design.name,
            slug: design.slug,
            category: design.category,
            description: design.description,
            rate: design.rate,
            image_url: design.image_url,
        }
    }
}

/// Default config key when the query omits one.
const DEFAULT_CONFIG_KEY: &str = "default";

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/cta/submit
///
/// Validates the payload, stores the lead with the request's IP and
/// user-agent, fires the notification fan-out, and returns 201 with the
/// new id. Notification delivery is spawned and never awaited; the
/// response does not depend on it.
pub async fn submit(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(input): Json<SubmitLeadRequest>,
) -> AppResult<(StatusCode, Json<SubmitLeadResponse>)> {
    input.validate()?;

    if !input.consent {
        let mut fields = std::collections::BTreeMap::new();
        fields.insert(
            "consent".to_string(),
            "consent must be given to submit the form".to_string(),
        );
        return Err(AppError::Validation(fields));
    }

    let create = CreateLead {
        name: input.name,
        phone: input.phone,
        email: input.email,
        location: input.location,
        requirement: input.requirement,
        message: input.message,
        utm_source: input.utm_source,
        utm_medium: input.utm_medium,
        utm_campaign: input.utm_campaign,
        variant: input.variant,
        ip_address: client_ip(&headers),
        user_agent: headers
            .get(USER_AGENT)
            .and_then(|v| v.to_str().ok())
            .map(|s| s.to_string()),
    };

    let lead = LeadRepo::create(&state.pool, &create).await?;
    tracing::info!(lead_id = lead.id, source = ?lead.utm_source, "Lead captured");

    // Fire-and-forget fan-out; the 201 never waits on delivery.
    let notifier = state.notifier.clone();
    let event = LeadEvent::from(&lead);
    tokio::spawn(async move { notifier.dispatch(event).await });

    Ok((StatusCode::CREATED, Json(SubmitLeadResponse { id: lead.id })))
}

/// GET /api/cta/config?key=<string>
pub async fn get_config(
    State(state): State<AppState>,
    Query(query): Query<ConfigQuery>,
) -> AppResult<Json<ConfigResponse>> {
    let key = query.key.as_deref().unwrap_or(DEFAULT_CONFIG_KEY);

    let row = CtaConfigRepo::find_by_key(&state.pool, key)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("No config stored for key '{key}'")))?;

    Ok(Json(ConfigResponse {
        key: row.key,
        config: row.config,
    }))
}

/// PUT /api/cta/config (requires `x-api-key`)
pub async fn put_config(
    _key: RequireApiKey,
    State(state): State<AppState>,
    Json(input): Json<PutConfigRequest>,
) -> AppResult<Json<PutConfigResponse>> {
    let key = input.key.as_deref().unwrap_or(DEFAULT_CONFIG_KEY);

    if !input.config.is_object() {
        return Err(AppError::BadRequest("config must be a JSON object".into()));
    }

    let row = CtaConfigRepo::upsert(&state.pool, key, &input.config).await?;
    tracing::info!(key = %row.key, "CTA config updated");

    Ok(Json(PutConfigResponse {
        ok: true,
        key: row.key,
    }))
}

/// GET /api/cta/designs -- published designs only.
pub async fn list_designs(State(state): State<AppState>) -> AppResult<Json<Vec<PublicDesign>>> {
    let designs = DesignRepo::list(&state.pool, false).await?;
    Ok(Json(designs.into_iter().map(PublicDesign::from).collect()))
}

/// Client IP for attribution: the first `x-forwarded-for` hop. The
/// server is expected to sit behind a reverse proxy; without the header
/// the field is simply left empty.
fn client_ip(headers: &HeaderMap) -> Option<String> {
    let forwarded = headers.get("x-forwarded-for")?.to_str().ok()?;
    let first = forwarded.split(',').next()?.trim();
    if first.is_empty() {
        None
    } else {
        Some(first.to_string())
    }
}
