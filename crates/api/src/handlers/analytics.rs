//! Handler for `GET /api/cta/analytics` (requires `x-api-key`).

use axum::extract::{Query, State};
use axum::Json;
use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use maison_core::types::Timestamp;
use maison_db::repositories::AnalyticsRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::api_key::RequireApiKey;
use crate::state::AppState;

/// Query parameters: an inclusive `YYYY-MM-DD` date range.
#[derive(Debug, Deserialize)]
pub struct AnalyticsQuery {
    pub from: String,
    pub to: String,
}

/// One per-day bucket.
#[derive(Debug, Serialize)]
pub struct DayBucket {
    pub date: NaiveDate,
    pub count: i64,
}

/// One per-source bucket. Blank sources group under `direct`.
#[derive(Debug, Serialize)]
pub struct SourceBucket {
    pub source: String,
    pub count: i64,
}

/// One per-variant bucket. Missing variants group under `default`.
#[derive(Debug, Serialize)]
pub struct VariantBucket {
    pub variant: String,
    pub count: i64,
}

/// Response body for `GET /api/cta/analytics`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsResponse {
    pub total: i64,
    pub by_day: Vec<DayBucket>,
    pub by_source: Vec<SourceBucket>,
    pub by_variant: Vec<VariantBucket>,
}

/// GET /api/cta/analytics?from=YYYY-MM-DD&to=YYYY-MM-DD
pub async fn analytics(
    _key: RequireApiKey,
    State(state): State<AppState>,
    Query(query): Query<AnalyticsQuery>,
) -> AppResult<Json<AnalyticsResponse>> {
    let (from, to) = parse_range(&query.from, &query.to)?;

    let total = AnalyticsRepo::total(&state.pool, from, to).await?;
    let by_day = AnalyticsRepo::by_day(&state.pool, from, to).await?;
    let by_source = AnalyticsRepo::by_source(&state.pool, from, to).await?;
    let by_variant = AnalyticsRepo::by_variant(&state.pool, from, to).await?;

    Ok(Json(AnalyticsResponse {
        total,
        by_day: by_day
            .into_iter()
            .map(|row| DayBucket {
                date: row.day,
                count: row.count,
            })
            .collect(),
        by_source: by_source
            .into_iter()
            .map(|row| SourceBucket {
                source: row.label,
                count: row.count,
            })
            .collect(),
        by_variant: by_variant
            .into_iter()
            .map(|row| VariantBucket {
                variant: row.label,
                count: row.count,
            })
            .collect(),
    }))
}

/// Parse the inclusive date range into half-open UTC timestamps
/// `[from 00:00, to+1day 00:00)`.
fn parse_range(from: &str, to: &str) -> Result<(Timestamp, Timestamp), AppError> {
    let from_date = parse_date(from)?;
    let to_date = parse_date(to)?;

    if from_date > to_date {
        return Err(AppError::BadRequest(
            "'from' must not be after 'to'".into(),
        ));
    }

    let to_exclusive = to_date
        .checked_add_days(chrono::Days::new(1))
        .ok_or_else(|| AppError::BadRequest("'to' is out of range".into()))?;

    Ok((start_of_day(from_date), start_of_day(to_exclusive)))
}

fn parse_date(value: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|_| AppError::BadRequest(format!("Invalid date '{value}', expected YYYY-MM-DD")))
}

fn start_of_day(date: NaiveDate) -> Timestamp {
    date.and_hms_opt(0, 0, 0)
        .expect("midnight is always a valid time")
        .and_local_timezone(Utc)
        .single()
        .expect("UTC has no DST gaps")
}
