//! Static API key extractor for the protected CTA endpoints.
//!
//! Config writes and analytics reads are exposed to the marketing tooling
//! through a single shared key in the `x-api-key` header, not through the
//! back-office JWT flow.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use maison_core::error::CoreError;

use crate::error::AppError;
use crate::state::AppState;

/// Requires a valid `x-api-key` header matching `CTA_API_KEY`.
///
/// ```ignore
/// async fn protected(_key: RequireApiKey) -> AppResult<Json<()>> {
///     Ok(Json(()))
/// }
/// ```
pub struct RequireApiKey;

impl FromRequestParts<AppState> for RequireApiKey {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let provided = parts
            .headers
            .get("x-api-key")
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| {
                AppError::Core(CoreError::Unauthorized("Missing x-api-key header".into()))
            })?;

        if !constant_time_eq(provided.as_bytes(), state.config.cta_api_key.as_bytes()) {
            return Err(AppError::Core(CoreError::Unauthorized(
                "Invalid API key".into(),
            )));
        }

        Ok(RequireApiKey)
    }
}

/// Byte-wise comparison that does not short-circuit on the first
/// mismatch, so response timing does not leak the key prefix.
fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut diff = 0u8;
    for (x, y) in a.iter().zip(b.iter()) {
        diff |= x ^ y;
    }
    diff == 0
}
