//! Route definitions for the public CTA surface.
//!
//! Everything here sits behind the fixed-window rate limiter; the
//! back-office and health routes do not.

use axum::routing::get;
use axum::Router;

use crate::handlers::{analytics, cta};
use crate::middleware::rate_limit::rate_limit;
use crate::state::AppState;

/// Routes mounted at `/api/cta`.
///
/// ```text
/// POST /submit      -> capture a lead (201)
/// GET  /config      -> landing-page config blob
/// PUT  /config      -> upsert config (x-api-key)
/// GET  /designs     -> published designs
/// GET  /analytics   -> grouped lead counts (x-api-key)
/// ```
pub fn router(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/submit", axum::routing::post(cta::submit))
        .route("/config", get(cta::get_config).put(cta::put_config))
        .route("/designs", get(cta::list_designs))
        .route("/analytics", get(analytics::analytics))
        .layer(axum::middleware::from_fn_with_state(state, rate_limit))
}
