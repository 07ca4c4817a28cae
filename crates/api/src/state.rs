use std::sync::Arc;
use std::time::Instant;

use crate::config::ServerConfig;
use crate::middleware::rate_limit::RateLimiter;

/// Shared application state available to all Axum handlers via
/// `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already
/// `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: maison_db::DbPool,
    /// Server configuration (accessed by middleware and handlers).
    pub config: Arc<ServerConfig>,
    /// Lead notification fan-out.
    pub notifier: Arc<maison_notify::Notifier>,
    /// Fixed-window rate limiter for the public CTA routes.
    pub rate_limiter: Arc<RateLimiter>,
    /// Process start time, reported as uptime by the health endpoint.
    pub started_at: Instant,
}
