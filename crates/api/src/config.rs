use std::time::Duration;

use crate::auth::jwt::JwtConfig;

/// Server configuration loaded from environment variables.
///
/// All fields except the secrets have defaults suitable for local
/// development. In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS`.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Static key expected in `x-api-key` on protected CTA endpoints.
    pub cta_api_key: String,
    /// Public-route rate limiting.
    pub rate_limit: RateLimitConfig,
    /// JWT token configuration (secret, expiry durations).
    pub jwt: JwtConfig,
}

/// Fixed-window rate limiter settings for the public CTA routes.
#[derive(Debug, Clone)]
pub struct RateLimitConfig {
    /// Requests allowed per window per client (default: `60`).
    pub max_requests: u32,
    /// Window length (default: 60 seconds).
    pub window: Duration,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                   | Required | Default                 |
    /// |---------------------------|----------|-------------------------|
    /// | `HOST`                    | no       | `0.0.0.0`               |
    /// | `PORT`                    | no       | `3000`                  |
    /// | `CORS_ORIGINS`            | no       | `http://localhost:5173` |
    /// | `REQUEST_TIMEOUT_SECS`    | no       | `30`                    |
    /// | `CTA_API_KEY`             | **yes**  | --                      |
    /// | `RATE_LIMIT_MAX_REQUESTS` | no       | `60`                    |
    /// | `RATE_LIMIT_WINDOW_SECS`  | no       | `60`                    |
    ///
    /// # Panics
    ///
    /// Panics if `CTA_API_KEY` or `JWT_SECRET` is missing or malformed,
    /// which is the desired behaviour -- misconfiguration fails fast.
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let cta_api_key =
            std::env::var("CTA_API_KEY").expect("CTA_API_KEY must be set in the environment");
        assert!(!cta_api_key.is_empty(), "CTA_API_KEY must not be empty");

        let max_requests: u32 = std::env::var("RATE_LIMIT_MAX_REQUESTS")
            .unwrap_or_else(|_| "60".into())
            .parse()
            .expect("RATE_LIMIT_MAX_REQUESTS must be a valid u32");

        let window_secs: u64 = std::env::var("RATE_LIMIT_WINDOW_SECS")
            .unwrap_or_else(|_| "60".into())
            .parse()
            .expect("RATE_LIMIT_WINDOW_SECS must be a valid u64");

        let jwt = JwtConfig::from_env();

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            cta_api_key,
            rate_limit: RateLimitConfig {
                max_requests,
                window: Duration::from_secs(window_secs),
            },
            jwt,
        }
    }
}
