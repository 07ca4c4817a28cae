//! Fixed-window rate limiter for the public CTA routes.
//!
//! In-process and non-distributed: one counter map per server process,
//! reset on restart. The first request from a client starts its window;
//! subsequent requests increment the counter; once the counter reaches
//! the limit, further requests get 429 with a `Retry-After` hint until
//! the window expires. Expired entries are evicted by a periodic sweep
//! so the map does not grow with one-off visitors.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use axum::extract::{ConnectInfo, Request, State};
use axum::http::{header, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use crate::config::RateLimitConfig;
use crate::state::AppState;

/// One client's current window.
#[derive(Debug, Clone, Copy)]
struct Window {
    count: u32,
    started_at: Instant,
}

/// Outcome of a rate-limit check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Allowed,
    /// Over the limit; retry after this many whole seconds (at least 1).
    Limited { retry_after_secs: u64 },
}

/// Fixed-window counter keyed by client address.
///
/// Shared via `Arc` between the middleware and the sweep task. The map is
/// behind a `std::sync::Mutex`; every critical section is a handful of
/// instructions, so contention is not a concern at this request volume.
pub struct RateLimiter {
    max_requests: u32,
    window: Duration,
    windows: Mutex<HashMap<String, Window>>,
}

impl RateLimiter {
    pub fn new(config: &RateLimitConfig) -> Self {
        Self {
            max_requests: config.max_requests,
            window: config.window,
            windows: Mutex::new(HashMap::new()),
        }
    }

    /// Record one request from `client` and decide whether to allow it.
    pub fn check(&self, client: &str) -> Decision {
        let now = Instant::now();
        let mut windows = self.windows.lock().expect("rate limiter mutex poisoned");

        match windows.get_mut(client) {
            Some(window) if now.duration_since(window.started_at) < self.window => {
                if window.count >= self.max_requests {
                    let elapsed = now.duration_since(window.started_at);
                    let remaining = self.window.saturating_sub(elapsed);
                    return Decision::Limited {
                        retry_after_secs: remaining.as_secs().max(1),
                    };
                }
                window.count += 1;
                Decision::Allowed
            }
            // Expired window or first sighting: start a fresh one.
            _ => {
                windows.insert(
                    client.to_string(),
                    Window {
                        count: 1,
                        started_at: now,
                    },
                );
                Decision::Allowed
            }
        }
    }

    /// Drop every expired window. Returns the number evicted.
    pub fn sweep(&self) -> usize {
        let now = Instant::now();
        let mut windows = self.windows.lock().expect("rate limiter mutex poisoned");
        let before = windows.len();
        windows.retain(|_, w| now.duration_since(w.started_at) < self.window);
        before - windows.len()
    }

    /// Number of clients currently tracked.
    pub fn tracked_clients(&self) -> usize {
        self.windows.lock().expect("rate limiter mutex poisoned").len()
    }

    /// Spawn the periodic sweep task (interval = one window length).
    pub fn start_sweeper(limiter: Arc<RateLimiter>) -> tokio::task::JoinHandle<()> {
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(limiter.window);
            // The first tick fires immediately; skip it.
            interval.tick().await;
            loop {
                interval.tick().await;
                let evicted = limiter.sweep();
                if evicted > 0 {
                    tracing::debug!(evicted, "Rate limiter sweep evicted expired windows");
                }
            }
        })
    }
}

/// Axum middleware applying the limiter to every request passing through.
///
/// Mount with `axum::middleware::from_fn_with_state` on the public route
/// tree only; the health endpoint and back office stay exempt.
pub async fn rate_limit(State(state): State<AppState>, req: Request, next: Next) -> Response {
    let client = client_key(&req);

    match state.rate_limiter.check(&client) {
        Decision::Allowed => next.run(req).await,
        Decision::Limited { retry_after_secs } => {
            tracing::debug!(%client, retry_after_secs, "Rate limit exceeded");
            let body = json!({
                "error": "Too many requests",
                "code": "RATE_LIMITED",
            });
            (
                StatusCode::TOO_MANY_REQUESTS,
                [(header::RETRY_AFTER, retry_after_secs.to_string())],
                axum::Json(body),
            )
                .into_response()
        }
    }
}

/// Client address used as the limiter key.
///
/// Prefers the first `x-forwarded-for` hop (the server is expected to sit
/// behind a reverse proxy), falling back to the socket peer address when
/// serving connections directly.
fn client_key(req: &Request) -> String {
    if let Some(forwarded) = req
        .headers()
        .get("x-forwarded-for")
        .and_then(|v| v.to_str().ok())
    {
        if let Some(first) = forwarded.split(',').next() {
            let first = first.trim();
            if !first.is_empty() {
                return first.to_string();
            }
        }
    }

    req.extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.ip().to_string())
        .unwrap_or_else(|| "unknown".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn limiter(max_requests: u32, window: Duration) -> RateLimiter {
        RateLimiter::new(&RateLimitConfig {
            max_requests,
            window,
        })
    }

    #[test]
    fn allows_up_to_the_limit() {
        let limiter = limiter(3, Duration::from_secs(60));
        assert_eq!(limiter.check("1.2.3.4"), Decision::Allowed);
        assert_eq!(limiter.check("1.2.3.4"), Decision::Allowed);
        assert_eq!(limiter.check("1.2.3.4"), Decision::Allowed);

        match limiter.check("1.2.3.4") {
            Decision::Limited { retry_after_secs } => {
                assert!((1..=60).contains(&retry_after_secs));
            }
            Decision::Allowed => panic!("fourth request should be limited"),
        }
    }

    #[test]
    fn clients_are_counted_independently() {
        let limiter = limiter(1, Duration::from_secs(60));
        assert_eq!(limiter.check("1.1.1.1"), Decision::Allowed);
        assert_eq!(limiter.check("2.2.2.2"), Decision::Allowed);
        assert!(matches!(
            limiter.check("1.1.1.1"),
            Decision::Limited { .. }
        ));
    }

    #[test]
    fn window_expiry_resets_the_counter() {
        let limiter = limiter(1, Duration::from_millis(20));
        assert_eq!(limiter.check("1.2.3.4"), Decision::Allowed);
        assert!(matches!(
            limiter.check("1.2.3.4"),
            Decision::Limited { .. }
        ));

        std::thread::sleep(Duration::from_millis(30));
        assert_eq!(limiter.check("1.2.3.4"), Decision::Allowed);
    }

    #[test]
    fn sweep_evicts_only_expired_windows() {
        let limiter = limiter(10, Duration::from_millis(20));
        limiter.check("old-client");
        std::thread::sleep(Duration::from_millis(30));
        limiter.check("fresh-client");

        assert_eq!(limiter.tracked_clients(), 2);
        assert_eq!(limiter.sweep(), 1);
        assert_eq!(limiter.tracked_clients(), 1);
    }

    #[test]
    fn retry_after_is_at_least_one_second() {
        // Sub-second window: the remaining time rounds down to 0 secs,
        // but the hint must still tell the client to wait.
        let limiter = limiter(1, Duration::from_millis(500));
        limiter.check("1.2.3.4");
        match limiter.check("1.2.3.4") {
            Decision::Limited { retry_after_secs } => assert_eq!(retry_after_secs, 1),
            Decision::Allowed => panic!("second request should be limited"),
        }
    }
}
