//! Shared query parameter types for API handlers.

use chrono::NaiveDate;
use serde::Deserialize;

/// Generic pagination parameters (`?limit=&offset=`).
#[derive(Debug, Deserialize)]
pub struct PaginationParams {
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// Hard cap on page size so a missing limit cannot dump the table.
pub const MAX_PAGE_SIZE: i64 = 200;

/// Default page size when `limit` is omitted.
pub const DEFAULT_PAGE_SIZE: i64 = 50;

impl PaginationParams {
    /// Clamp to `[1, MAX_PAGE_SIZE]`, defaulting to [`DEFAULT_PAGE_SIZE`].
    pub fn limit(&self) -> i64 {
        self.limit.unwrap_or(DEFAULT_PAGE_SIZE).clamp(1, MAX_PAGE_SIZE)
    }

    /// Clamp to non-negative, defaulting to 0.
    pub fn offset(&self) -> i64 {
        self.offset.unwrap_or(0).max(0)
    }
}

/// Optional inclusive date range (`?from=YYYY-MM-DD&to=YYYY-MM-DD`).
#[derive(Debug, Deserialize)]
pub struct DateRangeParams {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}
