//! 1-based pagination parameters and page-count math.
//!
//! Feed endpoints accept `page` (1-based) and `limit` query parameters.
//! Normalization happens once here so handlers and repositories agree on
//! the same defaults and bounds.

/// Default page number when the client sends none.
pub const DEFAULT_PAGE: i64 = 1;

/// Default page size when the client sends none.
pub const DEFAULT_LIMIT: i64 = 10;

/// Upper bound on the page size a client may request.
pub const MAX_LIMIT: i64 = 100;

/// Normalized pagination window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageParams {
    /// 1-based page number (>= 1).
    pub page: i64,
    /// Page size (1..=`MAX_LIMIT`).
    pub limit: i64,
}

impl PageParams {
    /// Normalize raw query values: apply defaults, floor `page` at 1, and
    /// clamp `limit` into `1..=MAX_LIMIT`.
    pub fn normalize(page: Option<i64>, limit: Option<i64>) -> Self {
        let page = page.unwrap_or(DEFAULT_PAGE).max(1);
        let limit = limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT);
        Self { page, limit }
    }

    /// Row offset for this window: `(page - 1) * limit`.
    pub fn offset(&self) -> i64 {
        (self.page - 1) * self.limit
    }
}

/// Total number of pages: `ceil(total_items / limit)`.
///
/// Zero items means zero pages; `limit` must be positive (guaranteed by
/// [`PageParams::normalize`]).
pub fn total_pages(total_items: i64, limit: i64) -> i64 {
    if total_items <= 0 {
        return 0;
    }
    (total_items + limit - 1) / limit
}
