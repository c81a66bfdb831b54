//! Typed filter and sort configuration for the video feed.
//!
//! The feed query accepts free-form query parameters; this module is the
//! single place they are turned into an explicit, whitelisted configuration.
//! Repositories interpolate only [`FeedSortField::column`] and
//! [`SortDirection::as_sql`] into SQL, never raw client input.

use crate::error::CoreError;
use crate::types::DbId;

/// Recognized sort fields for the feed, mapped to `videos` columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedSortField {
    CreatedAt,
    Views,
    Duration,
    Title,
}

impl FeedSortField {
    /// The `videos` column this field sorts on.
    pub fn column(&self) -> &'static str {
        match self {
            Self::CreatedAt => "created_at",
            Self::Views => "views",
            Self::Duration => "duration_secs",
            Self::Title => "title",
        }
    }

    /// Parse a `sort_by` query value. Unrecognized fields are rejected
    /// rather than passed through to SQL.
    pub fn parse(s: &str) -> Result<Self, CoreError> {
        match s {
            "created_at" => Ok(Self::CreatedAt),
            "views" => Ok(Self::Views),
            "duration" => Ok(Self::Duration),
            "title" => Ok(Self::Title),
            other => Err(CoreError::Validation(format!(
                "Invalid sort_by '{other}'. Expected one of: created_at, views, duration, title"
            ))),
        }
    }
}

/// Sort direction; the feed defaults to descending when a field is given.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

impl SortDirection {
    pub fn as_sql(&self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }

    /// Parse a `sort_type` query value (`asc` | `desc`).
    pub fn parse(s: &str) -> Result<Self, CoreError> {
        match s {
            "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            other => Err(CoreError::Validation(format!(
                "Invalid sort_type '{other}'. Expected 'asc' or 'desc'"
            ))),
        }
    }
}

/// Filter over the feed. All fields optional; empty filter matches all
/// published videos.
#[derive(Debug, Clone, Default)]
pub struct FeedFilter {
    /// Case-insensitive substring matched against title and description.
    pub query: Option<String>,
    /// Restrict to videos owned by this user.
    pub owner_id: Option<DbId>,
}

/// Sort configuration. `field: None` means insertion order (by id).
#[derive(Debug, Clone, Copy, Default)]
pub struct FeedSort {
    pub field: Option<FeedSortField>,
    pub direction: SortDirection,
}

/// Escape LIKE/ILIKE metacharacters so a user query is matched literally.
///
/// PostgreSQL treats `\` as the escape character by default; escape it
/// first, then `%` and `_`.
pub fn escape_like(input: &str) -> String {
    input
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}
