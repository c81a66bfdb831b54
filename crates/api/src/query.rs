//! Query parameter types for API handlers.

use serde::Deserialize;

use clipstream_core::types::DbId;

/// Query parameters for the published-video feed
/// (`?query=&sortBy=&sortType=&userId=&page=&limit=`).
///
/// The documented wire names are camelCase; the snake_case spellings are
/// accepted as aliases.
#[derive(Debug, Deserialize)]
pub struct FeedParams {
    /// Case-insensitive substring matched against title and description.
    pub query: Option<String>,
    /// Sort column name: `created_at`, `views`, `duration`, or `title`.
    #[serde(alias = "sortBy")]
    pub sort_by: Option<String>,
    /// Sort direction: `asc` or `desc`.
    #[serde(alias = "sortType")]
    pub sort_type: Option<String>,
    /// Restrict the feed to a single owner's videos.
    #[serde(alias = "userId")]
    pub user_id: Option<DbId>,
    pub page: Option<i64>,
    pub limit: Option<i64>,
}
