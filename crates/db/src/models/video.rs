//! Video entity model, DTOs, and joined read-side projections.

use clipstream_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Full video row from the `videos` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Video {
    pub id: DbId,
    /// Owning user; immutable after creation.
    pub owner_id: DbId,
    pub title: String,
    pub description: String,
    pub video_url: String,
    pub thumbnail_url: String,
    pub duration_secs: f64,
    pub views: i64,
    pub is_published: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for publishing a new video. Media URLs are caller-provided; upload
/// to object storage happens outside this service.
#[derive(Debug, Deserialize)]
pub struct CreateVideo {
    pub owner_id: DbId,
    pub title: String,
    pub description: String,
    pub video_url: String,
    pub thumbnail_url: String,
    pub duration_secs: f64,
}

/// A video joined with its owner's public display fields. Used by the feed,
/// watch history, and liked-videos views.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct VideoWithOwner {
    pub id: DbId,
    pub owner_id: DbId,
    pub title: String,
    pub description: String,
    pub video_url: String,
    pub thumbnail_url: String,
    pub duration_secs: f64,
    pub views: i64,
    pub is_published: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub owner_handle: String,
    pub owner_display_name: String,
    pub owner_avatar_url: Option<String>,
}

/// One page of the video feed.
#[derive(Debug, Serialize)]
pub struct FeedPage {
    pub items: Vec<VideoWithOwner>,
    /// 1-based page number that was requested.
    pub page: i64,
    pub total_items: i64,
    /// `ceil(total_items / limit)`.
    pub total_pages: i64,
}
