//! User entity model and DTOs.

use clipstream_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Full user row from the `users` table.
///
/// Contains the password hash and the refresh-token slot -- NEVER serialize
/// this to API responses directly. Use [`UserResponse`] for external-facing
/// output.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: DbId,
    pub handle: String,
    pub email: String,
    pub password_hash: String,
    pub display_name: String,
    pub avatar_url: Option<String>,
    pub cover_image_url: Option<String>,
    /// SHA-256 digest of the currently valid refresh token (single slot).
    pub refresh_token_hash: Option<String>,
    /// Recently watched video ids, oldest first, bounded on append.
    pub watch_history: Vec<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Safe user representation for API responses (no password hash, no
/// session slot, no watch history).
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: DbId,
    pub handle: String,
    pub email: String,
    pub display_name: String,
    pub avatar_url: Option<String>,
    pub cover_image_url: Option<String>,
    pub created_at: Timestamp,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            handle: user.handle,
            email: user.email,
            display_name: user.display_name,
            avatar_url: user.avatar_url,
            cover_image_url: user.cover_image_url,
            created_at: user.created_at,
        }
    }
}

/// DTO for creating a new user.
#[derive(Debug, Deserialize)]
pub struct CreateUser {
    pub handle: String,
    pub email: String,
    pub password_hash: String,
    pub display_name: String,
    pub avatar_url: Option<String>,
    pub cover_image_url: Option<String>,
}

/// DTO for updating profile fields. All fields are optional; the session
/// slot and password are never touched through this path.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateUser {
    pub email: Option<String>,
    pub display_name: Option<String>,
    pub avatar_url: Option<String>,
    pub cover_image_url: Option<String>,
}

/// Channel profile view: public fields plus live subscription counts,
/// computed at query time from the subscription edges.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ChannelProfile {
    pub id: DbId,
    pub handle: String,
    pub display_name: String,
    pub email: String,
    pub avatar_url: Option<String>,
    pub cover_image_url: Option<String>,
    /// Number of subscription edges pointing at this channel.
    pub subscriber_count: i64,
    /// Number of channels this user subscribes to.
    pub subscribed_to_count: i64,
    /// Whether the requesting user currently subscribes to this channel.
    pub is_subscribed: bool,
}

/// Channel dashboard totals, all computed live.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ChannelStats {
    pub total_videos: i64,
    pub total_views: i64,
    pub total_subscribers: i64,
    /// Likes across all of the channel's videos.
    pub total_likes: i64,
}
