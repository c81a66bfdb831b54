//! Read-side channel views: profile with live subscription counts, and
//! dashboard stats. This repository never mutates anything.

use clipstream_core::types::DbId;
use sqlx::PgPool;

use crate::models::user::{ChannelProfile, ChannelStats};

/// Provides channel profile and stats queries, each a single SQL statement
/// joining the user row with the engagement edge tables at query time.
pub struct ChannelRepo;

impl ChannelRepo {
    /// Channel profile as seen by `requesting_user_id`: public fields plus
    /// `subscriber_count`, `subscribed_to_count`, and whether the requester
    /// currently subscribes. Returns `None` if the user does not exist.
    pub async fn profile(
        pool: &PgPool,
        channel_id: DbId,
        requesting_user_id: DbId,
    ) -> Result<Option<ChannelProfile>, sqlx::Error> {
        sqlx::query_as::<_, ChannelProfile>(
            "SELECT u.id, u.handle, u.display_name, u.email, u.avatar_url, u.cover_image_url,
                (SELECT COUNT(*) FROM subscriptions s WHERE s.channel_id = u.id)
                    AS subscriber_count,
                (SELECT COUNT(*) FROM subscriptions s WHERE s.subscriber_id = u.id)
                    AS subscribed_to_count,
                EXISTS(
                    SELECT 1 FROM subscriptions s
                    WHERE s.channel_id = u.id AND s.subscriber_id = $2
                ) AS is_subscribed
             FROM users u
             WHERE u.id = $1",
        )
        .bind(channel_id)
        .bind(requesting_user_id)
        .fetch_optional(pool)
        .await
    }

    /// Dashboard totals for a channel: video count, summed views, subscriber
    /// count, and likes across the channel's videos. All computed live.
    /// Returns `None` if the user does not exist.
    pub async fn stats(
        pool: &PgPool,
        channel_id: DbId,
    ) -> Result<Option<ChannelStats>, sqlx::Error> {
        sqlx::query_as::<_, ChannelStats>(
            "SELECT
                (SELECT COUNT(*) FROM videos v WHERE v.owner_id = u.id) AS total_videos,
                (SELECT COALESCE(SUM(v.views), 0)::BIGINT FROM videos v WHERE v.owner_id = u.id)
                    AS total_views,
                (SELECT COUNT(*) FROM subscriptions s WHERE s.channel_id = u.id)
                    AS total_subscribers,
                (SELECT COUNT(*)
                 FROM likes l
                 JOIN videos v ON v.id = l.target_id AND l.target_kind = 'video'
                 WHERE v.owner_id = u.id) AS total_likes
             FROM users u
             WHERE u.id = $1",
        )
        .bind(channel_id)
        .fetch_optional(pool)
        .await
    }
}
