//! Repository for the `likes` edge table.

use clipstream_core::engagement::{TargetKind, ToggleState};
use clipstream_core::types::DbId;
use sqlx::PgPool;

use crate::models::engagement::{Like, ToggleOutcome};
use crate::models::video::VideoWithOwner;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, user_id, target_kind, target_id, created_at";

/// Provides the like toggle for videos, comments, and tweets.
///
/// Likes are independent of dislikes: toggling one never touches the other
/// table, so a user may hold both for the same target.
pub struct LikeRepo;

impl LikeRepo {
    /// Toggle the (user, kind, target) like edge: delete if present (`off`),
    /// create if absent (`on`).
    ///
    /// Same race-free shape as the subscription toggle: atomic delete, then
    /// insert guarded by `uq_likes_user_target`; a swallowed insert means a
    /// concurrent create won, and the call retries so it still performs
    /// exactly one flip. The target entity is never touched -- no
    /// denormalized like counts exist.
    pub async fn toggle(
        pool: &PgPool,
        user_id: DbId,
        kind: TargetKind,
        target_id: DbId,
    ) -> Result<ToggleOutcome<Like>, sqlx::Error> {
        let delete = format!(
            "DELETE FROM likes
             WHERE user_id = $1 AND target_kind = $2 AND target_id = $3
             RETURNING {COLUMNS}"
        );
        let insert = format!(
            "INSERT INTO likes (user_id, target_kind, target_id)
             VALUES ($1, $2, $3)
             ON CONFLICT ON CONSTRAINT uq_likes_user_target DO NOTHING
             RETURNING {COLUMNS}"
        );
        loop {
            if let Some(edge) = sqlx::query_as::<_, Like>(&delete)
                .bind(user_id)
                .bind(kind.as_str())
                .bind(target_id)
                .fetch_optional(pool)
                .await?
            {
                return Ok(ToggleOutcome {
                    state: ToggleState::Off,
                    edge,
                });
            }

            if let Some(edge) = sqlx::query_as::<_, Like>(&insert)
                .bind(user_id)
                .bind(kind.as_str())
                .bind(target_id)
                .fetch_optional(pool)
                .await?
            {
                return Ok(ToggleOutcome {
                    state: ToggleState::On,
                    edge,
                });
            }

            tracing::debug!(
                user_id,
                kind = kind.as_str(),
                target_id,
                "like toggle raced, retrying"
            );
        }
    }

    /// Number of like edges on a target.
    pub async fn count_for_target(
        pool: &PgPool,
        kind: TargetKind,
        target_id: DbId,
    ) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM likes WHERE target_kind = $1 AND target_id = $2")
            .bind(kind.as_str())
            .bind(target_id)
            .fetch_one(pool)
            .await
    }

    /// All videos the user has liked, newest like first, joined with each
    /// video's owner. Likes whose video no longer exists are dropped by the
    /// inner join.
    pub async fn list_liked_videos(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<VideoWithOwner>, sqlx::Error> {
        sqlx::query_as::<_, VideoWithOwner>(
            "SELECT v.id, v.owner_id, v.title, v.description, v.video_url, v.thumbnail_url,
                    v.duration_secs, v.views, v.is_published, v.created_at, v.updated_at,
                    u.handle AS owner_handle,
                    u.display_name AS owner_display_name,
                    u.avatar_url AS owner_avatar_url
             FROM likes l
             JOIN videos v ON v.id = l.target_id
             JOIN users u ON u.id = v.owner_id
             WHERE l.user_id = $1 AND l.target_kind = 'video'
             ORDER BY l.created_at DESC",
        )
        .bind(user_id)
        .fetch_all(pool)
        .await
    }
}
