//! Repository for the `dislikes` edge table.

use clipstream_core::engagement::{TargetKind, ToggleState};
use clipstream_core::types::DbId;
use sqlx::PgPool;

use crate::models::engagement::{Dislike, ToggleOutcome};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, user_id, target_kind, target_id, created_at";

/// Provides the dislike toggle, mirroring [`crate::repositories::LikeRepo`].
/// Dislikes never clear a like for the same target; the two edge tables are
/// independent.
pub struct DislikeRepo;

impl DislikeRepo {
    /// Toggle the (user, kind, target) dislike edge. See
    /// [`crate::repositories::LikeRepo::toggle`] for the race-free contract;
    /// here the guarding constraint is `uq_dislikes_user_target`.
    pub async fn toggle(
        pool: &PgPool,
        user_id: DbId,
        kind: TargetKind,
        target_id: DbId,
    ) -> Result<ToggleOutcome<Dislike>, sqlx::Error> {
        let delete = format!(
            "DELETE FROM dislikes
             WHERE user_id = $1 AND target_kind = $2 AND target_id = $3
             RETURNING {COLUMNS}"
        );
        let insert = format!(
            "INSERT INTO dislikes (user_id, target_kind, target_id)
             VALUES ($1, $2, $3)
             ON CONFLICT ON CONSTRAINT uq_dislikes_user_target DO NOTHING
             RETURNING {COLUMNS}"
        );
        loop {
            if let Some(edge) = sqlx::query_as::<_, Dislike>(&delete)
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

            if let Some(edge) = sqlx::query_as::<_, Dislike>(&insert)
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
                "dislike toggle raced, retrying"
            );
        }
    }

    /// Number of dislike edges on a target.
    pub async fn count_for_target(
        pool: &PgPool,
        kind: TargetKind,
        target_id: DbId,
    ) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT COUNT(*) FROM dislikes WHERE target_kind = $1 AND target_id = $2",
        )
        .bind(kind.as_str())
        .bind(target_id)
        .fetch_one(pool)
        .await
    }
}
