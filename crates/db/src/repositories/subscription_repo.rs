//! Repository for the `subscriptions` edge table.

use clipstream_core::engagement::ToggleState;
use clipstream_core::types::DbId;
use sqlx::PgPool;

use crate::models::engagement::{Subscription, ToggleOutcome};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, subscriber_id, channel_id, created_at";

/// Provides the subscription toggle. Edges are created and deleted here and
/// nowhere else; read-side components only query them.
pub struct SubscriptionRepo;

impl SubscriptionRepo {
    /// Toggle the (subscriber, channel) edge: delete it if present (`off`),
    /// create it if absent (`on`).
    ///
    /// Both branches are single atomic statements, and the
    /// `uq_subscriptions_subscriber_channel` constraint makes a duplicate
    /// edge unrepresentable. When a concurrent toggle for the same pair
    /// swallows our insert (ON CONFLICT with no row returned), the call
    /// retries from the delete branch, so every call performs exactly one
    /// state flip. Self-subscription (subscriber == channel) is permitted.
    pub async fn toggle(
        pool: &PgPool,
        subscriber_id: DbId,
        channel_id: DbId,
    ) -> Result<ToggleOutcome<Subscription>, sqlx::Error> {
        let delete = format!(
            "DELETE FROM subscriptions
             WHERE subscriber_id = $1 AND channel_id = $2
             RETURNING {COLUMNS}"
        );
        let insert = format!(
            "INSERT INTO subscriptions (subscriber_id, channel_id)
             VALUES ($1, $2)
             ON CONFLICT ON CONSTRAINT uq_subscriptions_subscriber_channel DO NOTHING
             RETURNING {COLUMNS}"
        );
        loop {
            if let Some(edge) = sqlx::query_as::<_, Subscription>(&delete)
                .bind(subscriber_id)
                .bind(channel_id)
                .fetch_optional(pool)
                .await?
            {
                return Ok(ToggleOutcome {
                    state: ToggleState::Off,
                    edge,
                });
            }

            if let Some(edge) = sqlx::query_as::<_, Subscription>(&insert)
                .bind(subscriber_id)
                .bind(channel_id)
                .fetch_optional(pool)
                .await?
            {
                return Ok(ToggleOutcome {
                    state: ToggleState::On,
                    edge,
                });
            }

            // Insert swallowed by a concurrent create for the same pair:
            // the edge now exists, so the next delete attempt flips it.
            tracing::debug!(
                subscriber_id,
                channel_id,
                "subscription toggle raced, retrying"
            );
        }
    }

    /// Whether a (subscriber, channel) edge currently exists.
    pub async fn exists(
        pool: &PgPool,
        subscriber_id: DbId,
        channel_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT EXISTS(
                SELECT 1 FROM subscriptions WHERE subscriber_id = $1 AND channel_id = $2
             )",
        )
        .bind(subscriber_id)
        .bind(channel_id)
        .fetch_one(pool)
        .await
    }

    /// Number of subscribers of a channel.
    pub async fn subscriber_count(pool: &PgPool, channel_id: DbId) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM subscriptions WHERE channel_id = $1")
            .bind(channel_id)
            .fetch_one(pool)
            .await
    }
}
