//! Engagement edge rows and the toggle result wrapper.

use clipstream_core::engagement::ToggleState;
use clipstream_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A subscription edge: `subscriber_id` follows `channel_id`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Subscription {
    pub id: DbId,
    pub subscriber_id: DbId,
    pub channel_id: DbId,
    pub created_at: Timestamp,
}

/// A like edge from a user to a (kind, id) target.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Like {
    pub id: DbId,
    pub user_id: DbId,
    pub target_kind: String,
    pub target_id: DbId,
    pub created_at: Timestamp,
}

/// A dislike edge. Independent of [`Like`]: both may exist for the same
/// (user, target) pair.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Dislike {
    pub id: DbId,
    pub user_id: DbId,
    pub target_kind: String,
    pub target_id: DbId,
    pub created_at: Timestamp,
}

/// Result of a toggle call: the resulting state and the edge that was
/// created (`on`) or deleted (`off`).
#[derive(Debug, Serialize)]
pub struct ToggleOutcome<T: Serialize> {
    pub state: ToggleState,
    pub edge: T,
}
