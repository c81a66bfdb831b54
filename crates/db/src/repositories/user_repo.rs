//! Repository for the `users` table.

use clipstream_core::types::DbId;
use sqlx::PgPool;

use crate::models::user::{CreateUser, UpdateUser, User};
use crate::models::video::VideoWithOwner;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, handle, email, password_hash, display_name, avatar_url, \
                        cover_image_url, refresh_token_hash, watch_history, created_at, updated_at";

/// Maximum number of entries kept in a user's watch history.
const WATCH_HISTORY_CAP: i32 = 50;

/// Provides CRUD and session-slot operations for users.
pub struct UserRepo;

impl UserRepo {
    /// Insert a new user, returning the created row.
    ///
    /// Handle/email uniqueness is enforced by the `uq_users_*` constraints;
    /// violations surface as `sqlx::Error` for the caller to classify.
    pub async fn create(pool: &PgPool, input: &CreateUser) -> Result<User, sqlx::Error> {
        let query = format!(
            "INSERT INTO users (handle, email, password_hash, display_name, avatar_url, cover_image_url)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(&input.handle)
            .bind(&input.email)
            .bind(&input.password_hash)
            .bind(&input.display_name)
            .bind(&input.avatar_url)
            .bind(&input.cover_image_url)
            .fetch_one(pool)
            .await
    }

    /// Find a user by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE id = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a user by login identifier: matches either handle or email.
    pub async fn find_by_identifier(
        pool: &PgPool,
        identifier: &str,
    ) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE handle = $1 OR email = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(identifier)
            .fetch_optional(pool)
            .await
    }

    /// Update profile fields. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateUser,
    ) -> Result<Option<User>, sqlx::Error> {
        let query = format!(
            "UPDATE users SET
                email = COALESCE($2, email),
                display_name = COALESCE($3, display_name),
                avatar_url = COALESCE($4, avatar_url),
                cover_image_url = COALESCE($5, cover_image_url)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .bind(&input.email)
            .bind(&input.display_name)
            .bind(&input.avatar_url)
            .bind(&input.cover_image_url)
            .fetch_optional(pool)
            .await
    }

    /// Update a user's password hash. Returns `true` if the row was updated.
    pub async fn update_password(
        pool: &PgPool,
        id: DbId,
        password_hash: &str,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("UPDATE users SET password_hash = $2 WHERE id = $1")
            .bind(id)
            .bind(password_hash)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Store the refresh-token digest in the single session slot,
    /// overwriting whatever was there. Returns `true` if the row exists.
    pub async fn store_refresh_token_hash(
        pool: &PgPool,
        id: DbId,
        hash: &str,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("UPDATE users SET refresh_token_hash = $2 WHERE id = $1")
            .bind(id)
            .bind(hash)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Clear the session slot, ending the session. Idempotent.
    pub async fn clear_refresh_token_hash(pool: &PgPool, id: DbId) -> Result<(), sqlx::Error> {
        sqlx::query("UPDATE users SET refresh_token_hash = NULL WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(())
    }

    /// Append a video id to the user's watch history, keeping only the most
    /// recent [`WATCH_HISTORY_CAP`] entries. Duplicates are kept (re-watching
    /// appends again), matching the ordered-list semantics of the history.
    ///
    /// Single atomic statement: the append and the trim happen together, so
    /// there is no read-modify-write window.
    pub async fn append_watch_history(
        pool: &PgPool,
        id: DbId,
        video_id: DbId,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            "UPDATE users SET watch_history = (
                SELECT COALESCE(array_agg(v ORDER BY ord), '{}')
                FROM unnest(watch_history || $2::bigint) WITH ORDINALITY AS t(v, ord)
                WHERE ord > cardinality(watch_history || $2::bigint) - $3
             )
             WHERE id = $1",
        )
        .bind(id)
        .bind(video_id)
        .bind(WATCH_HISTORY_CAP)
        .execute(pool)
        .await?;
        Ok(())
    }

    /// Resolve the user's watch history against the video collection,
    /// joining each video with its owner's public fields.
    ///
    /// History ids that no longer resolve to a video are silently omitted
    /// (the inner join drops them); list order is preserved.
    pub async fn watch_history(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Vec<VideoWithOwner>, sqlx::Error> {
        sqlx::query_as::<_, VideoWithOwner>(
            "SELECT v.id, v.owner_id, v.title, v.description, v.video_url, v.thumbnail_url,
                    v.duration_secs, v.views, v.is_published, v.created_at, v.updated_at,
                    u.handle AS owner_handle,
                    u.display_name AS owner_display_name,
                    u.avatar_url AS owner_avatar_url
             FROM users me
             CROSS JOIN unnest(me.watch_history) WITH ORDINALITY AS h(video_id, ord)
             JOIN videos v ON v.id = h.video_id
             JOIN users u ON u.id = v.owner_id
             WHERE me.id = $1
             ORDER BY h.ord",
        )
        .bind(id)
        .fetch_all(pool)
        .await
    }
}
