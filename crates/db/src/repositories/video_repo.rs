//! Repository for the `videos` table, including the feed query.

use clipstream_core::feed::{escape_like, FeedFilter, FeedSort};
use clipstream_core::pagination::PageParams;
use clipstream_core::types::DbId;
use sqlx::PgPool;

use crate::models::video::{CreateVideo, Video, VideoWithOwner};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, owner_id, title, description, video_url, thumbnail_url, \
                        duration_secs, views, is_published, created_at, updated_at";

/// Feed WHERE clause. The substring pattern and owner id are bound as
/// nullable parameters so one statement covers every filter combination.
const FEED_WHERE: &str = "v.is_published = true
               AND ($1::text IS NULL OR v.title ILIKE $1 OR v.description ILIKE $1)
               AND ($2::bigint IS NULL OR v.owner_id = $2)";

/// Provides CRUD and feed operations for videos.
pub struct VideoRepo;

impl VideoRepo {
    /// Insert a new video, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateVideo) -> Result<Video, sqlx::Error> {
        let query = format!(
            "INSERT INTO videos (owner_id, title, description, video_url, thumbnail_url, duration_secs)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Video>(&query)
            .bind(input.owner_id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.video_url)
            .bind(&input.thumbnail_url)
            .bind(input.duration_secs)
            .fetch_one(pool)
            .await
    }

    /// Find a video by ID without side effects.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Video>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM videos WHERE id = $1");
        sqlx::query_as::<_, Video>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Atomically increment the view counter and return the updated row.
    ///
    /// This is the read primitive for the single-video endpoint: the
    /// increment and the read are one statement, so concurrent reads never
    /// lose counts. Returns `None` if the video does not exist.
    pub async fn increment_views(pool: &PgPool, id: DbId) -> Result<Option<Video>, sqlx::Error> {
        let query = format!(
            "UPDATE videos SET views = views + 1 WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Video>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Delete a video. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM videos WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// List one feed page: published videos matching `filter`, ordered by
    /// `sort`, joined with each owner's display fields.
    ///
    /// Only whitelisted column names and directions from the typed sort
    /// configuration are interpolated into ORDER BY; client input is always
    /// bound, never formatted in.
    pub async fn list_feed(
        pool: &PgPool,
        filter: &FeedFilter,
        sort: &FeedSort,
        page: PageParams,
    ) -> Result<Vec<VideoWithOwner>, sqlx::Error> {
        let order_by = match sort.field {
            // Default: insertion order.
            None => "v.id ASC".to_string(),
            Some(field) => format!("v.{} {}", field.column(), sort.direction.as_sql()),
        };
        let query = format!(
            "SELECT v.id, v.owner_id, v.title, v.description, v.video_url, v.thumbnail_url,
                    v.duration_secs, v.views, v.is_published, v.created_at, v.updated_at,
                    u.handle AS owner_handle,
                    u.display_name AS owner_display_name,
                    u.avatar_url AS owner_avatar_url
             FROM videos v
             JOIN users u ON u.id = v.owner_id
             WHERE {FEED_WHERE}
             ORDER BY {order_by}
             LIMIT $3 OFFSET $4"
        );
        sqlx::query_as::<_, VideoWithOwner>(&query)
            .bind(Self::like_pattern(filter))
            .bind(filter.owner_id)
            .bind(page.limit)
            .bind(page.offset())
            .fetch_all(pool)
            .await
    }

    /// Count all videos matching `filter`, for pagination totals.
    pub async fn count_feed(pool: &PgPool, filter: &FeedFilter) -> Result<i64, sqlx::Error> {
        let query = format!("SELECT COUNT(*) FROM videos v WHERE {FEED_WHERE}");
        sqlx::query_scalar(&query)
            .bind(Self::like_pattern(filter))
            .bind(filter.owner_id)
            .fetch_one(pool)
            .await
    }

    /// Build the `%query%` ILIKE pattern with metacharacters escaped, or
    /// `None` when no substring filter is set.
    fn like_pattern(filter: &FeedFilter) -> Option<String> {
        filter
            .query
            .as_deref()
            .map(|q| format!("%{}%", escape_like(q)))
    }
}
