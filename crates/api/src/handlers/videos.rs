//! Handlers for the `/videos` resource: the published feed, the single-video
//! read (with view counting and watch-history append), and publishing.

use axum::extract::State;
use axum::http::StatusCode;
use serde::Deserialize;

use clipstream_core::error::CoreError;
use clipstream_core::feed::{FeedFilter, FeedSort, FeedSortField, SortDirection};
use clipstream_core::pagination::{total_pages, PageParams};
use clipstream_core::types::DbId;
use clipstream_db::models::video::{CreateVideo, FeedPage, Video};
use clipstream_db::repositories::{UserRepo, VideoRepo};

use crate::error::{AppError, AppResult};
use crate::extract::{Json, Path, Query};
use crate::middleware::auth::AuthUser;
use crate::query::FeedParams;
use crate::response::ApiResponse;
use crate::state::AppState;

/// Request body for `POST /videos`. Media URLs are caller-provided; upload
/// to object storage happens outside this service.
#[derive(Debug, Deserialize)]
pub struct PublishVideoRequest {
    pub title: String,
    pub description: String,
    pub video_url: String,
    pub thumbnail_url: String,
    pub duration_secs: f64,
}

/// GET /api/v1/videos
///
/// Paginated feed of published videos. Supports substring search over
/// title/description, owner restriction, and whitelisted sorting. An empty
/// result is a 200 with an empty page, not an error.
pub async fn feed(
    State(state): State<AppState>,
    Query(params): Query<FeedParams>,
) -> AppResult<Json<ApiResponse<FeedPage>>> {
    let filter = FeedFilter {
        query: params.query.filter(|q| !q.is_empty()),
        owner_id: params.user_id,
    };
    let sort = FeedSort {
        field: params
            .sort_by
            .as_deref()
            .map(FeedSortField::parse)
            .transpose()
            .map_err(AppError::Core)?,
        direction: params
            .sort_type
            .as_deref()
            .map(SortDirection::parse)
            .transpose()
            .map_err(AppError::Core)?
            .unwrap_or_default(),
    };
    let page = PageParams::normalize(params.page, params.limit);

    let items = VideoRepo::list_feed(&state.pool, &filter, &sort, page).await?;
    let total_items = VideoRepo::count_feed(&state.pool, &filter).await?;

    let response = FeedPage {
        items,
        page: page.page,
        total_items,
        total_pages: total_pages(total_items, page.limit),
    };
    Ok(Json(ApiResponse::ok(response, "Videos fetched")))
}

/// GET /api/v1/videos/{video_id}
///
/// Single-video read: atomically increments the view counter and returns
/// the updated row, then best-effort appends the id to the caller's watch
/// history. The append never fails the read.
pub async fn get_video(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(video_id): Path<DbId>,
) -> AppResult<Json<ApiResponse<Video>>> {
    let video = VideoRepo::increment_views(&state.pool, video_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Video",
            id: video_id,
        }))?;

    if let Err(err) = UserRepo::append_watch_history(&state.pool, auth_user.user_id, video.id).await
    {
        tracing::warn!(
            user_id = auth_user.user_id,
            video_id = video.id,
            error = %err,
            "failed to append watch history"
        );
    }

    Ok(Json(ApiResponse::ok(video, "Video fetched")))
}

/// POST /api/v1/videos
///
/// Publish a video record owned by the caller.
pub async fn publish(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Json(input): Json<PublishVideoRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<Video>>)> {
    if input.title.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Title must not be empty".into(),
        )));
    }
    if input.duration_secs < 0.0 {
        return Err(AppError::Core(CoreError::Validation(
            "Duration must not be negative".into(),
        )));
    }

    let video = VideoRepo::create(
        &state.pool,
        &CreateVideo {
            owner_id: auth_user.user_id,
            title: input.title,
            description: input.description,
            video_url: input.video_url,
            thumbnail_url: input.thumbnail_url,
            duration_secs: input.duration_secs,
        },
    )
    .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::created(video, "Video published")),
    ))
}
