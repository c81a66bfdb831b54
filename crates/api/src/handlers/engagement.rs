//! Handlers for the `/engagement` resource: subscription, like, and dislike
//! toggles, plus the caller's liked videos.

use axum::extract::State;

use clipstream_core::engagement::TargetKind;
use clipstream_core::types::DbId;
use clipstream_db::models::engagement::{Dislike, Like, Subscription, ToggleOutcome};
use clipstream_db::models::video::VideoWithOwner;
use clipstream_db::repositories::{DislikeRepo, LikeRepo, SubscriptionRepo};

use crate::error::{AppError, AppResult};
use crate::extract::{Json, Path};
use crate::middleware::auth::AuthUser;
use crate::response::ApiResponse;
use crate::state::AppState;

/// PATCH /api/v1/engagement/subscriptions/{channel_id}
///
/// Toggle the caller's subscription to a channel. Responds with the
/// resulting state (`on`/`off`) and the edge that was created or deleted.
pub async fn toggle_subscription(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(channel_id): Path<DbId>,
) -> AppResult<Json<ApiResponse<ToggleOutcome<Subscription>>>> {
    let outcome = SubscriptionRepo::toggle(&state.pool, auth_user.user_id, channel_id).await?;
    Ok(Json(ApiResponse::ok(outcome, "Subscription toggled")))
}

/// PATCH /api/v1/engagement/likes/{kind}/{target_id}
///
/// Toggle the caller's like on a video, comment, or tweet. An unknown kind
/// is a 400; the target's existence is not checked.
pub async fn toggle_like(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path((kind, target_id)): Path<(String, DbId)>,
) -> AppResult<Json<ApiResponse<ToggleOutcome<Like>>>> {
    let kind = TargetKind::parse(&kind).map_err(AppError::Core)?;
    let outcome = LikeRepo::toggle(&state.pool, auth_user.user_id, kind, target_id).await?;
    Ok(Json(ApiResponse::ok(outcome, "Like toggled")))
}

/// PATCH /api/v1/engagement/dislikes/{kind}/{target_id}
///
/// Toggle the caller's dislike. Independent of likes: both edges may exist
/// for the same target.
pub async fn toggle_dislike(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path((kind, target_id)): Path<(String, DbId)>,
) -> AppResult<Json<ApiResponse<ToggleOutcome<Dislike>>>> {
    let kind = TargetKind::parse(&kind).map_err(AppError::Core)?;
    let outcome = DislikeRepo::toggle(&state.pool, auth_user.user_id, kind, target_id).await?;
    Ok(Json(ApiResponse::ok(outcome, "Dislike toggled")))
}

/// GET /api/v1/engagement/likes/videos
///
/// Videos the caller has liked, newest like first.
pub async fn liked_videos(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> AppResult<Json<ApiResponse<Vec<VideoWithOwner>>>> {
    let items = LikeRepo::list_liked_videos(&state.pool, auth_user.user_id).await?;
    Ok(Json(ApiResponse::ok(items, "Liked videos fetched")))
}
