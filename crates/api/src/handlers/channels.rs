//! Handlers for the `/channels` resource: profile and dashboard stats.
//!
//! Pure read side. Counts are computed live from the edge tables at query
//! time; nothing here mutates an edge.

use axum::extract::State;

use clipstream_core::error::CoreError;
use clipstream_core::types::DbId;
use clipstream_db::models::user::{ChannelProfile, ChannelStats};
use clipstream_db::repositories::ChannelRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{Json, Path};
use crate::middleware::auth::AuthUser;
use crate::response::ApiResponse;
use crate::state::AppState;

/// GET /api/v1/channels/{user_id}/profile
///
/// Channel public fields plus live subscription counts and whether the
/// caller subscribes. 404 when the user id does not resolve.
pub async fn profile(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(user_id): Path<DbId>,
) -> AppResult<Json<ApiResponse<ChannelProfile>>> {
    let profile = ChannelRepo::profile(&state.pool, user_id, auth_user.user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Channel",
            id: user_id,
        }))?;
    Ok(Json(ApiResponse::ok(profile, "Channel profile fetched")))
}

/// GET /api/v1/channels/{user_id}/stats
///
/// Dashboard totals: video count, summed views, subscribers, and likes
/// across the channel's videos.
pub async fn stats(
    State(state): State<AppState>,
    _auth_user: AuthUser,
    Path(user_id): Path<DbId>,
) -> AppResult<Json<ApiResponse<ChannelStats>>> {
    let stats = ChannelRepo::stats(&state.pool, user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Channel",
            id: user_id,
        }))?;
    Ok(Json(ApiResponse::ok(stats, "Channel stats fetched")))
}
