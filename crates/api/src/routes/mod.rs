pub mod channels;
pub mod engagement;
pub mod health;
pub mod sessions;
pub mod users;
pub mod videos;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /sessions                                  login (POST), logout (DELETE, auth)
/// /sessions/refresh                          rotate token pair (POST)
///
/// /users                                     register (POST)
/// /users/me                                  current user (GET), update profile (PATCH)
/// /users/me/password                         change password (PATCH)
/// /users/me/watch-history                    resolved watch history (GET)
///
/// /engagement/subscriptions/{channel_id}     toggle subscription (PATCH)
/// /engagement/likes/{kind}/{target_id}       toggle like (PATCH)
/// /engagement/dislikes/{kind}/{target_id}    toggle dislike (PATCH)
/// /engagement/likes/videos                   caller's liked videos (GET)
///
/// /channels/{user_id}/profile                profile with live counts (GET)
/// /channels/{user_id}/stats                  dashboard totals (GET)
///
/// /videos                                    feed (GET), publish (POST, auth)
/// /videos/{video_id}                         read + count view (GET, auth)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Session lifecycle (login, refresh, logout).
        .nest("/sessions", sessions::router())
        // Registration, profile, password, watch history.
        .nest("/users", users::router())
        // Engagement edge toggles and liked videos.
        .nest("/engagement", engagement::router())
        // Read-side channel views.
        .nest("/channels", channels::router())
        // Feed, single-video read, publishing.
        .nest("/videos", videos::router())
}
