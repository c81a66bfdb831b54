//! Route definitions for the `/engagement` resource.

use axum::routing::{get, patch};
use axum::Router;

use crate::handlers::engagement;
use crate::state::AppState;

/// Routes mounted at `/engagement` (all require auth).
///
/// ```text
/// PATCH /subscriptions/{channel_id}    -> toggle subscription
/// PATCH /likes/{kind}/{target_id}      -> toggle like
/// PATCH /dislikes/{kind}/{target_id}   -> toggle dislike
/// GET   /likes/videos                  -> caller's liked videos
/// ```
///
/// `/likes/videos` is registered before the parameterized like route so the
/// literal segment wins.
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/subscriptions/{channel_id}",
            patch(engagement::toggle_subscription),
        )
        .route("/likes/videos", get(engagement::liked_videos))
        .route("/likes/{kind}/{target_id}", patch(engagement::toggle_like))
        .route(
            "/dislikes/{kind}/{target_id}",
            patch(engagement::toggle_dislike),
        )
}
