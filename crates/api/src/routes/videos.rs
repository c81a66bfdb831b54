//! Route definitions for the `/videos` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::videos;
use crate::state::AppState;

/// Routes mounted at `/videos`.
///
/// ```text
/// GET  /            -> published feed (public)
/// POST /            -> publish video record (requires auth)
/// GET  /{video_id}  -> read + count view + record history (requires auth)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(videos::feed).post(videos::publish))
        .route("/{video_id}", get(videos::get_video))
}
