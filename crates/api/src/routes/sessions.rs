//! Route definitions for the `/sessions` resource.

use axum::routing::post;
use axum::Router;

use crate::handlers::sessions;
use crate::state::AppState;

/// Routes mounted at `/sessions`.
///
/// ```text
/// POST   /          -> login
/// POST   /refresh   -> refresh (rotation)
/// DELETE /          -> logout (requires auth)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(sessions::login).delete(sessions::logout))
        .route("/refresh", post(sessions::refresh))
}
