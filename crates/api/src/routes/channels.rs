//! Route definitions for the `/channels` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::channels;
use crate::state::AppState;

/// Routes mounted at `/channels` (all require auth).
///
/// ```text
/// GET /{user_id}/profile  -> profile with live counts
/// GET /{user_id}/stats    -> dashboard totals
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/{user_id}/profile", get(channels::profile))
        .route("/{user_id}/stats", get(channels::stats))
}
