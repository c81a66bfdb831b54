//! Route definitions for the `/users` resource.

use axum::routing::{get, patch, post};
use axum::Router;

use crate::handlers::users;
use crate::state::AppState;

/// Routes mounted at `/users`.
///
/// ```text
/// POST  /                  -> register
/// GET   /me                -> current user (requires auth)
/// PATCH /me                -> update profile (requires auth)
/// PATCH /me/password       -> change password (requires auth)
/// GET   /me/watch-history  -> resolved watch history (requires auth)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(users::register))
        .route("/me", get(users::me).patch(users::update_me))
        .route("/me/password", patch(users::change_password))
        .route("/me/watch-history", get(users::watch_history))
}
