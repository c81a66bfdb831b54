//! JWT-based authentication extractor for Axum handlers.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use clipstream_core::error::CoreError;
use clipstream_core::types::DbId;

use crate::auth::jwt::validate_access_token;
use crate::cookies::{self, ACCESS_COOKIE};
use crate::error::AppError;
use crate::state::AppState;

/// Authenticated user extracted from an access token.
///
/// The token is read from the `Authorization: Bearer <token>` header first,
/// falling back to the `accessToken` cookie for browser clients. Use this as
/// an extractor parameter in any handler that requires authentication:
///
/// ```ignore
/// async fn my_handler(user: AuthUser) -> AppResult<Json<()>> {
///     tracing::info!(user_id = user.user_id, handle = %user.handle, "handling request");
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AuthUser {
    /// The user's internal database id (from `claims.sub`).
    pub user_id: DbId,
    /// The user's handle (from `claims.handle`).
    pub handle: String,
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = bearer_token(parts)
            .or_else(|| access_cookie_token(parts))
            .ok_or_else(|| {
                AppError::Core(CoreError::Unauthorized(
                    "Missing access token. Provide Authorization: Bearer <token> or the accessToken cookie".into(),
                ))
            })?;

        let claims = validate_access_token(token, &state.config.jwt).map_err(|_| {
            AppError::Core(CoreError::Unauthorized("Invalid or expired token".into()))
        })?;

        Ok(AuthUser {
            user_id: claims.sub,
            handle: claims.handle,
        })
    }
}

fn bearer_token(parts: &Parts) -> Option<&str> {
    parts
        .headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
}

fn access_cookie_token(parts: &Parts) -> Option<&str> {
    parts
        .headers
        .get("cookie")
        .and_then(|v| v.to_str().ok())
        .and_then(|header| cookies::cookie_value(header, ACCESS_COOKIE))
}
