//! Handlers for the `/sessions` resource (login, refresh, logout).
//!
//! Sessions are single-slot: the SHA-256 digest of the currently valid
//! refresh token lives on the user row, and every login or refresh
//! overwrites it. Whoever holds a superseded refresh token is locked out
//! even though its signature still verifies.

use axum::extract::State;
use axum::http::{header, HeaderMap, HeaderValue};
use serde::{Deserialize, Serialize};

use clipstream_core::error::CoreError;
use clipstream_db::models::user::{User, UserResponse};
use clipstream_db::repositories::UserRepo;

use crate::auth::jwt::{
    generate_access_token, generate_refresh_token, hash_refresh_token, validate_refresh_token,
};
use crate::auth::password::verify_password;
use crate::cookies::{clearing_cookie, credential_cookie, ACCESS_COOKIE, REFRESH_COOKIE};
use crate::error::{AppError, AppResult};
use crate::extract::Json;
use crate::middleware::auth::AuthUser;
use crate::response::ApiResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /sessions`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    /// Handle or email.
    pub identifier: String,
    pub password: String,
}

/// Request body for `POST /sessions/refresh`. The token may come from the
/// body or from the `refreshToken` cookie; both are optional here.
#[derive(Debug, Default, Deserialize)]
pub struct RefreshRequest {
    #[serde(alias = "refreshToken")]
    pub refresh_token: Option<String>,
}

/// Successful authentication response returned by login and refresh.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionResponse {
    pub user: UserResponse,
    pub access_token: String,
    pub refresh_token: String,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/sessions
///
/// Authenticate with handle-or-email + password. An unknown identifier is a
/// 404; a wrong password is a 401. Returns both tokens in the body and as
/// cookies. A successful login overwrites the session slot, revoking any
/// prior session.
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> AppResult<(HeaderMap, Json<ApiResponse<SessionResponse>>)> {
    let user = UserRepo::find_by_identifier(&state.pool, &input.identifier)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".into()))?;

    let password_valid = verify_password(&input.password, &user.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;
    if !password_valid {
        return Err(AppError::Core(CoreError::Unauthorized(
            "Invalid password".into(),
        )));
    }

    let (headers, response) = issue_session(&state, user).await?;
    Ok((headers, Json(ApiResponse::ok(response, "Logged in"))))
}

/// POST /api/v1/sessions/refresh
///
/// Exchange the current refresh token for a new pair (rotation). The
/// presented token must verify AND its digest must equal the stored slot;
/// a rotated-away token fails the second check.
pub async fn refresh(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: axum::body::Bytes,
) -> AppResult<(HeaderMap, Json<ApiResponse<SessionResponse>>)> {
    // The body is optional; cookie-only clients send none at all.
    let from_body = if body.is_empty() {
        None
    } else {
        serde_json::from_slice::<RefreshRequest>(&body)
            .map_err(|e| AppError::BadRequest(format!("Invalid request body: {e}")))?
            .refresh_token
    };
    let token = from_body
        .or_else(|| refresh_cookie_token(&headers))
        .ok_or_else(|| AppError::Core(CoreError::Unauthorized("Missing refresh token".into())))?;

    let claims = validate_refresh_token(&token, &state.config.jwt).map_err(|_| {
        AppError::Core(CoreError::Unauthorized(
            "Invalid or expired refresh token".into(),
        ))
    })?;

    let user = UserRepo::find_by_id(&state.pool, claims.sub)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::Unauthorized("User no longer exists".into())))?;

    // Single-slot comparison: only the most recently issued token's digest
    // matches. Anything else has been rotated away or logged out.
    let presented_digest = hash_refresh_token(&token);
    if user.refresh_token_hash.as_deref() != Some(presented_digest.as_str()) {
        return Err(AppError::Core(CoreError::Unauthorized(
            "Refresh token is expired or already used".into(),
        )));
    }

    let (headers, response) = issue_session(&state, user).await?;
    Ok((headers, Json(ApiResponse::ok(response, "Session refreshed"))))
}

/// DELETE /api/v1/sessions
///
/// Clear the session slot and expire both cookies. Idempotent.
pub async fn logout(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> AppResult<(HeaderMap, Json<ApiResponse<()>>)> {
    UserRepo::clear_refresh_token_hash(&state.pool, auth_user.user_id).await?;

    let mut headers = HeaderMap::new();
    append_set_cookie(&mut headers, &clearing_cookie(ACCESS_COOKIE))?;
    append_set_cookie(&mut headers, &clearing_cookie(REFRESH_COOKIE))?;

    Ok((headers, Json(ApiResponse::ok((), "Logged out"))))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Mint a token pair for `user`, persist the refresh digest in the session
/// slot, and build the cookie headers plus response body.
async fn issue_session(
    state: &AppState,
    user: User,
) -> AppResult<(HeaderMap, SessionResponse)> {
    let access_token = generate_access_token(user.id, &user.handle, &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;

    let (refresh_token, refresh_digest) = generate_refresh_token(user.id, &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;

    let stored = UserRepo::store_refresh_token_hash(&state.pool, user.id, &refresh_digest).await?;
    if !stored {
        return Err(AppError::Core(CoreError::Unauthorized(
            "User no longer exists".into(),
        )));
    }

    let mut headers = HeaderMap::new();
    append_set_cookie(
        &mut headers,
        &credential_cookie(
            ACCESS_COOKIE,
            &access_token,
            state.config.jwt.access_expiry_secs(),
        ),
    )?;
    append_set_cookie(
        &mut headers,
        &credential_cookie(
            REFRESH_COOKIE,
            &refresh_token,
            state.config.jwt.refresh_expiry_secs(),
        ),
    )?;

    let response = SessionResponse {
        user: user.into(),
        access_token,
        refresh_token,
    };
    Ok((headers, response))
}

fn append_set_cookie(headers: &mut HeaderMap, cookie: &str) -> AppResult<()> {
    let value = HeaderValue::from_str(cookie)
        .map_err(|e| AppError::InternalError(format!("Invalid cookie header: {e}")))?;
    headers.append(header::SET_COOKIE, value);
    Ok(())
}

fn refresh_cookie_token(headers: &HeaderMap) -> Option<String> {
    headers
        .get(header::COOKIE)
        .and_then(|v| v.to_str().ok())
        .and_then(|header| crate::cookies::cookie_value(header, REFRESH_COOKIE))
        .map(str::to_string)
}
