//! Handlers for the `/users` resource: registration, the caller's profile,
//! password change, and watch history.

use axum::extract::State;
use axum::http::StatusCode;
use serde::Deserialize;

use clipstream_core::error::CoreError;
use clipstream_db::models::user::{CreateUser, UpdateUser, UserResponse};
use clipstream_db::models::video::VideoWithOwner;
use clipstream_db::repositories::UserRepo;

use crate::auth::password::{hash_password, validate_password_strength, verify_password};
use crate::error::{AppError, AppResult};
use crate::extract::Json;
use crate::middleware::auth::AuthUser;
use crate::response::ApiResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// Request body for `POST /users`.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub handle: String,
    pub email: String,
    pub password: String,
    pub display_name: String,
    pub avatar_url: Option<String>,
    pub cover_image_url: Option<String>,
}

/// Request body for `PATCH /users/me/password`.
#[derive(Debug, Deserialize)]
pub struct ChangePasswordRequest {
    pub old_password: String,
    pub new_password: String,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/users
///
/// Register a new account. The handle is lowercased before storage so
/// uniqueness is case-insensitive. Handle/email collisions surface as 409
/// naming the violated constraint.
pub async fn register(
    State(state): State<AppState>,
    Json(input): Json<RegisterRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<UserResponse>>)> {
    if input.handle.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Handle must not be empty".into(),
        )));
    }
    if input.email.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Email must not be empty".into(),
        )));
    }
    validate_password_strength(&input.password)
        .map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;

    let password_hash = hash_password(&input.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let user = UserRepo::create(
        &state.pool,
        &CreateUser {
            handle: input.handle.to_lowercase(),
            email: input.email,
            password_hash,
            display_name: input.display_name,
            avatar_url: input.avatar_url,
            cover_image_url: input.cover_image_url,
        },
    )
    .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::created(user.into(), "User registered")),
    ))
}

/// GET /api/v1/users/me
pub async fn me(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> AppResult<Json<ApiResponse<UserResponse>>> {
    let user = UserRepo::find_by_id(&state.pool, auth_user.user_id)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".into()))?;
    Ok(Json(ApiResponse::ok(user.into(), "Current user fetched")))
}

/// PATCH /api/v1/users/me
///
/// Update profile fields. The password and session slot are never touched
/// through this path.
pub async fn update_me(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Json(input): Json<UpdateUser>,
) -> AppResult<Json<ApiResponse<UserResponse>>> {
    let user = UserRepo::update(&state.pool, auth_user.user_id, &input)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".into()))?;
    Ok(Json(ApiResponse::ok(user.into(), "Profile updated")))
}

/// PATCH /api/v1/users/me/password
///
/// Change the password after verifying the old one. The session slot is
/// left untouched; the current session stays valid.
pub async fn change_password(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Json(input): Json<ChangePasswordRequest>,
) -> AppResult<Json<ApiResponse<()>>> {
    let user = UserRepo::find_by_id(&state.pool, auth_user.user_id)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".into()))?;

    let old_valid = verify_password(&input.old_password, &user.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;
    if !old_valid {
        return Err(AppError::BadRequest("Old password is incorrect".into()));
    }

    validate_password_strength(&input.new_password)
        .map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;

    let new_hash = hash_password(&input.new_password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;
    UserRepo::update_password(&state.pool, user.id, &new_hash).await?;

    Ok(Json(ApiResponse::ok((), "Password changed")))
}

/// GET /api/v1/users/me/watch-history
///
/// The caller's watch history, oldest first, each entry joined with the
/// video's owner. Ids that no longer resolve to a video are omitted.
pub async fn watch_history(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> AppResult<Json<ApiResponse<Vec<VideoWithOwner>>>> {
    let items = UserRepo::watch_history(&state.pool, auth_user.user_id).await?;
    Ok(Json(ApiResponse::ok(items, "Watch history fetched")))
}
