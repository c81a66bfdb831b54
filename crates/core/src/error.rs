//! Domain-level error type.
//!
//! `CoreError` is the single error vocabulary the HTTP layer translates into
//! status codes. Repositories return `sqlx::Error` directly; handlers and
//! domain helpers return `CoreError`.

use crate::types::DbId;

/// Domain error raised by core validation and lookups.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A referenced entity does not exist.
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: DbId },

    /// Input failed validation before any store access.
    #[error("{0}")]
    Validation(String),

    /// A uniqueness or state conflict.
    #[error("{0}")]
    Conflict(String),

    /// Missing, invalid, expired, or superseded credential.
    #[error("{0}")]
    Unauthorized(String),

    /// Authenticated but not allowed.
    #[error("{0}")]
    Forbidden(String),

    /// Unexpected internal failure.
    #[error("{0}")]
    Internal(String),
}
