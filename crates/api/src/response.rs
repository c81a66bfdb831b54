//! Shared response envelope for API handlers.
//!
//! Every endpoint -- success and failure -- returns the same shape:
//! `{ statusCode, data, message, success, errors }`. Use [`ApiResponse`]
//! instead of ad-hoc `serde_json::json!` so the envelope stays consistent
//! and type-checked. Error responses are produced by
//! [`crate::error::AppError`] in the same shape.

use serde::Serialize;

/// Standard response envelope. Serialized in camelCase to match the wire
/// surface clients consume.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T: Serialize> {
    pub status_code: u16,
    pub data: T,
    pub message: String,
    pub success: bool,
    pub errors: Vec<String>,
}

impl<T: Serialize> ApiResponse<T> {
    /// A 200 envelope with the given payload and message.
    pub fn ok(data: T, message: &str) -> Self {
        Self::with_status(200, data, message)
    }

    /// A 201 envelope for newly created resources.
    pub fn created(data: T, message: &str) -> Self {
        Self::with_status(201, data, message)
    }

    fn with_status(status_code: u16, data: T, message: &str) -> Self {
        Self {
            status_code,
            data,
            message: message.to_string(),
            success: status_code < 400,
            errors: Vec::new(),
        }
    }
}
