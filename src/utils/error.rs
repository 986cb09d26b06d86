//! Unified error handling
//!
//! Application-level error type and API response envelope:
//! - [`AppError`] - application error enum, maps onto HTTP responses
//! - [`AppResponse`] - API response structure
//!
//! # Error codes
//!
//! | Prefix | Category | Examples |
//! |--------|----------|----------|
//! | E0xxx | General | E0003 not found, E0006 invalid request |
//! | E7xxx | Table/ticket | E7002 invalid ticket, E7003 ticket expired |
//! | E9xxx | System | E9002 database, E9003 store unavailable |
//!
//! # Usage
//!
//! ```ignore
//! // Return an error
//! Err(AppError::not_found("Table 12 not found"))
//!
//! // Return a success response
//! Ok(ok(data))
//! ```

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use tracing::{error, warn};

use crate::db::repository::StoreError;

/// Unified API response envelope
///
/// ```json
/// {
///   "code": "E0000",
///   "message": "Success",
///   "data": { ... }
/// }
/// ```
#[derive(Debug, Serialize)]
pub struct AppResponse<T> {
    /// Error code (E0000 means success)
    pub code: String,
    /// Human-readable message
    pub message: String,
    /// Response payload
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

/// Application error enum
///
/// Every variant keeps enough detail for a client to tell "re-scan the QR
/// code" from "try again" from "contact support"; nothing is collapsed into
/// a generic failure.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // ========== Business errors (4xx) ==========
    #[error("Resource not found: {0}")]
    /// Referenced resource does not exist (404)
    NotFound(String),

    #[error("Resource already exists: {0}")]
    /// Duplicate resource (409)
    Conflict(String),

    #[error("Validation failed: {0}")]
    /// Payload failed validation (400)
    Validation(String),

    #[error("Invalid request: {0}")]
    /// Malformed request (400)
    Invalid(String),

    // ========== Ticket errors (403) ==========
    #[error("Invalid session ticket")]
    /// Session token missing, mismatched, or already consumed (403)
    InvalidTicket,

    #[error("Session ticket expired")]
    /// Token matched but past its window (403)
    TicketExpired,

    // ========== System errors (5xx) ==========
    #[error("Database error: {0}")]
    /// Backing store failed an operation (500)
    Database(String),

    #[error("Store unavailable: {0}")]
    /// Transient store failure, safe to retry (503)
    Unavailable(String),

    #[error("Internal server error: {0}")]
    /// Unexpected internal failure (500)
    Internal(String),
}

impl AppError {
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn database(msg: impl Into<String>) -> Self {
        Self::Database(msg.into())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            // Not found (404)
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "E0003", msg.as_str()),

            // Conflict (409)
            AppError::Conflict(msg) => (StatusCode::CONFLICT, "E0004", msg.as_str()),

            // Validation (400)
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "E0002", msg.as_str()),

            // Invalid request (400)
            AppError::Invalid(msg) => (StatusCode::BAD_REQUEST, "E0006", msg.as_str()),

            // Ticket errors (403) - client must re-scan the QR code
            AppError::InvalidTicket => (
                StatusCode::FORBIDDEN,
                "E7002",
                "Invalid session code. The table may already have ordered.",
            ),
            AppError::TicketExpired => (
                StatusCode::FORBIDDEN,
                "E7003",
                "Session expired. Please scan the QR code again.",
            ),

            // Database errors (500)
            AppError::Database(msg) => {
                error!(target: "database", error = %msg, "Database error occurred");
                (StatusCode::INTERNAL_SERVER_ERROR, "E9002", "Database error")
            }

            // Store unavailable (503) - retryable
            AppError::Unavailable(msg) => {
                warn!(target: "database", error = %msg, "Store unavailable");
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    "E9003",
                    "Store temporarily unavailable, please retry",
                )
            }

            // Internal errors (500)
            AppError::Internal(msg) => {
                error!(target: "internal", error = %msg, "Internal error occurred");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "E9001",
                    "Internal server error",
                )
            }
        };

        let body = Json(AppResponse::<()> {
            code: code.to_string(),
            message: message.to_string(),
            data: None,
        });

        (status, body).into_response()
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Unavailable(msg) => AppError::Unavailable(msg),
            StoreError::Duplicate(msg) => AppError::Conflict(msg),
            StoreError::Backend(msg) => AppError::Database(msg),
        }
    }
}

// ========== Helper functions ==========

/// Create a successful response
pub fn ok<T: Serialize>(data: T) -> Json<AppResponse<T>> {
    Json(AppResponse {
        code: "E0000".to_string(),
        message: "Success".to_string(),
        data: Some(data),
    })
}

/// Create a successful response with custom message
pub fn ok_with_message<T: Serialize>(data: T, message: impl Into<String>) -> Json<AppResponse<T>> {
    Json(AppResponse {
        code: "E0000".to_string(),
        message: message.into(),
        data: Some(data),
    })
}
