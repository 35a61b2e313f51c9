//! Unified error handling
//!
//! Application error type and response envelope. Every variant maps to a
//! stable machine-readable code so API consumers can branch on failures —
//! in particular the two shipping resolution failures, which drive
//! different storefront messaging:
//!
//! | Code  | Status | Meaning |
//! |-------|--------|---------|
//! | E0002 | 400 | validation failed |
//! | E0003 | 404 | resource not found |
//! | E0004 | 409 | resource conflict |
//! | E0005 | 422 | business rule violation |
//! | E0006 | 400 | invalid request |
//! | E1101 | 404 | postcode matches no shipping zone |
//! | E1102 | 404 | zone resolved, no rate tier covers the weight |
//! | E9001 | 500 | internal error |
//! | E9002 | 500 | database error |

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use tracing::error;

use crate::bundles::pricer::PricingError;
use crate::db::repository::RepoError;

/// API response envelope
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
    /// Error code (E0000 = success)
    pub code: String,
    /// Message
    pub message: String,
    /// Response data
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

/// Application error enum
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // ========== Business logic errors (4xx) ==========
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Resource already exists: {0}")]
    Conflict(String),

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Business rule violation: {0}")]
    BusinessRule(String),

    #[error("Invalid request: {0}")]
    Invalid(String),

    // ========== Shipping resolution errors (4xx) ==========
    #[error("Zone not found: {0}")]
    ZoneNotFound(String),

    #[error("Rate not found: {0}")]
    RateNotFound(String),

    // ========== System errors (5xx) ==========
    #[error("Database error: {0}")]
    Database(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Result type for handlers and services
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            // Not found (404)
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "E0003", msg.as_str()),

            // Conflict (409)
            AppError::Conflict(msg) => (StatusCode::CONFLICT, "E0004", msg.as_str()),

            // Validation (400)
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "E0002", msg.as_str()),

            // Business rule (422)
            AppError::BusinessRule(msg) => {
                (StatusCode::UNPROCESSABLE_ENTITY, "E0005", msg.as_str())
            }

            // Invalid request (400)
            AppError::Invalid(msg) => (StatusCode::BAD_REQUEST, "E0006", msg.as_str()),

            // Shipping resolution (404, distinct codes)
            AppError::ZoneNotFound(msg) => (StatusCode::NOT_FOUND, "E1101", msg.as_str()),
            AppError::RateNotFound(msg) => (StatusCode::NOT_FOUND, "E1102", msg.as_str()),

            // Database errors (500)
            AppError::Database(msg) => {
                error!(target: "database", error = %msg, "Database error occurred");
                (StatusCode::INTERNAL_SERVER_ERROR, "E9002", "Database error")
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

// ========== Conversions from inner error types ==========

impl From<RepoError> for AppError {
    fn from(e: RepoError) -> Self {
        match e {
            RepoError::NotFound(msg) => AppError::NotFound(msg),
            RepoError::Duplicate(msg) => AppError::Conflict(msg),
            RepoError::Database(msg) => AppError::Database(msg),
            RepoError::Validation(msg) => AppError::Validation(msg),
        }
    }
}

impl From<PricingError> for AppError {
    fn from(e: PricingError) -> Self {
        AppError::Validation(e.to_string())
    }
}
