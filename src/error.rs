//! Unified error model
//! Defines all error kinds and the error response shape

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::Serialize;
use thiserror::Error;

/// Result alias
pub type Result<T> = std::result::Result<T, AppError>;

/// Application error type
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    /// Login failure: unknown email or wrong password. Deliberately
    /// indistinct so the response does not reveal which one it was.
    #[error("Invalid credentials")]
    Unauthorized,

    /// Request carried no bearer token
    #[error("Access denied, no token provided")]
    NoToken,

    /// Signature mismatch, malformed payload, or expiry exceeded.
    /// Collapsed into one kind so clients cannot distinguish them.
    #[error("Invalid or expired token")]
    InvalidToken,

    /// Valid identity, wrong role for the resource
    #[error("Access denied, insufficient permissions")]
    InsufficientRole,

    /// Role check reached without an authenticated identity
    #[error("Access denied")]
    AccessDenied,

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Invalid request: {0}")]
    BadRequest(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl AppError {
    /// HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Unauthorized => StatusCode::UNAUTHORIZED,
            // Every authentication/authorization rejection is 403
            AppError::NoToken
            | AppError::InvalidToken
            | AppError::InsufficientRole
            | AppError::AccessDenied => StatusCode::FORBIDDEN,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Database(_) | AppError::Config(_) | AppError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// User-facing message, free of internal details
    pub fn user_message(&self) -> String {
        match self {
            AppError::Unauthorized => "Invalid credentials".to_string(),
            AppError::NoToken => "Access denied, no token provided".to_string(),
            AppError::InvalidToken => "Invalid or expired token".to_string(),
            AppError::InsufficientRole => {
                "Access denied, insufficient permissions".to_string()
            }
            AppError::AccessDenied => "Access denied".to_string(),
            AppError::NotFound(msg) => format!("{} not found", msg),
            AppError::BadRequest(msg) => msg.clone(),
            AppError::Database(_) => "Database error occurred".to_string(),
            AppError::Config(_) => "Configuration error".to_string(),
            AppError::Internal(_) => "Internal server error".to_string(),
        }
    }

    pub fn code(&self) -> u16 {
        self.status_code().as_u16()
    }

    pub fn not_found(msg: &str) -> Self {
        AppError::NotFound(msg.to_string())
    }

    pub fn bad_request(msg: &str) -> Self {
        AppError::BadRequest(msg.to_string())
    }

    pub fn internal(msg: &str) -> Self {
        AppError::Internal(msg.to_string())
    }
}

/// Error response DTO
#[derive(Serialize)]
pub struct ErrorResponse {
    pub message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!(code = self.code(), error = %self, "Request failed");
        } else {
            tracing::debug!(code = self.code(), error = %self, "Request rejected");
        }

        let body = ErrorResponse {
            message: self.user_message(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<config::ConfigError> for AppError {
    fn from(e: config::ConfigError) -> Self {
        AppError::Config(e.to_string())
    }
}
