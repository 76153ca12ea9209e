//! Unified error types for the loan management API
//!
//! This module defines error types for each layer:
//! - `DomainError`: Business rule and persistence errors
//! - `AuthorizationError`: Authorization service client errors
//! - `CollateralError`: Collateral service client errors
//! - `ConfigError`: Startup configuration errors
//! - `AppError`: Application layer errors (mapped to HTTP responses)

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Body returned when a credential is refused on a collateral or policy-gated route
pub const INVALID_TOKEN: &str = "Invalid token";

/// Domain layer errors - pure business logic errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Entity not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Database error: {0}")]
    Database(String),
}

/// Authorization service client errors
#[derive(Debug, Error)]
pub enum AuthorizationError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("Deserialization error: {0}")]
    Deserialization(String),
}

/// Collateral service client errors
#[derive(Debug, Error)]
pub enum CollateralError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("Deserialization error: {0}")]
    Deserialization(String),
}

/// Configuration errors raised at startup
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {message}")]
    Invalid { key: &'static str, message: String },
}

/// Application layer errors - used by the request gate and HTTP handlers
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("Authorization service error: {0}")]
    Authorization(#[from] AuthorizationError),

    #[error("Collateral service error: {0}")]
    Collateral(#[from] CollateralError),

    /// Credential refused on a detail fetch; the message names the loan and customer
    #[error("Authentication failed: {0}")]
    Authentication(String),

    /// Credential refused on a route answering with the plain `Invalid token` body
    #[error("Invalid token")]
    InvalidToken,

    #[error("Invalid request: {0}")]
    BadRequest(String),
}

/// Error response body for JSON responses
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, details) = match &self {
            AppError::InvalidToken => {
                return (StatusCode::FORBIDDEN, INVALID_TOKEN).into_response();
            }
            AppError::Authentication(msg) => {
                (StatusCode::UNAUTHORIZED, "Unauthorized", Some(msg.clone()))
            }
            AppError::Domain(DomainError::NotFound(msg)) => {
                (StatusCode::NOT_FOUND, "Not found", Some(msg.clone()))
            }
            AppError::Domain(DomainError::Validation(msg)) => (
                StatusCode::BAD_REQUEST,
                "Validation error",
                Some(msg.clone()),
            ),
            AppError::Domain(DomainError::Conflict(msg)) => {
                (StatusCode::CONFLICT, "Conflict", Some(msg.clone()))
            }
            AppError::Domain(DomainError::Database(msg)) => {
                tracing::error!("Database error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error",
                    None,
                )
            }
            AppError::Authorization(e) => {
                tracing::error!("Authorization service error: {}", e);
                (StatusCode::BAD_GATEWAY, "Authorization service error", None)
            }
            AppError::Collateral(e) => {
                tracing::error!("Collateral service error: {}", e);
                match e {
                    CollateralError::Api { status, message } => {
                        // Client errors from the collateral service are the caller's to fix
                        let http_status = match *status {
                            400 => StatusCode::BAD_REQUEST,
                            404 => StatusCode::NOT_FOUND,
                            422 => StatusCode::UNPROCESSABLE_ENTITY,
                            _ => StatusCode::BAD_GATEWAY,
                        };
                        (http_status, "Collateral service error", Some(message.clone()))
                    }
                    _ => (StatusCode::BAD_GATEWAY, "Collateral service error", None),
                }
            }
            AppError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, "Bad request", Some(msg.clone()))
            }
        };

        let body = Json(ErrorResponse {
            error: error.to_string(),
            details,
        });

        (status, body).into_response()
    }
}
