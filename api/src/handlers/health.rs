//! Health check

use axum::http::StatusCode;

/// GET /loan-management/health-check
///
/// Always answers `Ok`; does not touch any collaborator.
pub async fn health_check() -> (StatusCode, &'static str) {
    (StatusCode::OK, "Ok")
}
