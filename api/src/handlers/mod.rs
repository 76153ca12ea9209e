//! HTTP handlers
//!
//! Axum request handlers for the `/loan-management` endpoints. Handlers
//! only pull identifiers and payloads out of the request; the request gate
//! decides whether the call may proceed.

pub mod applications;
pub mod collateral;
pub mod health;
pub mod loans;

pub use applications::{
    apply_loan, approve_loan_application, get_all_applications, get_loan_application_status,
    reject_loan_application,
};
pub use collateral::{save_cash_deposit_collateral, save_real_estate_collateral};
pub use health::health_check;
pub use loans::get_loan_details;

use axum::http::HeaderMap;

use crate::error::AppError;

/// Identifiers are positive integers
pub(crate) fn positive_id(name: &str, value: i32) -> Result<i32, AppError> {
    if value > 0 {
        Ok(value)
    } else {
        Err(AppError::BadRequest(format!("{} must be positive", name)))
    }
}

/// Read a required positive integer header such as `custId`
pub(crate) fn id_header(headers: &HeaderMap, name: &str) -> Result<i32, AppError> {
    let raw = headers
        .get(name)
        .ok_or_else(|| AppError::BadRequest(format!("Missing {} header", name)))?
        .to_str()
        .map_err(|_| AppError::BadRequest(format!("{} header is not valid text", name)))?;

    let value = raw
        .trim()
        .parse::<i32>()
        .map_err(|_| AppError::BadRequest(format!("{} header must be an integer", name)))?;

    positive_id(name, value)
}
