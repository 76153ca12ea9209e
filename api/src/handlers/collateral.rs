//! Collateral handlers
//!
//! Both endpoints require a valid credential; a refused credential answers
//! 403 with the body `Invalid token`.

use axum::{extract::State, http::HeaderMap, Json};

use crate::auth::extract_credential;
use crate::domain::entities::{CashDeposit, RealEstate};
use crate::error::AppError;
use crate::AppState;

/// POST /loan-management/saveRealEstateCollateral
pub async fn save_real_estate_collateral(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(real_estate): Json<RealEstate>,
) -> Result<String, AppError> {
    state
        .gate
        .save_real_estate(extract_credential(&headers), real_estate)
        .await
}

/// POST /loan-management/saveCashDepositCollateral
pub async fn save_cash_deposit_collateral(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(cash_deposit): Json<CashDeposit>,
) -> Result<String, AppError> {
    state
        .gate
        .save_cash_deposit(extract_credential(&headers), cash_deposit)
        .await
}
