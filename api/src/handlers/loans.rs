//! Loan handlers

use axum::{
    extract::{Path, State},
    http::HeaderMap,
    Json,
};

use super::positive_id;
use crate::auth::extract_credential;
use crate::domain::entities::{CustomerId, CustomerLoan, LoanId};
use crate::error::AppError;
use crate::AppState;

/// GET /loan-management/getLoanDetails/:loanId/:customerId
///
/// Loan details for a (loan, customer) pair. Requires a valid credential.
pub async fn get_loan_details(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path((loan_id, customer_id)): Path<(i32, i32)>,
) -> Result<Json<CustomerLoan>, AppError> {
    let loan_id = LoanId(positive_id("loanId", loan_id)?);
    let customer_id = CustomerId(positive_id("customerId", customer_id)?);

    tracing::debug!(loan_id = %loan_id, customer_id = %customer_id, "Fetching loan details");

    let loan = state
        .gate
        .get_loan_details(extract_credential(&headers), loan_id, customer_id)
        .await?;

    Ok(Json(loan))
}
