//! Loan application handlers
//!
//! Open by default; `GATED_OPERATIONS` can put any of these behind the
//! credential check.

use axum::{
    extract::{Path, State},
    http::HeaderMap,
    Json,
};

use super::{id_header, positive_id};
use crate::auth::extract_credential;
use crate::domain::entities::{ApplicationId, CustomerId, LoanApplication, NewLoanApplication};
use crate::error::AppError;
use crate::AppState;

/// POST /loan-management/applyLoan
pub async fn apply_loan(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(application): Json<NewLoanApplication>,
) -> Result<String, AppError> {
    state
        .gate
        .apply_loan(extract_credential(&headers), application)
        .await
}

/// GET /loan-management/getLoanApplicationStatus
///
/// Applications of the customer named by the `custId` header.
pub async fn get_loan_application_status(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<Vec<LoanApplication>>, AppError> {
    let customer_id = CustomerId(id_header(&headers, "custId")?);

    let applications = state
        .gate
        .view_customer_applications(extract_credential(&headers), customer_id)
        .await?;

    Ok(Json(applications))
}

/// GET /loan-management/getAll
pub async fn get_all_applications(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<Vec<LoanApplication>>, AppError> {
    let applications = state
        .gate
        .get_all_applications(extract_credential(&headers))
        .await?;

    Ok(Json(applications))
}

/// PUT /loan-management/approveLoanApplication/:applicationId
///
/// The application id is read from the `applicationId` header; the path
/// segment is not consulted.
pub async fn approve_loan_application(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<String, AppError> {
    let application_id = ApplicationId(id_header(&headers, "applicationId")?);

    state
        .gate
        .approve_loan(extract_credential(&headers), application_id)
        .await
}

/// PUT /loan-management/rejectLoanApplication/:applicationId
pub async fn reject_loan_application(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(application_id): Path<i32>,
) -> Result<String, AppError> {
    let application_id = ApplicationId(positive_id("applicationId", application_id)?);

    state
        .gate
        .reject_loan(extract_credential(&headers), application_id)
        .await
}
