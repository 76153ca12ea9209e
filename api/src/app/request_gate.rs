//! Request gate
//!
//! Sits between the HTTP handlers and the loan domain. For every operation the
//! route policy marks as gated, the caller's credential is validated with the
//! authorization service before anything else happens; a refused credential
//! never reaches the domain layer.

use std::sync::Arc;

use crate::app::route_policy::{Operation, RoutePolicy};
use crate::auth::fingerprint;
use crate::domain::entities::{
    ApplicationId, CashDeposit, CustomerId, CustomerLoan, LoanApplication, LoanId,
    NewLoanApplication, RealEstate,
};
use crate::domain::ports::{AuthorizationClient, LoanManagement};
use crate::error::AppError;

pub struct RequestGate {
    auth: Arc<dyn AuthorizationClient>,
    loans: Arc<dyn LoanManagement>,
    policy: RoutePolicy,
}

impl RequestGate {
    pub fn new(
        auth: Arc<dyn AuthorizationClient>,
        loans: Arc<dyn LoanManagement>,
        policy: RoutePolicy,
    ) -> Self {
        Self {
            auth,
            loans,
            policy,
        }
    }

    /// Validate the credential for `op`
    ///
    /// Returns the credential when accepted, `None` when refused.
    async fn validate<'a>(
        &self,
        op: Operation,
        credential: Option<&'a str>,
    ) -> Result<Option<&'a str>, AppError> {
        let credential = credential
            .ok_or_else(|| AppError::BadRequest("Missing Authorization header".to_string()))?;

        if self.auth.validate(credential).await? {
            tracing::debug!(operation = %op, credential = %fingerprint(credential), "Credential accepted");
            Ok(Some(credential))
        } else {
            tracing::warn!(operation = %op, credential = %fingerprint(credential), "Credential refused");
            Ok(None)
        }
    }

    /// Gate check for operations the policy may leave open
    ///
    /// A refusal is the plain `Invalid token` response.
    async fn require(&self, op: Operation, credential: Option<&str>) -> Result<(), AppError> {
        if !self.policy.is_gated(op) {
            return Ok(());
        }
        match self.validate(op, credential).await? {
            Some(_) => Ok(()),
            None => Err(AppError::InvalidToken),
        }
    }

    /// GET getLoanDetails/{loanId}/{customerId}
    ///
    /// Always gated.
    pub async fn get_loan_details(
        &self,
        credential: Option<&str>,
        loan_id: LoanId,
        customer_id: CustomerId,
    ) -> Result<CustomerLoan, AppError> {
        match self.validate(Operation::GetLoanDetails, credential).await? {
            Some(_) => self.loans.get_loan_details(loan_id, customer_id).await,
            None => Err(AppError::Authentication(format!(
                "Customer Loan Found With LoanId:{} But Not Found With CustomerId:{}",
                loan_id, customer_id
            ))),
        }
    }

    /// POST saveRealEstateCollateral
    ///
    /// Always gated; the accepted credential is forwarded to the collateral service.
    pub async fn save_real_estate(
        &self,
        credential: Option<&str>,
        real_estate: RealEstate,
    ) -> Result<String, AppError> {
        match self
            .validate(Operation::SaveRealEstateCollateral, credential)
            .await?
        {
            Some(credential) => self.loans.save_real_estate(credential, real_estate).await,
            None => Err(AppError::InvalidToken),
        }
    }

    /// POST saveCashDepositCollateral
    pub async fn save_cash_deposit(
        &self,
        credential: Option<&str>,
        cash_deposit: CashDeposit,
    ) -> Result<String, AppError> {
        match self
            .validate(Operation::SaveCashDepositCollateral, credential)
            .await?
        {
            Some(credential) => {
                tracing::info!(loan_id = %cash_deposit.loan_id, "Saving cash deposit collateral");
                self.loans.save_cash_deposit(credential, cash_deposit).await
            }
            None => Err(AppError::InvalidToken),
        }
    }

    /// POST applyLoan
    pub async fn apply_loan(
        &self,
        credential: Option<&str>,
        application: NewLoanApplication,
    ) -> Result<String, AppError> {
        self.require(Operation::ApplyLoan, credential).await?;
        self.loans.apply_loan(application).await
    }

    /// GET getLoanApplicationStatus
    pub async fn view_customer_applications(
        &self,
        credential: Option<&str>,
        customer_id: CustomerId,
    ) -> Result<Vec<LoanApplication>, AppError> {
        self.require(Operation::ViewCustomerApplications, credential)
            .await?;
        self.loans.view_customer_applications(customer_id).await
    }

    /// GET getAll
    pub async fn get_all_applications(
        &self,
        credential: Option<&str>,
    ) -> Result<Vec<LoanApplication>, AppError> {
        self.require(Operation::GetAllApplications, credential)
            .await?;
        self.loans.get_all_applications().await
    }

    /// PUT approveLoanApplication
    pub async fn approve_loan(
        &self,
        credential: Option<&str>,
        application_id: ApplicationId,
    ) -> Result<String, AppError> {
        self.require(Operation::ApproveApplication, credential)
            .await?;
        self.loans.approve_loan(application_id).await
    }

    /// PUT rejectLoanApplication
    pub async fn reject_loan(
        &self,
        credential: Option<&str>,
        application_id: ApplicationId,
    ) -> Result<String, AppError> {
        self.require(Operation::RejectApplication, credential)
            .await?;
        self.loans.reject_loan(application_id).await
    }
}
