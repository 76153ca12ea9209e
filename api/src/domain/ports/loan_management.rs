//! Loan management port
//!
//! The set of domain operations the request gate forwards to. Handlers never
//! call this directly; they go through `RequestGate` so the route policy is
//! applied.

use async_trait::async_trait;

use crate::domain::entities::{
    ApplicationId, CashDeposit, CustomerId, CustomerLoan, LoanApplication, LoanId,
    NewLoanApplication, RealEstate,
};
use crate::error::AppError;

#[async_trait]
pub trait LoanManagement: Send + Sync {
    /// Fetch the loan identified by the (loan, customer) pair
    async fn get_loan_details(
        &self,
        loan_id: LoanId,
        customer_id: CustomerId,
    ) -> Result<CustomerLoan, AppError>;

    /// Pledge real estate against an existing loan
    async fn save_real_estate(
        &self,
        credential: &str,
        real_estate: RealEstate,
    ) -> Result<String, AppError>;

    /// Pledge a cash deposit against an existing loan
    async fn save_cash_deposit(
        &self,
        credential: &str,
        cash_deposit: CashDeposit,
    ) -> Result<String, AppError>;

    /// Submit a new application
    async fn apply_loan(&self, application: NewLoanApplication) -> Result<String, AppError>;

    /// Applications of one customer, oldest first
    async fn view_customer_applications(
        &self,
        customer_id: CustomerId,
    ) -> Result<Vec<LoanApplication>, AppError>;

    /// Every application, oldest first
    async fn get_all_applications(&self) -> Result<Vec<LoanApplication>, AppError>;

    async fn approve_loan(&self, application_id: ApplicationId) -> Result<String, AppError>;

    async fn reject_loan(&self, application_id: ApplicationId) -> Result<String, AppError>;
}
