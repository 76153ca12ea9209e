//! Repository port traits
//!
//! These traits define the interface for data persistence.
//! Implementations are provided by adapters (PostgreSQL or in-memory).

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::entities::{
    ApplicationId, ApplicationStatus, CollateralId, CustomerId, CustomerLoan, LoanApplication,
    LoanId, NewCustomerLoan, NewLoanApplication,
};
use crate::error::DomainError;

/// Repository for CustomerLoan entities
#[async_trait]
pub trait CustomerLoanRepository: Send + Sync {
    /// Find a loan by id, only if it belongs to the given customer
    async fn find(
        &self,
        loan_id: LoanId,
        customer_id: CustomerId,
    ) -> Result<Option<CustomerLoan>, DomainError>;

    /// Open a new loan; the repository assigns the id
    async fn create(&self, loan: &NewCustomerLoan) -> Result<CustomerLoan, DomainError>;

    /// Link pledged collateral to a loan that holds none yet
    ///
    /// Fails with `Conflict` when the loan already holds collateral.
    async fn attach_collateral(
        &self,
        loan_id: LoanId,
        collateral_id: CollateralId,
    ) -> Result<(), DomainError>;
}

/// Repository for LoanApplication entities
///
/// Listings are ordered by application id, ascending.
#[async_trait]
pub trait LoanApplicationRepository: Send + Sync {
    /// Store a submission with status `submitted`
    async fn create(&self, application: &NewLoanApplication)
        -> Result<LoanApplication, DomainError>;

    async fn find_by_id(&self, id: ApplicationId) -> Result<Option<LoanApplication>, DomainError>;

    async fn find_by_customer(
        &self,
        customer_id: CustomerId,
    ) -> Result<Vec<LoanApplication>, DomainError>;

    async fn find_all(&self) -> Result<Vec<LoanApplication>, DomainError>;

    /// Move an application from `from` to `to` in one conditional write
    ///
    /// Returns `false` when the application is no longer in `from`.
    async fn transition(
        &self,
        id: ApplicationId,
        from: ApplicationStatus,
        to: ApplicationStatus,
        decided_at: Option<DateTime<Utc>>,
    ) -> Result<bool, DomainError>;
}
