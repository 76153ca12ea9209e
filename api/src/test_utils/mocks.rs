//! Mock implementations of port traits
//!
//! These can be configured for testing and record how they were called.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicI32, AtomicUsize, Ordering};
use std::sync::Mutex;

use chrono::{DateTime, Utc};

use crate::adapters::{InMemoryCustomerLoanRepository, InMemoryLoanApplicationRepository};
use crate::app::Operation;
use crate::domain::entities::{
    ApplicationId, ApplicationStatus, CashDeposit, CollateralId, CollateralReceipt, CustomerId,
    CustomerLoan, LoanApplication, LoanId, NewCustomerLoan, NewLoanApplication, RealEstate,
};
use crate::domain::ports::{
    AuthorizationClient, CollateralClient, CustomerLoanRepository, LoanApplicationRepository,
    LoanManagement,
};
use crate::error::{AppError, AuthorizationError, CollateralError, DomainError};

// ============================================================================
// Authorization Client
// ============================================================================

#[derive(Debug, Clone, Copy)]
enum Verdict {
    Accept,
    Refuse,
    Unreachable,
}

/// Authorization client answering the same verdict for every credential
pub struct StubAuthorizationClient {
    verdict: Verdict,
    calls: AtomicUsize,
    seen: Mutex<Vec<String>>,
}

impl StubAuthorizationClient {
    fn with_verdict(verdict: Verdict) -> Self {
        Self {
            verdict,
            calls: AtomicUsize::new(0),
            seen: Mutex::new(Vec::new()),
        }
    }

    pub fn accepting() -> Self {
        Self::with_verdict(Verdict::Accept)
    }

    pub fn refusing() -> Self {
        Self::with_verdict(Verdict::Refuse)
    }

    /// Simulates an authorization service that cannot be reached
    pub fn unreachable() -> Self {
        Self::with_verdict(Verdict::Unreachable)
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Credentials passed to `validate`, in call order
    pub fn seen(&self) -> Vec<String> {
        self.seen.lock().unwrap().clone()
    }
}

#[async_trait]
impl AuthorizationClient for StubAuthorizationClient {
    async fn validate(&self, credential: &str) -> Result<bool, AuthorizationError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.seen.lock().unwrap().push(credential.to_string());

        match self.verdict {
            Verdict::Accept => Ok(true),
            Verdict::Refuse => Ok(false),
            Verdict::Unreachable => Err(AuthorizationError::Api {
                status: 503,
                message: "authorization service unavailable".to_string(),
            }),
        }
    }
}

// ============================================================================
// Loan Management
// ============================================================================

/// Loan domain double with canned answers and per-operation call counts
#[derive(Default)]
pub struct RecordingLoanManagement {
    loan: Option<CustomerLoan>,
    applications: Vec<LoanApplication>,
    calls: Mutex<HashMap<Operation, usize>>,
    credentials: Mutex<Vec<String>>,
}

impl RecordingLoanManagement {
    pub fn new() -> Self {
        Self::default()
    }

    /// The only loan `get_loan_details` will find
    pub fn with_loan(mut self, loan: CustomerLoan) -> Self {
        self.loan = Some(loan);
        self
    }

    /// Applications returned by the listings, in this order
    pub fn with_applications(mut self, applications: Vec<LoanApplication>) -> Self {
        self.applications = applications;
        self
    }

    pub fn calls(&self, op: Operation) -> usize {
        self.calls.lock().unwrap().get(&op).copied().unwrap_or(0)
    }

    /// Credentials forwarded to the collateral saves
    pub fn credentials(&self) -> Vec<String> {
        self.credentials.lock().unwrap().clone()
    }

    fn record(&self, op: Operation) {
        *self.calls.lock().unwrap().entry(op).or_insert(0) += 1;
    }
}

#[async_trait]
impl LoanManagement for RecordingLoanManagement {
    async fn get_loan_details(
        &self,
        loan_id: LoanId,
        customer_id: CustomerId,
    ) -> Result<CustomerLoan, AppError> {
        self.record(Operation::GetLoanDetails);
        self.loan
            .clone()
            .filter(|l| l.loan_id == loan_id && l.customer_id == customer_id)
            .ok_or_else(|| DomainError::NotFound(format!("Loan {} not found", loan_id)).into())
    }

    async fn save_real_estate(
        &self,
        credential: &str,
        _real_estate: RealEstate,
    ) -> Result<String, AppError> {
        self.record(Operation::SaveRealEstateCollateral);
        self.credentials.lock().unwrap().push(credential.to_string());
        Ok("real estate saved".to_string())
    }

    async fn save_cash_deposit(
        &self,
        credential: &str,
        _cash_deposit: CashDeposit,
    ) -> Result<String, AppError> {
        self.record(Operation::SaveCashDepositCollateral);
        self.credentials.lock().unwrap().push(credential.to_string());
        Ok("cash deposit saved".to_string())
    }

    async fn apply_loan(&self, _application: NewLoanApplication) -> Result<String, AppError> {
        self.record(Operation::ApplyLoan);
        Ok("application submitted".to_string())
    }

    async fn view_customer_applications(
        &self,
        customer_id: CustomerId,
    ) -> Result<Vec<LoanApplication>, AppError> {
        self.record(Operation::ViewCustomerApplications);
        Ok(self
            .applications
            .iter()
            .filter(|a| a.customer_id == customer_id)
            .cloned()
            .collect())
    }

    async fn get_all_applications(&self) -> Result<Vec<LoanApplication>, AppError> {
        self.record(Operation::GetAllApplications);
        Ok(self.applications.clone())
    }

    async fn approve_loan(&self, application_id: ApplicationId) -> Result<String, AppError> {
        self.record(Operation::ApproveApplication);
        Ok(format!("approved {}", application_id))
    }

    async fn reject_loan(&self, application_id: ApplicationId) -> Result<String, AppError> {
        self.record(Operation::RejectApplication);
        Ok(format!("rejected {}", application_id))
    }
}

// ============================================================================
// Collateral Client
// ============================================================================

/// Collateral client handing out sequential ids, or failing every call
#[derive(Default)]
pub struct MockCollateralClient {
    fail: bool,
    last_id: AtomicI32,
    calls: AtomicUsize,
    credentials: Mutex<Vec<String>>,
}

impl MockCollateralClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn credentials(&self) -> Vec<String> {
        self.credentials.lock().unwrap().clone()
    }

    /// Yields once before answering, like a network round-trip
    async fn receipt(
        &self,
        credential: &str,
        kind: &str,
    ) -> Result<CollateralReceipt, CollateralError> {
        tokio::task::yield_now().await;
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.credentials.lock().unwrap().push(credential.to_string());

        if self.fail {
            return Err(CollateralError::Api {
                status: 503,
                message: "collateral service unavailable".to_string(),
            });
        }

        let id = self.last_id.fetch_add(1, Ordering::SeqCst) + 1;
        Ok(CollateralReceipt {
            collateral_id: CollateralId(id),
            message: format!("{} collateral {} saved", kind, id),
        })
    }
}

#[async_trait]
impl CollateralClient for MockCollateralClient {
    async fn save_real_estate(
        &self,
        credential: &str,
        _real_estate: &RealEstate,
    ) -> Result<CollateralReceipt, CollateralError> {
        self.receipt(credential, "Real estate").await
    }

    async fn save_cash_deposit(
        &self,
        credential: &str,
        _cash_deposit: &CashDeposit,
    ) -> Result<CollateralReceipt, CollateralError> {
        self.receipt(credential, "Cash deposit").await
    }
}

// ============================================================================
// Repositories
// ============================================================================

/// Application repository that yields after every lookup
///
/// Lets concurrent decisions interleave between reading an application and
/// writing its new status, as they would against a database.
pub struct YieldingApplicationRepository {
    inner: InMemoryLoanApplicationRepository,
}

impl YieldingApplicationRepository {
    pub fn new(inner: InMemoryLoanApplicationRepository) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl LoanApplicationRepository for YieldingApplicationRepository {
    async fn create(
        &self,
        application: &NewLoanApplication,
    ) -> Result<LoanApplication, DomainError> {
        self.inner.create(application).await
    }

    async fn find_by_id(&self, id: ApplicationId) -> Result<Option<LoanApplication>, DomainError> {
        let found = self.inner.find_by_id(id).await;
        tokio::task::yield_now().await;
        found
    }

    async fn find_by_customer(
        &self,
        customer_id: CustomerId,
    ) -> Result<Vec<LoanApplication>, DomainError> {
        self.inner.find_by_customer(customer_id).await
    }

    async fn find_all(&self) -> Result<Vec<LoanApplication>, DomainError> {
        self.inner.find_all().await
    }

    async fn transition(
        &self,
        id: ApplicationId,
        from: ApplicationStatus,
        to: ApplicationStatus,
        decided_at: Option<DateTime<Utc>>,
    ) -> Result<bool, DomainError> {
        self.inner.transition(id, from, to, decided_at).await
    }
}

/// Loan repository whose first `failures` creates fail with a database error
pub struct FlakyLoanRepository {
    inner: InMemoryCustomerLoanRepository,
    failures: AtomicUsize,
}

impl FlakyLoanRepository {
    pub fn new(failures: usize) -> Self {
        Self {
            inner: InMemoryCustomerLoanRepository::new(),
            failures: AtomicUsize::new(failures),
        }
    }
}

#[async_trait]
impl CustomerLoanRepository for FlakyLoanRepository {
    async fn find(
        &self,
        loan_id: LoanId,
        customer_id: CustomerId,
    ) -> Result<Option<CustomerLoan>, DomainError> {
        self.inner.find(loan_id, customer_id).await
    }

    async fn create(&self, loan: &NewCustomerLoan) -> Result<CustomerLoan, DomainError> {
        let failing = self
            .failures
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .is_ok();
        if failing {
            return Err(DomainError::Database("connection reset".to_string()));
        }
        self.inner.create(loan).await
    }

    async fn attach_collateral(
        &self,
        loan_id: LoanId,
        collateral_id: CollateralId,
    ) -> Result<(), DomainError> {
        self.inner.attach_collateral(loan_id, collateral_id).await
    }
}
