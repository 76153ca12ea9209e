//! In-memory adapters
//!
//! Used when no database or collateral service is configured, and by tests.
//! State lives for the lifetime of the process.

pub mod collateral_registry;
pub mod customer_loan_repo;
pub mod loan_application_repo;

pub use collateral_registry::LocalCollateralRegistry;
pub use customer_loan_repo::InMemoryCustomerLoanRepository;
pub use loan_application_repo::InMemoryLoanApplicationRepository;
