//! PostgreSQL adapters
//!
//! Implementations of repository traits using SeaORM and PostgreSQL.

pub mod customer_loan_repo;
pub mod loan_application_repo;


pub use customer_loan_repo::PostgresCustomerLoanRepository;
pub use loan_application_repo::PostgresLoanApplicationRepository;
