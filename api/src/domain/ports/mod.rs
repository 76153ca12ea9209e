//! Domain ports (traits)
//!
//! Port traits define interfaces that the domain layer requires.
//! Adapters provide concrete implementations of these traits.

pub mod authorization;
pub mod collateral;
pub mod loan_management;
pub mod repositories;

pub use authorization::AuthorizationClient;
pub use collateral::CollateralClient;
pub use loan_management::LoanManagement;
pub use repositories::{CustomerLoanRepository, LoanApplicationRepository};
