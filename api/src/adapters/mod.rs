//! Adapters layer
//!
//! Implementations of port traits for external systems.

pub mod authorization;
pub mod collateral;
pub mod memory;
pub mod postgres;

pub use authorization::HttpAuthorizationClient;
pub use collateral::HttpCollateralClient;
pub use memory::{
    InMemoryCustomerLoanRepository, InMemoryLoanApplicationRepository, LocalCollateralRegistry,
};
pub use postgres::{PostgresCustomerLoanRepository, PostgresLoanApplicationRepository};
