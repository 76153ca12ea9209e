//! Domain entities
//!
//! Pure domain models representing core business concepts.
//! These are separate from the SeaORM entities in the `entity` module.

pub mod collateral;
pub mod customer_loan;
pub mod loan_application;

pub use collateral::{CashDeposit, CollateralReceipt, RealEstate};
pub use customer_loan::{
    monthly_installment, CollateralId, CustomerId, CustomerLoan, LoanId, NewCustomerLoan,
};
pub use loan_application::{
    ApplicationId, ApplicationStatus, LoanApplication, NewLoanApplication,
};
