//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.
//! Each fixture function creates a valid entity that can be customized.

use chrono::{NaiveDate, Utc};

use crate::domain::entities::{
    ApplicationId, ApplicationStatus, CashDeposit, CustomerId, CustomerLoan, LoanApplication,
    LoanId, NewLoanApplication, RealEstate,
};

/// Create a test loan without collateral
pub fn test_customer_loan(loan_id: LoanId, customer_id: CustomerId) -> CustomerLoan {
    CustomerLoan {
        loan_id,
        customer_id,
        loan_product_id: 1,
        loan_principal: 50_000.0,
        tenure: 24,
        interest: 10.0,
        emi: 2307.25,
        collateral_id: None,
    }
}

/// Create a valid real estate pledge for a loan
pub fn test_real_estate(loan_id: LoanId, customer_id: CustomerId) -> RealEstate {
    RealEstate {
        loan_id,
        customer_id,
        owner_name: "Test Owner".to_string(),
        address: "1 Test Street".to_string(),
        area_sq_ft: 1000.0,
        rate_per_sq_ft: 80.0,
        current_value: 80_000.0,
        depreciation_rate: 2.0,
        pledged_date: NaiveDate::from_ymd_opt(2024, 1, 15),
    }
}

/// Create a valid cash deposit pledge for a loan
pub fn test_cash_deposit(loan_id: LoanId, customer_id: CustomerId) -> CashDeposit {
    CashDeposit {
        loan_id,
        customer_id,
        owner_name: "Test Owner".to_string(),
        bank_name: "Test Bank".to_string(),
        deposit_amount: 20_000.0,
        interest_rate: 5.5,
        lock_period: 12,
        pledged_date: None,
    }
}

/// Create a valid application submission
pub fn test_new_application(customer_id: CustomerId) -> NewLoanApplication {
    NewLoanApplication {
        customer_id,
        loan_product_id: 1,
        loan_amount: 50_000.0,
        tenure: 24,
        interest_rate: 10.0,
        collateral_details: Some("Apartment".to_string()),
    }
}

/// Create a submitted application
pub fn test_application(id: ApplicationId, customer_id: CustomerId) -> LoanApplication {
    LoanApplication {
        application_id: id,
        customer_id,
        loan_product_id: 1,
        loan_amount: 50_000.0,
        tenure: 24,
        interest_rate: 10.0,
        collateral_details: None,
        status: ApplicationStatus::Submitted,
        applied_at: Utc::now(),
        decided_at: None,
    }
}
