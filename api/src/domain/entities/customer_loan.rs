//! Customer loan domain entity
//!
//! A loan granted to a customer, addressed by the (loan, customer) pair.

use serde::{Deserialize, Serialize};

/// Identifier of a granted loan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct LoanId(pub i32);

/// Identifier of a customer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CustomerId(pub i32);

/// Identifier assigned to pledged collateral by the collateral service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CollateralId(pub i32);

impl std::fmt::Display for LoanId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::fmt::Display for CustomerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::fmt::Display for CollateralId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A loan held by a customer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerLoan {
    pub loan_id: LoanId,
    pub customer_id: CustomerId,
    pub loan_product_id: i32,
    pub loan_principal: f64,
    /// Tenure in months
    pub tenure: i32,
    /// Annual interest rate in percent
    pub interest: f64,
    /// Equated monthly installment
    pub emi: f64,
    pub collateral_id: Option<CollateralId>,
}

/// Data needed to open a loan for a customer
#[derive(Debug, Clone)]
pub struct NewCustomerLoan {
    pub customer_id: CustomerId,
    pub loan_product_id: i32,
    pub loan_principal: f64,
    pub tenure: i32,
    pub interest: f64,
    pub emi: f64,
}

/// Monthly installment of an amortized loan, rounded to cents.
///
/// `annual_rate` is in percent. A zero rate spreads the principal evenly.
pub fn monthly_installment(principal: f64, annual_rate: f64, tenure_months: i32) -> f64 {
    if tenure_months <= 0 {
        return 0.0;
    }
    let n = tenure_months as f64;
    let r = annual_rate / 12.0 / 100.0;
    let emi = if r == 0.0 {
        principal / n
    } else {
        let growth = (1.0 + r).powf(n);
        principal * r * growth / (growth - 1.0)
    };
    (emi * 100.0).round() / 100.0
}
