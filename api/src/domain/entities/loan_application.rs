//! Loan application domain entity
//!
//! Applications are submitted by customers and decided (approved or rejected)
//! exactly once.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::customer_loan::CustomerId;

/// Identifier of a loan application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ApplicationId(pub i32);

impl std::fmt::Display for ApplicationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Where an application is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApplicationStatus {
    Submitted,
    Approved,
    Rejected,
}

impl ApplicationStatus {
    /// Only submitted applications can still be approved or rejected
    pub fn is_pending(&self) -> bool {
        matches!(self, ApplicationStatus::Submitted)
    }
}

impl std::fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApplicationStatus::Submitted => write!(f, "submitted"),
            ApplicationStatus::Approved => write!(f, "approved"),
            ApplicationStatus::Rejected => write!(f, "rejected"),
        }
    }
}

impl std::str::FromStr for ApplicationStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "submitted" => Ok(ApplicationStatus::Submitted),
            "approved" => Ok(ApplicationStatus::Approved),
            "rejected" => Ok(ApplicationStatus::Rejected),
            _ => Err(format!("Unknown application status: {}", s)),
        }
    }
}

/// A submitted loan application
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanApplication {
    pub application_id: ApplicationId,
    pub customer_id: CustomerId,
    pub loan_product_id: i32,
    pub loan_amount: f64,
    /// Requested tenure in months
    pub tenure: i32,
    /// Annual interest rate in percent
    pub interest_rate: f64,
    pub collateral_details: Option<String>,
    pub status: ApplicationStatus,
    pub applied_at: DateTime<Utc>,
    pub decided_at: Option<DateTime<Utc>>,
}

/// Application payload as submitted by a customer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewLoanApplication {
    pub customer_id: CustomerId,
    pub loan_product_id: i32,
    pub loan_amount: f64,
    pub tenure: i32,
    pub interest_rate: f64,
    #[serde(default)]
    pub collateral_details: Option<String>,
}

impl NewLoanApplication {
    /// Check the submission before it is stored
    pub fn validate(&self) -> Result<(), String> {
        if self.customer_id.0 <= 0 {
            return Err("customerId must be positive".to_string());
        }
        if self.loan_product_id <= 0 {
            return Err("loanProductId must be positive".to_string());
        }
        if !(self.loan_amount > 0.0) {
            return Err("loanAmount must be greater than zero".to_string());
        }
        if self.tenure <= 0 {
            return Err("tenure must be at least one month".to_string());
        }
        if !(self.interest_rate >= 0.0) {
            return Err("interestRate cannot be negative".to_string());
        }
        Ok(())
    }
}
