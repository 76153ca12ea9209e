//! Collateral domain entities
//!
//! Assets pledged against a customer loan. The records themselves are kept by
//! the collateral service; this service only checks them and links the
//! resulting collateral id to the loan.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::customer_loan::{CollateralId, CustomerId, LoanId};

/// Real estate pledged against a loan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RealEstate {
    pub loan_id: LoanId,
    pub customer_id: CustomerId,
    pub owner_name: String,
    pub address: String,
    pub area_sq_ft: f64,
    pub rate_per_sq_ft: f64,
    pub current_value: f64,
    pub depreciation_rate: f64,
    #[serde(default)]
    pub pledged_date: Option<NaiveDate>,
}

impl RealEstate {
    pub fn validate(&self) -> Result<(), String> {
        if self.owner_name.trim().is_empty() {
            return Err("ownerName is required".to_string());
        }
        if self.address.trim().is_empty() {
            return Err("address is required".to_string());
        }
        if !(self.area_sq_ft > 0.0) {
            return Err("areaSqFt must be greater than zero".to_string());
        }
        if !(self.rate_per_sq_ft > 0.0) {
            return Err("ratePerSqFt must be greater than zero".to_string());
        }
        if !(self.current_value > 0.0) {
            return Err("currentValue must be greater than zero".to_string());
        }
        if !(self.depreciation_rate >= 0.0) {
            return Err("depreciationRate cannot be negative".to_string());
        }
        Ok(())
    }
}

/// Cash deposit pledged against a loan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CashDeposit {
    pub loan_id: LoanId,
    pub customer_id: CustomerId,
    pub owner_name: String,
    pub bank_name: String,
    pub deposit_amount: f64,
    pub interest_rate: f64,
    /// Lock period in months
    pub lock_period: i32,
    #[serde(default)]
    pub pledged_date: Option<NaiveDate>,
}

impl CashDeposit {
    pub fn validate(&self) -> Result<(), String> {
        if self.owner_name.trim().is_empty() {
            return Err("ownerName is required".to_string());
        }
        if self.bank_name.trim().is_empty() {
            return Err("bankName is required".to_string());
        }
        if !(self.deposit_amount > 0.0) {
            return Err("depositAmount must be greater than zero".to_string());
        }
        if !(self.interest_rate >= 0.0) {
            return Err("interestRate cannot be negative".to_string());
        }
        if self.lock_period < 0 {
            return Err("lockPeriod cannot be negative".to_string());
        }
        Ok(())
    }
}

/// What the collateral service hands back after storing a pledge
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollateralReceipt {
    pub collateral_id: CollateralId,
    pub message: String,
}
