//! Local collateral registry
//!
//! Stands in for the collateral-management service when no
//! `COLLATERAL_SERVICE_URL` is configured. Pledges are kept in process and
//! get sequential ids.

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::entities::{CashDeposit, CollateralId, CollateralReceipt, RealEstate};
use crate::domain::ports::CollateralClient;
use crate::error::CollateralError;

/// A pledge recorded by the local registry
#[derive(Debug, Clone, PartialEq)]
pub enum Pledge {
    RealEstate(CollateralId, RealEstate),
    CashDeposit(CollateralId, CashDeposit),
}

#[derive(Default)]
pub struct LocalCollateralRegistry {
    pledges: Mutex<Vec<Pledge>>,
}

impl LocalCollateralRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn pledges(&self) -> Vec<Pledge> {
        self.pledges.lock().await.clone()
    }
}

#[async_trait]
impl CollateralClient for LocalCollateralRegistry {
    async fn save_real_estate(
        &self,
        _credential: &str,
        real_estate: &RealEstate,
    ) -> Result<CollateralReceipt, CollateralError> {
        let mut pledges = self.pledges.lock().await;
        let collateral_id = CollateralId(pledges.len() as i32 + 1);
        pledges.push(Pledge::RealEstate(collateral_id, real_estate.clone()));

        Ok(CollateralReceipt {
            collateral_id,
            message: format!(
                "Real estate collateral {} saved for loan {}",
                collateral_id, real_estate.loan_id
            ),
        })
    }

    async fn save_cash_deposit(
        &self,
        _credential: &str,
        cash_deposit: &CashDeposit,
    ) -> Result<CollateralReceipt, CollateralError> {
        let mut pledges = self.pledges.lock().await;
        let collateral_id = CollateralId(pledges.len() as i32 + 1);
        pledges.push(Pledge::CashDeposit(collateral_id, cash_deposit.clone()));

        Ok(CollateralReceipt {
            collateral_id,
            message: format!(
                "Cash deposit collateral {} saved for loan {}",
                collateral_id, cash_deposit.loan_id
            ),
        })
    }
}
