//! Collateral service port

use async_trait::async_trait;

use crate::domain::entities::{CashDeposit, CollateralReceipt, RealEstate};
use crate::error::CollateralError;

/// Storage of pledged collateral, owned by the collateral-management service.
///
/// The caller's credential is forwarded so the collateral service can apply
/// its own checks.
#[async_trait]
pub trait CollateralClient: Send + Sync {
    async fn save_real_estate(
        &self,
        credential: &str,
        real_estate: &RealEstate,
    ) -> Result<CollateralReceipt, CollateralError>;

    async fn save_cash_deposit(
        &self,
        credential: &str,
        cash_deposit: &CashDeposit,
    ) -> Result<CollateralReceipt, CollateralError>;
}
