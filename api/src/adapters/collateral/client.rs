//! Collateral-management service HTTP client

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{header::AUTHORIZATION, Client};
use serde::{de::DeserializeOwned, Serialize};

use crate::domain::entities::{CashDeposit, CollateralReceipt, RealEstate};
use crate::domain::ports::CollateralClient;
use crate::error::CollateralError;

/// Implementation of the collateral client over HTTP
pub struct HttpCollateralClient {
    http: Client,
    base_url: String,
}

impl HttpCollateralClient {
    pub fn new(base_url: String, timeout: Duration) -> Result<Self, CollateralError> {
        let http = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn post<B: Serialize + Sync, T: DeserializeOwned>(
        &self,
        path: &str,
        credential: &str,
        body: &B,
    ) -> Result<T, CollateralError> {
        let response = self
            .http
            .post(self.api_url(path))
            .header(AUTHORIZATION, credential)
            .json(body)
            .send()
            .await?;

        let status = response.status();

        if status.is_success() {
            response
                .json()
                .await
                .map_err(|e| CollateralError::Deserialization(e.to_string()))
        } else {
            let message = response.text().await.unwrap_or_default();
            Err(CollateralError::Api {
                status: status.as_u16(),
                message,
            })
        }
    }
}

#[async_trait]
impl CollateralClient for HttpCollateralClient {
    async fn save_real_estate(
        &self,
        credential: &str,
        real_estate: &RealEstate,
    ) -> Result<CollateralReceipt, CollateralError> {
        self.post("/saveRealEstateCollateral", credential, real_estate)
            .await
    }

    async fn save_cash_deposit(
        &self,
        credential: &str,
        cash_deposit: &CashDeposit,
    ) -> Result<CollateralReceipt, CollateralError> {
        self.post("/saveCashDepositCollateral", credential, cash_deposit)
            .await
    }
}
