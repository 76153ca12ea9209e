//! Authorization service HTTP client
//!
//! `GET {base_url}/validate` with the caller's credential forwarded in the
//! Authorization header. The service answers a JSON boolean.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{header::AUTHORIZATION, Client, StatusCode};

use crate::domain::ports::AuthorizationClient;
use crate::error::AuthorizationError;

/// Implementation of the authorization client over HTTP
pub struct HttpAuthorizationClient {
    http: Client,
    base_url: String,
}

impl HttpAuthorizationClient {
    pub fn new(base_url: String, timeout: Duration) -> Result<Self, AuthorizationError> {
        let http = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[async_trait]
impl AuthorizationClient for HttpAuthorizationClient {
    async fn validate(&self, credential: &str) -> Result<bool, AuthorizationError> {
        let response = self
            .http
            .get(self.api_url("/validate"))
            .header(AUTHORIZATION, credential)
            .send()
            .await?;

        let status = response.status();

        if status.is_success() {
            response
                .json::<bool>()
                .await
                .map_err(|e| AuthorizationError::Deserialization(e.to_string()))
        } else if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            // The service refused the credential outright
            Ok(false)
        } else {
            let message = response.text().await.unwrap_or_default();
            Err(AuthorizationError::Api {
                status: status.as_u16(),
                message,
            })
        }
    }
}
