//! Authorization service port
//!
//! Credentials are opaque to this service; only the authorization service
//! can tell whether one is valid.

use async_trait::async_trait;

use crate::error::AuthorizationError;

/// Remote credential validation
#[async_trait]
pub trait AuthorizationClient: Send + Sync {
    /// Ask the authorization service whether `credential` is valid.
    ///
    /// `Ok(false)` means the service answered and refused the credential.
    /// Transport failures and unexpected answers are errors, never a verdict.
    async fn validate(&self, credential: &str) -> Result<bool, AuthorizationError>;
}
