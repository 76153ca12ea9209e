//! Credential handling
//!
//! Credentials are opaque bearer tokens validated by the authorization
//! service. This module only extracts them from requests and derives a
//! log-safe fingerprint.

pub mod credential;

pub use credential::{extract_credential, fingerprint};
