use std::env;
use std::time::Duration;

use crate::app::Operation;
use crate::error::ConfigError;

/// Per-peer rate limit applied to the write routes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimit {
    /// One request is replenished every `replenish_ms` milliseconds
    pub replenish_ms: u64,
    pub burst: u32,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    /// Prefix in front of `/loan-management` (empty or starting with `/`)
    pub context_path: String,
    /// PostgreSQL URL; in-memory storage when unset
    pub database_url: Option<String>,
    pub auth_service_url: String,
    /// Collateral-management service; local registry when unset
    pub collateral_service_url: Option<String>,
    /// Request timeout for the authorization and collateral services
    pub upstream_timeout: Duration,
    /// Operations gated on top of the always-gated ones
    pub gated_operations: Vec<Operation>,
    pub rate_limit: Option<RateLimit>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let rate_limit_enabled = parse_or(var("RATE_LIMIT_ENABLED"), "RATE_LIMIT_ENABLED", true)?;
        let rate_limit = if rate_limit_enabled {
            Some(RateLimit {
                replenish_ms: parse_or(
                    var("RATE_LIMIT_REPLENISH_MS"),
                    "RATE_LIMIT_REPLENISH_MS",
                    100,
                )?,
                burst: parse_or(var("RATE_LIMIT_BURST"), "RATE_LIMIT_BURST", 20)?,
            })
        } else {
            None
        };

        Ok(Self {
            port: parse_or(var("PORT"), "PORT", 8100)?,
            context_path: context_path(var("CONTEXT_PATH"))?,
            database_url: var("DATABASE_URL"),
            auth_service_url: var("AUTH_SERVICE_URL")
                .unwrap_or_else(|| "http://localhost:8400".to_string()),
            collateral_service_url: var("COLLATERAL_SERVICE_URL"),
            upstream_timeout: Duration::from_secs(parse_or(
                var("UPSTREAM_TIMEOUT_SECS"),
                "UPSTREAM_TIMEOUT_SECS",
                5,
            )?),
            gated_operations: gated_operations(var("GATED_OPERATIONS"))?,
            rate_limit,
        })
    }
}

fn parse_or<T>(value: Option<String>, key: &'static str, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match value {
        Some(v) => v.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
            key,
            message: e.to_string(),
        }),
        None => Ok(default),
    }
}

fn context_path(value: Option<String>) -> Result<String, ConfigError> {
    let Some(path) = value else {
        return Ok(String::new());
    };
    let path = path.trim().trim_end_matches('/');
    if path.is_empty() {
        return Ok(String::new());
    }
    if !path.starts_with('/') {
        return Err(ConfigError::Invalid {
            key: "CONTEXT_PATH",
            message: format!("'{}' must start with '/'", path),
        });
    }
    Ok(path.to_string())
}

/// Comma-separated operation names, or `all`
fn gated_operations(value: Option<String>) -> Result<Vec<Operation>, ConfigError> {
    let Some(list) = value else {
        return Ok(Vec::new());
    };
    if list.trim().eq_ignore_ascii_case("all") {
        return Ok(Operation::ALL.to_vec());
    }
    list.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<Operation>().map_err(|message| ConfigError::Invalid {
                key: "GATED_OPERATIONS",
                message,
            })
        })
        .collect()
}
