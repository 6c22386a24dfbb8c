use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;
use std::time::Duration;

use crate::domains::reserves::models::SortType;

/// Reserves configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub api_url: String,
    pub api_token: Option<String>,
    pub request_timeout: Duration,
    pub default_sort: SortType,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_url = lookup("RESERVES_API_URL").context("RESERVES_API_URL must be set")?;

        let timeout_secs: u64 = lookup("RESERVES_REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|| "30".to_string())
            .parse()
            .context("RESERVES_REQUEST_TIMEOUT_SECS must be a valid number")?;

        let default_sort: SortType = lookup("RESERVES_DEFAULT_SORT")
            .unwrap_or_else(|| "manual".to_string())
            .parse()
            .context("RESERVES_DEFAULT_SORT must be a known sort mode")?;

        Ok(Self {
            api_url: api_url.trim_end_matches('/').to_string(),
            api_token: lookup("RESERVES_API_TOKEN").filter(|t| !t.is_empty()),
            request_timeout: Duration::from_secs(timeout_secs),
            default_sort,
        })
    }
}
