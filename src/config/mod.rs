#[cfg(feature = "cli")]
pub mod cli;

use crate::core::retry::RetryPolicy;
use crate::utils::error::{MarketError, Result};
use crate::utils::validation::{validate_positive_number, validate_url, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use url::Url;

/// Connection settings for the market microservice.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketConfig {
    pub base_url: String,
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
    #[serde(default = "default_retry_attempts")]
    pub retry_attempts: u32,
    #[serde(default = "default_retry_delay_ms")]
    pub retry_delay_ms: u64,
}

fn default_timeout_seconds() -> u64 {
    10
}

fn default_retry_attempts() -> u32 {
    3
}

fn default_retry_delay_ms() -> u64 {
    200
}

impl MarketConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout_seconds: default_timeout_seconds(),
            retry_attempts: default_retry_attempts(),
            retry_delay_ms: default_retry_delay_ms(),
        }
    }

    pub fn from_toml_str(raw: &str) -> Result<Self> {
        toml::from_str(raw).map_err(|e| MarketError::InvalidConfigValue {
            field: "config".to_string(),
            value: String::new(),
            reason: format!("Invalid TOML: {}", e),
        })
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_toml_str(&raw)
    }

    /// Resolves a service path against the base URL. The base is treated as
    /// a directory, so a base of `http://host/api` joins to
    /// `http://host/api/market/...`.
    pub fn endpoint(&self, path: &str) -> Result<Url> {
        let mut base = self.base_url.clone();
        if !base.ends_with('/') {
            base.push('/');
        }
        Ok(Url::parse(&base)?.join(path)?)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy::new(self.retry_attempts, Duration::from_millis(self.retry_delay_ms))
    }
}

impl Validate for MarketConfig {
    fn validate(&self) -> Result<()> {
        validate_url("base_url", &self.base_url)?;
        validate_positive_number("timeout_seconds", self.timeout_seconds as usize, 1)?;
        validate_positive_number("retry_attempts", self.retry_attempts as usize, 1)?;
        Ok(())
    }
}
