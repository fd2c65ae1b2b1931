//! Host configuration parsed from environment variables.
//!
//! `main` loads an optional `.env` file through `dotenvy` before calling
//! [`HostConfig::from_env`], so variables there act as defaults.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:5000";
pub const DEFAULT_API_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid PORT: {0}")]
    InvalidPort(String),
    #[error("API_BASE_URL must start with http:// or https://, got {0:?}")]
    InvalidApiBaseUrl(String),
    #[error("invalid API_TIMEOUT_SECS: {0}")]
    InvalidTimeout(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConfig {
    pub port: u16,
    /// Backend origin without a trailing slash; `/api/...` paths are appended.
    pub api_base_url: String,
    pub api_timeout: Duration,
}

impl HostConfig {
    /// Build the host config from the process environment.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `API_BASE_URL`: default `http://127.0.0.1:5000`
    /// - `API_TIMEOUT_SECS`: default 30, must be positive
    ///
    /// # Errors
    ///
    /// Returns an error when a variable is set but malformed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the host config from an arbitrary variable source.
    ///
    /// # Errors
    ///
    /// Returns an error when a variable is set but malformed.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = match non_blank(lookup("PORT")) {
            Some(raw) => raw.parse::<u16>().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };

        let api_base_url =
            parse_base_url(non_blank(lookup("API_BASE_URL")).as_deref().unwrap_or(DEFAULT_API_BASE_URL))?;

        let api_timeout = match non_blank(lookup("API_TIMEOUT_SECS")) {
            Some(raw) => match raw.parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => return Err(ConfigError::InvalidTimeout(raw)),
            },
            None => Duration::from_secs(DEFAULT_API_TIMEOUT_SECS),
        };

        Ok(Self { port, api_base_url, api_timeout })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_owned()).filter(|v| !v.is_empty())
}

fn parse_base_url(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim_end_matches('/');
    if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
        return Err(ConfigError::InvalidApiBaseUrl(raw.to_owned()));
    }
    Ok(trimmed.to_owned())
}
