//! Configuration management for the contact form client.
//!
//! This module handles loading and validating configuration from environment variables,
//! reading a `.env` file first if one is present.

use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::time::Duration;

/// Endpoint used when `CONTACT_FORM_SUBMIT_URL` is not set.
pub const DEFAULT_SUBMIT_URL: &str = "http://localhost:8080/submit-form";

/// Configuration for the contact form client.
#[derive(Debug, Clone)]
pub struct Config {
    /// Endpoint the form is POSTed to
    pub submit_url: String,

    /// HTTP request timeout in seconds (None: wait on the transport indefinitely)
    pub request_timeout: Option<u64>,

    /// Maximum number of redirects followed per submission (default: 5)
    pub max_redirects: u32,

    /// Toast auto-dismiss delay in milliseconds (default: 5000)
    pub toast_ttl_ms: u64,

    /// Log level used when RUST_LOG is absent (default: "info")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// All variables are optional:
    /// - `CONTACT_FORM_SUBMIT_URL`: Submission endpoint (default: `http://localhost:8080/submit-form`)
    /// - `REQUEST_TIMEOUT`: HTTP timeout in seconds, `0` disables it (default: unset)
    /// - `MAX_REDIRECTS`: Redirects followed per request (default: 5)
    /// - `TOAST_TTL_MS`: Toast auto-dismiss delay (default: 5000)
    /// - `LOG_LEVEL`: Logging level (default: "info")
    pub fn from_env() -> ConfigResult<Self> {
        let _ = dotenvy::dotenv();

        let submit_url =
            env::var("CONTACT_FORM_SUBMIT_URL").unwrap_or_else(|_| DEFAULT_SUBMIT_URL.to_string());

        if !submit_url.starts_with("http://") && !submit_url.starts_with("https://") {
            return Err(ConfigError::InvalidValue {
                var: "CONTACT_FORM_SUBMIT_URL".to_string(),
                reason: "Must start with http:// or https://".to_string(),
            });
        }

        if let Err(e) = url::Url::parse(&submit_url) {
            return Err(ConfigError::InvalidValue {
                var: "CONTACT_FORM_SUBMIT_URL".to_string(),
                reason: e.to_string(),
            });
        }

        let request_timeout = match Self::parse_env_u64("REQUEST_TIMEOUT", 0)? {
            0 => None,
            secs => Some(secs),
        };
        let max_redirects = Self::parse_env_u32("MAX_REDIRECTS", 5)?;
        let toast_ttl_ms = Self::parse_env_u64("TOAST_TTL_MS", 5000)?;

        if toast_ttl_ms == 0 {
            return Err(ConfigError::InvalidValue {
                var: "TOAST_TTL_MS".to_string(),
                reason: "Must be greater than zero".to_string(),
            });
        }

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Config {
            submit_url,
            request_timeout,
            max_redirects,
            toast_ttl_ms,
            log_level,
        })
    }

    /// Request timeout as a `Duration`, if one is configured.
    pub fn timeout(&self) -> Option<Duration> {
        self.request_timeout.map(Duration::from_secs)
    }

    /// Toast auto-dismiss delay as a `Duration`.
    pub fn toast_ttl(&self) -> Duration {
        Duration::from_millis(self.toast_ttl_ms)
    }

    /// Parse an environment variable as u64 with a default value.
    fn parse_env_u64(var_name: &str, default: u64) -> ConfigResult<u64> {
        match env::var(var_name) {
            Ok(val) => val.parse::<u64>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }

    /// Parse an environment variable as u32 with a default value.
    fn parse_env_u32(var_name: &str, default: u32) -> ConfigResult<u32> {
        match env::var(var_name) {
            Ok(val) => val.parse::<u32>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            submit_url: DEFAULT_SUBMIT_URL.to_string(),
            request_timeout: None,
            max_redirects: 5,
            toast_ttl_ms: 5000,
            log_level: "info".to_string(),
        }
    }
}
