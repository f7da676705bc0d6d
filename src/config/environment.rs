// ABOUTME: Environment-only configuration for the Athlo API client and CLI
// ABOUTME: Reads ATHLO_* variables with defaults and rejects malformed numeric values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based configuration
//!
//! | Variable | Default |
//! |----------|---------|
//! | `ATHLO_API_URL` | `http://localhost:8000` |
//! | `ATHLO_ACCESS_TOKEN` | unset |
//! | `ATHLO_HTTP_TIMEOUT_SECS` | 30 |
//! | `ATHLO_CONNECT_TIMEOUT_SECS` | 10 |
//! | `ATHLO_PAGE_SIZE` | 100 (clamped to 1..=100) |
//! | `ATHLO_WEIGHT_HISTORY_LIMIT` | 30 |
//! | `ATHLO_ENVIRONMENT` | `development` |

use std::env;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use url::Url;

use athlo_core::constants::limits::{DEFAULT_WEIGHT_HISTORY_LIMIT, MAX_PAGE_SIZE};
use athlo_core::errors::{AppError, AppResult};

/// Environment variable names
pub mod env_keys {
    /// Base URL of the Athlo REST API
    pub const API_URL: &str = "ATHLO_API_URL";
    /// Bearer token sent with every request
    pub const ACCESS_TOKEN: &str = "ATHLO_ACCESS_TOKEN";
    /// Whole-request timeout
    pub const HTTP_TIMEOUT_SECS: &str = "ATHLO_HTTP_TIMEOUT_SECS";
    /// TCP connect timeout
    pub const CONNECT_TIMEOUT_SECS: &str = "ATHLO_CONNECT_TIMEOUT_SECS";
    /// Page size for the running-activity listing
    pub const PAGE_SIZE: &str = "ATHLO_PAGE_SIZE";
    /// Points requested from the weight-history endpoint
    pub const WEIGHT_HISTORY_LIMIT: &str = "ATHLO_WEIGHT_HISTORY_LIMIT";
    /// Deployment environment
    pub const ENVIRONMENT: &str = "ATHLO_ENVIRONMENT";
}

/// Default API base URL (local backend)
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Default request timeout in seconds
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;

/// Default connection timeout in seconds
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

/// Environment type
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Automated tests
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Settings for talking to the Athlo REST API
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL without a trailing slash
    pub api_url: String,
    /// Bearer token, if already authenticated
    pub access_token: Option<String>,
    /// Whole-request timeout in seconds
    pub http_timeout_secs: u64,
    /// Connection timeout in seconds
    pub connect_timeout_secs: u64,
    /// Page size for paginated listings, within `1..=100`
    pub page_size: u32,
    /// Points requested from the weight-history endpoint
    pub weight_history_limit: usize,
    /// Deployment environment
    pub environment: Environment,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_owned(),
            access_token: None,
            http_timeout_secs: DEFAULT_HTTP_TIMEOUT_SECS,
            connect_timeout_secs: DEFAULT_CONNECT_TIMEOUT_SECS,
            page_size: MAX_PAGE_SIZE,
            weight_history_limit: DEFAULT_WEIGHT_HISTORY_LIMIT,
            environment: Environment::Development,
        }
    }
}

impl ClientConfig {
    /// Configuration pointing at `api_url` with every other value defaulted
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` if `api_url` is not an absolute http(s) URL
    pub fn for_url(api_url: &str) -> AppResult<Self> {
        Ok(Self {
            api_url: normalize_api_url(env_keys::API_URL, api_url)?,
            ..Self::default()
        })
    }

    /// Load configuration from `ATHLO_*` environment variables
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` when a variable is set to a value that does
    /// not parse, a timeout is zero, or the API URL is not http(s)
    pub fn from_env() -> AppResult<Self> {
        let api_url = env::var(env_keys::API_URL).unwrap_or_else(|_| DEFAULT_API_URL.into());
        let access_token = env::var(env_keys::ACCESS_TOKEN)
            .ok()
            .map(|token| token.trim().to_owned())
            .filter(|token| !token.is_empty());

        let requested_page_size: u32 = parse_env(env_keys::PAGE_SIZE, MAX_PAGE_SIZE)?;
        let page_size = requested_page_size.clamp(1, MAX_PAGE_SIZE);
        if page_size != requested_page_size {
            warn!(
                requested = requested_page_size,
                page_size, "Page size out of range, clamped"
            );
        }

        let config = Self {
            api_url: normalize_api_url(env_keys::API_URL, &api_url)?,
            access_token,
            http_timeout_secs: positive(
                env_keys::HTTP_TIMEOUT_SECS,
                parse_env(env_keys::HTTP_TIMEOUT_SECS, DEFAULT_HTTP_TIMEOUT_SECS)?,
            )?,
            connect_timeout_secs: positive(
                env_keys::CONNECT_TIMEOUT_SECS,
                parse_env(env_keys::CONNECT_TIMEOUT_SECS, DEFAULT_CONNECT_TIMEOUT_SECS)?,
            )?,
            page_size,
            weight_history_limit: parse_env(
                env_keys::WEIGHT_HISTORY_LIMIT,
                DEFAULT_WEIGHT_HISTORY_LIMIT,
            )?,
            environment: env::var(env_keys::ENVIRONMENT)
                .map(|raw| Environment::from_str_or_default(&raw))
                .unwrap_or_default(),
        };

        debug!(
            api_url = %config.api_url,
            authenticated = config.access_token.is_some(),
            environment = %config.environment,
            "Loaded client configuration"
        );
        Ok(config)
    }

    /// Replace the API base URL
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` if `api_url` is not an absolute http(s) URL
    pub fn with_api_url(mut self, api_url: &str) -> AppResult<Self> {
        self.api_url = normalize_api_url(env_keys::API_URL, api_url)?;
        Ok(self)
    }

    /// Replace the bearer token
    #[must_use]
    pub fn with_access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = Some(token.into());
        self
    }

    /// Whole-request timeout
    #[must_use]
    pub const fn http_timeout(&self) -> Duration {
        Duration::from_secs(self.http_timeout_secs)
    }

    /// Connection timeout
    #[must_use]
    pub const fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }
}

/// Read `key`, falling back to `default` when unset or blank
fn parse_env<T>(key: &str, default: T) -> AppResult<T>
where
    T: FromStr,
{
    match env::var(key) {
        Ok(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse()
            .map_err(|_| AppError::config_invalid(key, &raw, "expected a non-negative integer")),
        _ => Ok(default),
    }
}

fn positive(key: &str, value: u64) -> AppResult<u64> {
    if value == 0 {
        return Err(AppError::config_invalid(key, "0", "must be greater than 0"));
    }
    Ok(value)
}

fn normalize_api_url(key: &str, raw: &str) -> AppResult<String> {
    let trimmed = raw.trim();
    let parsed =
        Url::parse(trimmed).map_err(|e| AppError::config_invalid(key, trimmed, e.to_string()))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(AppError::config_invalid(
            key,
            trimmed,
            "scheme must be http or https",
        ));
    }
    Ok(trimmed.trim_end_matches('/').to_owned())
}
