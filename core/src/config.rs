//! Client configuration.
//!
//! `ClientConfig` is passed explicitly to `UserClient`; nothing is read from
//! the process environment unless the caller asks for it through
//! `ClientConfig::from_env`.

use std::time::Duration;

use thiserror::Error;

/// Environment variable holding the service base URL.
pub const API_URL_VAR: &str = "API_URL";

/// Optional environment variable holding a request timeout in milliseconds.
pub const API_TIMEOUT_VAR: &str = "API_TIMEOUT_MS";

/// Whether payloads are checked against the request schema before sending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Validation {
    /// Reject non-conforming payloads locally. Nothing reaches the network.
    #[default]
    Strict,
    /// Send payloads as given and let the server judge them.
    Lenient,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("API_URL is not set")]
    MissingBaseUrl,
    #[error("API_URL must be an absolute http(s) URL, got {0:?}")]
    InvalidBaseUrl(String),
    #[error("API_TIMEOUT_MS must be a whole number of milliseconds, got {0:?}")]
    InvalidTimeout(String),
}

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    /// Extra headers sent on every request, after `content-type`. A
    /// `content-type` entry here is ignored.
    pub headers: Vec<(String, String)>,
    /// Global per-call timeout. `None` leaves the call unbounded.
    pub timeout: Option<Duration>,
    pub validation: Validation,
}

impl ClientConfig {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            headers: Vec::new(),
            timeout: None,
            validation: Validation::default(),
        }
    }

    /// Build a config from `API_URL` and `API_TIMEOUT_MS`, loading `.env`
    /// first when one exists.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let base_url = lookup(API_URL_VAR)
            .filter(|url| !url.trim().is_empty())
            .ok_or(ConfigError::MissingBaseUrl)?;
        let mut config = Self::new(base_url.trim());
        config.check_base_url()?;
        if let Some(raw) = lookup(API_TIMEOUT_VAR) {
            let millis: u64 = raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidTimeout(raw.clone()))?;
            config.timeout = Some(Duration::from_millis(millis));
        }
        Ok(config)
    }

    /// Reject base URLs that cannot prefix a request path: anything without
    /// an http(s) scheme and a host.
    pub fn check_base_url(&self) -> Result<(), ConfigError> {
        let invalid = || ConfigError::InvalidBaseUrl(self.base_url.clone());
        let uri: ureq::http::Uri = self.base_url.parse().map_err(|_| invalid())?;
        match (uri.scheme_str(), uri.host()) {
            (Some("http" | "https"), Some(host)) if !host.is_empty() => Ok(()),
            _ => Err(invalid()),
        }
    }

    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_string(), value.to_string()));
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn with_validation(mut self, validation: Validation) -> Self {
        self.validation = validation;
        self
    }
}
