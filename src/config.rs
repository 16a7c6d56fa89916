use crate::error::{IyzipayError, Result};
use std::fmt;
use std::time::Duration;

/// Base URL of the gateway's sandbox environment.
pub const SANDBOX_BASE_URL: &str = "https://sandbox-api.iyzipay.com";
/// Base URL of the gateway's live environment.
pub const PRODUCTION_BASE_URL: &str = "https://api.iyzipay.com";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Merchant credentials and endpoint settings for the HTTP gateway.
#[derive(Clone, PartialEq)]
pub struct GatewayConfig {
    /// Public API key issued by the gateway.
    pub api_key: String,
    /// Secret key used to sign requests. Never printed.
    pub secret_key: String,
    /// Scheme and host the endpoint paths are appended to.
    pub base_url: String,
    /// Upper bound for a single request, including reading the reply.
    pub timeout: Duration,
}

impl GatewayConfig {
    /// Builds a sandbox configuration with the default timeout.
    pub fn new(api_key: impl Into<String>, secret_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            secret_key: secret_key.into(),
            base_url: SANDBOX_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Rejects blank credentials and base URLs without an http(s) scheme.
    pub fn validate(&self) -> Result<()> {
        if self.api_key.trim().is_empty() {
            return Err(IyzipayError::ConfigError("API key is empty".to_string()));
        }
        if self.secret_key.trim().is_empty() {
            return Err(IyzipayError::ConfigError("Secret key is empty".to_string()));
        }
        if !(self.base_url.starts_with("https://") || self.base_url.starts_with("http://")) {
            return Err(IyzipayError::ConfigError(format!(
                "Base URL must start with http:// or https://, got '{}'",
                self.base_url
            )));
        }
        Ok(())
    }

    /// Joins the base URL and an endpoint path without doubling slashes.
    pub fn url_for(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }
}

impl fmt::Debug for GatewayConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GatewayConfig")
            .field("api_key", &self.api_key)
            .field("secret_key", &"***")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}
