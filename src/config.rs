//! Fetch configuration.
//!
//! The token and API location are carried as an explicit value handed to
//! the fetcher, so the core never reads process-wide state.

use crate::error::{Error, Result};
use std::fmt;
use std::time::Duration;

/// Default deSEC API base URL.
pub const DEFAULT_API_URL: &str = "https://desec.io/api/v1";

/// Default per-request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for a [`ZoneFetcher`](crate::client::ZoneFetcher).
#[derive(Clone, PartialEq, Eq)]
pub struct Config {
    token: String,
    api_url: String,
    timeout: Duration,
}

impl Config {
    /// Creates a configuration with the default API URL and timeout.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the token is empty.
    pub fn new(token: impl Into<String>) -> Result<Self> {
        let token = token.into();
        if token.trim().is_empty() {
            return Err(Error::Config {
                message: "access token is empty".to_string(),
            });
        }

        Ok(Self {
            token,
            api_url: DEFAULT_API_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        })
    }

    /// Builds a configuration from an optional token, as read from the
    /// command line or `TOKEN` environment variable.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the token is missing or empty.
    pub fn from_token(token: Option<&str>) -> Result<Self> {
        let token = token.ok_or_else(|| Error::Config {
            message: "access token is required; set the TOKEN environment variable".to_string(),
        })?;
        Self::new(token)
    }

    /// Overrides the API base URL.
    ///
    /// A trailing slash is stripped so paths can be appended uniformly.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the URL is not `http` or `https`.
    pub fn with_api_url(mut self, api_url: &str) -> Result<Self> {
        let api_url = api_url.trim().trim_end_matches('/');
        if !(api_url.starts_with("https://") || api_url.starts_with("http://")) {
            return Err(Error::Config {
                message: format!("API URL must start with http:// or https://: {api_url}"),
            });
        }
        api_url.clone_into(&mut self.api_url);
        Ok(self)
    }

    /// Overrides the per-request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Returns the access token.
    #[must_use]
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Returns the API base URL without trailing slash.
    #[must_use]
    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Returns the per-request timeout.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Value of the `Authorization` header.
    #[must_use]
    pub fn authorization(&self) -> String {
        format!("Token {}", self.token)
    }

    /// URL of the rrset collection of a zone.
    #[must_use]
    pub fn rrsets_url(&self, zone: &str) -> String {
        format!("{}/domains/{zone}/rrsets/", self.api_url)
    }
}

// The token never appears in logs.
impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("token", &"<redacted>")
            .field("api_url", &self.api_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}
