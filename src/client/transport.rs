//! HTTP transport abstraction.
//!
//! Defines the interface through which the fetcher performs one
//! authenticated GET, enabling scripted transports in tests.

use crate::config::Config;
use crate::error::{Result, TransportError};
use reqwest::blocking::Client;
use reqwest::header::{AUTHORIZATION, LINK};

/// One HTTP response as seen by the fetcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    /// HTTP status code.
    pub status: u16,
    /// Raw `Link` header value, if present.
    pub link: Option<String>,
    /// Response body text.
    pub body: String,
}

impl HttpResponse {
    /// Creates a response without a `Link` header.
    #[must_use]
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            link: None,
            body: body.into(),
        }
    }

    /// Attaches a `Link` header value.
    #[must_use]
    pub fn with_link(mut self, link: impl Into<String>) -> Self {
        self.link = Some(link.into());
        self
    }
}

/// Trait for HTTP transports.
///
/// Implementations perform a single blocking GET and return whatever the
/// server answered; status interpretation is left to the caller.
pub trait Transport {
    /// Performs a GET on `url` with the given `Authorization` header value.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::Request`] if no response could be obtained.
    fn get(&self, url: &str, authorization: &str) -> Result<HttpResponse>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn get(&self, url: &str, authorization: &str) -> Result<HttpResponse> {
        (**self).get(url, authorization)
    }
}

/// Blocking `reqwest` transport.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Builds a client honoring the configured timeout.
    ///
    /// # Errors
    ///
    /// Returns an error if the TLS backend cannot be initialized.
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout())
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| TransportError::Request {
                url: config.api_url().to_string(),
                reason: format!("failed to build HTTP client: {e}"),
            })?;

        Ok(Self { client })
    }
}

impl Transport for ReqwestTransport {
    fn get(&self, url: &str, authorization: &str) -> Result<HttpResponse> {
        let request_failed = |e: reqwest::Error| TransportError::Request {
            url: url.to_string(),
            reason: e.to_string(),
        };

        let response = self
            .client
            .get(url)
            .header(AUTHORIZATION, authorization)
            .send()
            .map_err(request_failed)?;

        let status = response.status().as_u16();
        let link = match response.headers().get(LINK) {
            Some(value) => Some(
                value
                    .to_str()
                    .map_err(|_| TransportError::InvalidHeader {
                        url: url.to_string(),
                        header: LINK.to_string(),
                    })?
                    .to_string(),
            ),
            None => None,
        };
        let body = response.text().map_err(request_failed)?;

        Ok(HttpResponse { status, link, body })
    }
}
