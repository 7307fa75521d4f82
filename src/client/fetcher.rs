//! Zone rrset retrieval with pagination.
//!
//! The deSEC API returns every rrset of a zone in one `200 OK` response
//! while the zone is small. Past its page limit it instead answers the
//! unpaginated request with `400 Bad Request` plus a `Link` header, and the
//! client is expected to walk the cursor links from `first` through every
//! `next` until none remains.

use crate::client::transport::{HttpResponse, Transport};
use crate::config::Config;
use crate::error::{LinkError, Result, TransportError};
use crate::link::{LinkMap, REL_FIRST};
use serde_json::Value;
use std::collections::HashSet;
use tracing::{debug, info};

/// One rrset as returned by the API. Never inspected.
pub type RRSet = Value;

/// How the initial request of a fetch was answered.
#[derive(Debug, Clone, PartialEq)]
pub enum InitialResponse {
    /// `200 OK`: the body holds every rrset of the zone.
    Complete(Vec<RRSet>),
    /// `400 Bad Request` with a `Link` header.
    ///
    /// deSEC-specific: this combination means the zone exceeds the page
    /// limit and must be fetched page by page. It does not generalize to
    /// other APIs.
    PaginationRequired {
        /// Links advertised by the server.
        links: LinkMap,
        /// The server's `detail` message, if the body carried one.
        detail: Option<String>,
    },
}

impl InitialResponse {
    /// Classifies the response to the unpaginated request.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::UnexpectedStatus`] for anything other than
    /// `200`, or `400` with a `Link` header. A malformed `Link` header or
    /// body is also an error.
    pub fn classify(url: &str, response: &HttpResponse) -> Result<Self> {
        match (response.status, response.link.as_deref()) {
            (200, _) => Ok(Self::Complete(parse_page(url, &response.body)?)),
            (400, Some(link)) => Ok(Self::PaginationRequired {
                links: LinkMap::parse(link)?,
                detail: error_detail(&response.body),
            }),
            (status, _) => Err(TransportError::UnexpectedStatus {
                url: url.to_string(),
                status,
            }
            .into()),
        }
    }
}

/// Fetches the complete rrset collection of a zone.
///
/// Requests are issued one at a time on the calling thread.
#[derive(Debug)]
pub struct ZoneFetcher<T> {
    transport: T,
    config: Config,
}

impl<T: Transport> ZoneFetcher<T> {
    /// Creates a fetcher over the given transport.
    pub const fn new(transport: T, config: Config) -> Self {
        Self { transport, config }
    }

    /// Returns every rrset of `zone` in the order the server yields them.
    ///
    /// # Errors
    ///
    /// Fails on any response outside the accepted status contract, on a
    /// malformed `Link` header, or on a body that is not a JSON array. No
    /// partial result is returned.
    pub fn fetch(&self, zone: &str) -> Result<Vec<RRSet>> {
        let url = self.config.rrsets_url(zone);
        let response = self.get(&url)?;

        match InitialResponse::classify(&url, &response)? {
            InitialResponse::Complete(rrsets) => {
                debug!(zone, count = rrsets.len(), "zone fetched in a single response");
                Ok(rrsets)
            }
            InitialResponse::PaginationRequired { links, detail } => {
                info!(
                    "Response: {} {}",
                    response.status,
                    detail.as_deref().unwrap_or("")
                );
                let first = links.require(REL_FIRST)?;
                self.walk(first)
            }
        }
    }

    /// Follows `next` links starting at `first`, concatenating every page.
    fn walk(&self, first: &str) -> Result<Vec<RRSet>> {
        let mut rrsets = Vec::new();
        let mut visited = HashSet::new();
        let mut next = Some(first.to_string());

        while let Some(url) = next.take() {
            if !visited.insert(url.clone()) {
                return Err(TransportError::PaginationCycle { url }.into());
            }

            let response = self.get(&url)?;
            if response.status != 200 {
                return Err(TransportError::UnexpectedStatus {
                    url,
                    status: response.status,
                }
                .into());
            }

            let page = parse_page(&url, &response.body)?;
            debug!(page = visited.len(), count = page.len(), "page received");
            rrsets.extend(page);

            // Every page carries at least `first`; only an absent `next` ends the walk.
            let link = response
                .link
                .as_deref()
                .ok_or_else(|| LinkError::MissingHeader { url: url.clone() })?;
            next = LinkMap::parse(link)?.next().map(str::to_string);
        }

        debug!(pages = visited.len(), count = rrsets.len(), "pagination walk done");
        Ok(rrsets)
    }

    fn get(&self, url: &str) -> Result<HttpResponse> {
        info!("Getting {url} ...");
        self.transport.get(url, &self.config.authorization())
    }
}

/// Parses a page body, which must be a JSON array.
fn parse_page(url: &str, body: &str) -> Result<Vec<RRSet>> {
    let invalid = |reason: String| TransportError::InvalidBody {
        url: url.to_string(),
        reason,
    };

    match serde_json::from_str::<Value>(body).map_err(|e| invalid(e.to_string()))? {
        Value::Array(items) => Ok(items),
        other => Err(invalid(format!("expected a JSON array, got {}", json_kind(&other))).into()),
    }
}

/// Extracts the `detail` message of an API error body.
fn error_detail(body: &str) -> Option<String> {
    serde_json::from_str::<Value>(body)
        .ok()?
        .get("detail")?
        .as_str()
        .map(str::to_string)
}

const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
