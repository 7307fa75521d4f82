//! # fetch-zone
//!
//! Fetches the complete rrset contents of a zone hosted at deSEC.
//!
//! Small zones are answered in a single response. Larger zones are
//! rejected with `400 Bad Request` and a `Link` header, after which the
//! client walks the advertised cursor pages and concatenates them in
//! order.
//!
//! ## Features
//!
//! - **Pagination**: transparent `first` → `next` walk over `Link` headers
//! - **Pluggable transport**: blocking `reqwest` client, or any [`Transport`]
//! - **Pass-through**: rrsets are never inspected or reordered

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod link;
pub mod logging;

// Re-export commonly used types at crate root
pub use error::{Error, LinkError, Result, TransportError};

pub use client::{HttpResponse, InitialResponse, RRSet, ReqwestTransport, Transport, ZoneFetcher};
pub use config::{Config, DEFAULT_API_URL};
pub use link::LinkMap;

pub use cli::Cli;
