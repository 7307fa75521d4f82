//! deSEC API client.
//!
//! Provides the pagination-following [`ZoneFetcher`] and the [`Transport`]
//! seam it issues requests through.

pub mod fetcher;
pub mod transport;

pub use fetcher::{InitialResponse, RRSet, ZoneFetcher};
pub use transport::{HttpResponse, ReqwestTransport, Transport};
