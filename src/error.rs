//! Error types for zone fetching.
//!
//! This module provides the error hierarchy using `thiserror` for
//! configuration, HTTP transport, `Link` header parsing and output.

use thiserror::Error;

/// Result type alias for fetch operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration errors (missing token, bad base URL).
    #[error("configuration error: {message}")]
    Config {
        /// Description of the configuration error.
        message: String,
    },

    /// HTTP transport errors.
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// Malformed pagination header.
    #[error("link header error: {0}")]
    Link(#[from] LinkError),

    /// Failure serializing the aggregated result.
    #[error("output error: {0}")]
    Output(String),
}

/// Errors raised while talking to the API.
#[derive(Error, Debug)]
pub enum TransportError {
    /// Response status outside the accepted contract.
    #[error("unexpected status {status} from {url}")]
    UnexpectedStatus {
        /// URL that was requested.
        url: String,
        /// HTTP status code received.
        status: u16,
    },

    /// The request could not be sent or the response not received.
    #[error("request to {url} failed: {reason}")]
    Request {
        /// URL that was requested.
        url: String,
        /// Underlying failure.
        reason: String,
    },

    /// Response body is not a JSON array.
    #[error("invalid response body from {url}: {reason}")]
    InvalidBody {
        /// URL that was requested.
        url: String,
        /// Why the body was rejected.
        reason: String,
    },

    /// A response header is present but not valid visible ASCII.
    #[error("invalid {header} header from {url}")]
    InvalidHeader {
        /// URL that was requested.
        url: String,
        /// Name of the offending header.
        header: String,
    },

    /// The server pointed `next` at a page already fetched in this walk.
    #[error("pagination cycle detected at {url}")]
    PaginationCycle {
        /// URL that was seen twice.
        url: String,
    },
}

/// Errors raised while parsing a `Link` header.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LinkError {
    /// Segment is not of the form `<URL>; params`.
    #[error("malformed link segment: {segment:?}")]
    MalformedSegment {
        /// The offending segment.
        segment: String,
    },

    /// Segment lacks a `rel="..."` parameter.
    #[error("link segment has no rel parameter: {segment:?}")]
    MissingRelation {
        /// The offending segment.
        segment: String,
    },

    /// The same relation label appears twice in one header.
    #[error("duplicate link relation: {rel}")]
    DuplicateRelation {
        /// The repeated label.
        rel: String,
    },

    /// A page response carries no `Link` header at all.
    #[error("page response from {url} has no Link header")]
    MissingHeader {
        /// URL of the page.
        url: String,
    },

    /// A relation required to continue is absent.
    #[error("missing required link relation: {rel}")]
    MissingLink {
        /// The label that was expected.
        rel: String,
    },
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Output(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_config() {
        let err = Error::Config {
            message: "TOKEN is not set".to_string(),
        };
        assert_eq!(err.to_string(), "configuration error: TOKEN is not set");
    }

    #[test]
    fn test_transport_error_display() {
        let err = TransportError::UnexpectedStatus {
            url: "https://desec.io/api/v1/domains/example.com/rrsets/".to_string(),
            status: 404,
        };
        assert_eq!(
            err.to_string(),
            "unexpected status 404 from https://desec.io/api/v1/domains/example.com/rrsets/"
        );

        let err = TransportError::PaginationCycle {
            url: "https://x/p1".to_string(),
        };
        assert!(err.to_string().contains("cycle"));
        assert!(err.to_string().contains("https://x/p1"));

        let err = TransportError::InvalidHeader {
            url: "https://x/p1".to_string(),
            header: "link".to_string(),
        };
        assert_eq!(err.to_string(), "invalid link header from https://x/p1");
    }

    #[test]
    fn test_link_error_display() {
        let err = LinkError::DuplicateRelation {
            rel: "next".to_string(),
        };
        assert_eq!(err.to_string(), "duplicate link relation: next");

        let err = LinkError::MalformedSegment {
            segment: "garbage".to_string(),
        };
        assert!(err.to_string().contains("\"garbage\""));

        let err = LinkError::MissingHeader {
            url: "https://x/p2".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "page response from https://x/p2 has no Link header"
        );
    }

    #[test]
    fn test_error_from_transport() {
        let err: Error = TransportError::Request {
            url: "https://x".to_string(),
            reason: "connection refused".to_string(),
        }
        .into();
        assert!(matches!(err, Error::Transport(_)));
        assert!(err.to_string().contains("connection refused"));
    }

    #[test]
    fn test_error_from_link() {
        let err: Error = LinkError::MissingLink {
            rel: "first".to_string(),
        }
        .into();
        assert!(matches!(err, Error::Link(_)));
    }

    #[test]
    fn test_from_serde_json_error() {
        let json_err: serde_json::Error = serde_json::from_str::<i32>("invalid").unwrap_err();
        let err: Error = json_err.into();
        assert!(matches!(err, Error::Output(_)));
    }
}
