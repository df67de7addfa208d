// @file: src/core/errors.rs
// @description: Failure taxonomy for proxy queries.
// @author: LAS.

use reqwest::StatusCode;

/// Error returned by every proxy query.
///
/// Construction problems surface before any I/O. Transport failures come straight
/// from the HTTP client. Status and decode failures carry the URL that was queried.
#[derive(Debug, thiserror::Error)]
pub enum QueryError {
    /// The configured base address is not a valid absolute URL
    #[error("invalid base address '{addr}': {source}")]
    InvalidBaseUrl {
        addr: String,
        #[source]
        source: url::ParseError,
    },

    /// The base address parses but cannot have routes appended to it
    #[error("unsupported base address '{addr}': {reason}")]
    UnsupportedBaseUrl {
        addr: String,
        reason: &'static str,
    },

    /// Base address and route did not combine into a valid URL
    #[error("invalid endpoint '{endpoint}': {source}")]
    InvalidEndpoint {
        endpoint: String,
        #[source]
        source: url::ParseError,
    },

    /// The HTTP client could not be built
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// Connection, DNS, timeout or body read failure
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Upstream answered with a non-success status
    #[error("upstream returned {status} for {url}: {body}")]
    Status {
        status: StatusCode,
        url: String,
        body: String,
    },

    /// Body is not JSON of the expected shape
    #[error("failed to decode response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

impl QueryError {
    /// HTTP status for `Status` errors, or the status a transport error was raised for.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            QueryError::Status { status, .. } => Some(*status),
            QueryError::Transport(e) => e.status(),
            _ => None,
        }
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, QueryError::Transport(e) if e.is_timeout())
    }

    pub fn is_decode(&self) -> bool {
        matches!(self, QueryError::Decode { .. })
    }
}
