//! Error types for the taxonomy client.
//!
//! Fetch failures and query-argument failures are deliberately separate:
//! the one-time fetch outcome is memoized for the client's lifetime, so
//! [`FetchError`] is handed out behind an `Arc`, while [`Error`] is what
//! the query surface returns per call.

use std::sync::Arc;

/// Failure of the one-time snapshot fetch. Memoized alongside the
/// collection: every later [`load`](crate::ProcessClient::load) call sees
/// the same instance.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("{url} returned HTTP {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },
    #[error("could not decode taxonomy document from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

/// Error surface of the client's query operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A query argument that cannot name any taxonomy position, e.g. an
    /// empty or non-numeric hierarchy ID. Rejected before the collection
    /// is consulted.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// HTTP client construction failed (malformed user agent, TLS setup).
    #[error("could not construct HTTP client: {0}")]
    Init(#[source] reqwest::Error),

    /// Propagated fetch outcome, for callers that opt in via
    /// [`load`](crate::ProcessClient::load) rather than the degrading
    /// query surface.
    #[error(transparent)]
    Fetch(#[from] Arc<FetchError>),
}
