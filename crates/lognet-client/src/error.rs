//! Error types for the logging client.

use thiserror::Error;

/// Errors that can occur in the logging client.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The service did not answer the construction-time ping with a
    /// success status, so the client was never usable.
    #[error("unable to reach logging service at {endpoint}")]
    Unreachable {
        /// The endpoint that failed the reachability check.
        endpoint: String,
        /// The underlying transport error, when the ping never got a
        /// response at all.
        #[source]
        source: Option<reqwest::Error>,
    },

    /// A network-level failure on an individual call: no response was
    /// received. Non-2xx responses are not errors; they classify as
    /// [`Outcome::Failure`](crate::Outcome::Failure).
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
}

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;
