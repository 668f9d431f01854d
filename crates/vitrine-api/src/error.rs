//! Error taxonomy for the events API client.

use thiserror::Error;

/// Errors surfaced by [`crate::SiteClient`].
#[derive(Debug, Error)]
pub enum Error {
    /// Transport-level failure (DNS, TLS, connect, timeout).
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The configured site URL could not be parsed or joined.
    #[error("invalid site URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The server rejected our credentials (401/403).
    #[error("not authorized: {message}")]
    Unauthorized { message: String },

    /// The requested event does not exist (404).
    #[error("event not found: {id}")]
    NotFound { id: String },

    /// Any other non-success HTTP status, with the server's error message
    /// when it sent one.
    #[error("server returned {status}: {message}")]
    Api { status: u16, message: String },

    /// The response body was not the JSON shape we expected.
    #[error("unexpected response body: {0}")]
    Decode(#[source] serde_json::Error),
}
