//! Error types for the todo API client.
//!
//! # Design
//! Every failure to complete a call is a `TransportError`, whether the
//! network failed, the server answered with a non-2xx status, or the body
//! did not have the expected shape. `NotFound` gets a dedicated variant
//! because an update or delete of an unknown id is the one status callers
//! commonly distinguish. All other non-2xx responses land in `Status` with
//! the raw code and body for debugging.

use thiserror::Error;

/// Errors returned by the todo API client layers.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Connection refused, DNS failure, broken body stream, etc.
    #[error("HTTP transport error: {0}")]
    Network(String),

    /// The server returned 404: the addressed todo does not exist.
    #[error("resource not found")]
    NotFound,

    /// The server returned a non-2xx status other than 404.
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    Decode(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Encode(String),

    /// The configured base URL is not a usable http(s) URL.
    #[error("invalid API base URL {url:?}: {reason}")]
    InvalidConfig { url: String, reason: String },
}
