//! Error types for the blog API client.
//!
//! # Design
//! Every way an operation can fail collapses into one `ApiError`: transport
//! failures, non-success statuses, payload codec failures, and caller
//! cancellation. The store performs no recovery on any of them; the error is
//! re-surfaced to whoever dispatched the operation. `Clone`/`PartialEq` let
//! errors ride inside dispatched events and be asserted on in tests.

use std::fmt;

/// Errors returned by `PostClient` parse methods and `PostOps` operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The server returned 404 — the requested post does not exist.
    NotFound,

    /// The server returned a non-2xx status other than 404.
    HttpError { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    DeserializationError(String),

    /// The request payload could not be serialized to JSON.
    SerializationError(String),

    /// The HTTP round-trip itself failed (connection refused, IO error).
    Transport(String),

    /// The caller triggered the operation's cancellation token.
    Cancelled,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::NotFound => write!(f, "resource not found"),
            ApiError::HttpError { status, body } => {
                write!(f, "HTTP {status}: {body}")
            }
            ApiError::DeserializationError(msg) => {
                write!(f, "deserialization failed: {msg}")
            }
            ApiError::SerializationError(msg) => {
                write!(f, "serialization failed: {msg}")
            }
            ApiError::Transport(msg) => {
                write!(f, "transport failed: {msg}")
            }
            ApiError::Cancelled => write!(f, "request cancelled"),
        }
    }
}

impl std::error::Error for ApiError {}
