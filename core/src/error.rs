//! Error types for the order submit client.
//!
//! # Design
//! `Rejected` gets a dedicated variant because callers treat "the server
//! refused the order and said why" differently from "the server returned
//! something unexpected": a rejection message goes straight onto the form's
//! failure banner, while the other variants indicate a broken peer or
//! payload. Non-2xx responses whose body is not a well-formed rejection
//! land in `HttpError` with the raw status and body for debugging.

use thiserror::Error;

/// Errors returned by `OrderClient` build/parse methods.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server returned a non-2xx status with a rejection body
    /// explaining which rule the order violated.
    #[error("order rejected (HTTP {status}): {message}")]
    Rejected { status: u16, message: String },

    /// The server returned a non-2xx status without a readable rejection.
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    DeserializationError(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    SerializationError(String),
}
