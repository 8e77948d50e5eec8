//! Error types for the payroll API client.
//!
//! # Design
//! The stub methods cannot fail, so these errors only surface from the
//! `build_*` / `parse_*` pairs. `NotFound` gets a dedicated variant because
//! an unknown period or path is the one failure callers tend to branch on.
//! All other unexpected statuses land in `HttpError` with the raw status code
//! and body for debugging.

use thiserror::Error;

/// Errors returned by `PayrollClient` build and parse methods.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server returned 404.
    #[error("resource not found")]
    NotFound,

    /// The server returned a status other than 200 and 404.
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    DeserializationError(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    SerializationError(String),
}
