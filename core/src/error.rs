//! Error types for the registry client.
//!
//! # Design
//! The invocation points collapse every variant into the fallback value, so
//! this taxonomy is only visible through the host-does-IO API
//! (`RegistryClient::parse_message`) and in debug logs. `NotFound` keeps its
//! own variant because a missing endpoint is the common failure.

/// Errors produced while building, sending, or parsing a request.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (connection refused, DNS, ...).
    #[error("transport failed: {0}")]
    Transport(String),

    /// The server returned 404.
    #[error("resource not found")]
    NotFound,

    /// The server returned a non-2xx status other than 404.
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    /// The response body was not valid JSON.
    #[error("deserialization failed: {0}")]
    DeserializationError(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    SerializationError(String),

    /// The decoded body had no string value under the expected field.
    #[error("missing string field `{0}` in response body")]
    MissingField(String),
}
