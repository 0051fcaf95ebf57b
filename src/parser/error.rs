//! Error types for the request parser.

use thiserror::Error;

/// Errors that can occur while turning raw bytes into an [`HttpRequest`](crate::HttpRequest).
#[derive(Debug, Error)]
pub enum Error {
    /// The method is not a valid HTTP token.
    #[error("Invalid HTTP method: {0}")]
    InvalidMethod(String),

    /// The request target is neither origin-form (`/...`) nor `*`.
    #[error("Invalid HTTP path")]
    InvalidPath,

    /// The request line does not have exactly three parts.
    #[error("Malformed request line: {0}")]
    MalformedRequestLine(String),

    #[error("Invalid HTTP version: {0}")]
    InvalidVersion(String),

    /// A required header is missing from the request.
    #[error("Required header is missing: {0}")]
    MissingHeader(String),

    /// A header line has no `:` separator.
    #[error("Invalid header format")]
    InvalidHeaderFormat,

    #[error("Empty request")]
    EmptyRequest,

    /// The body could not be decoded as JSON.
    #[error("JSON parsing error: {0}")]
    JsonError(#[from] serde_json::Error),
}
