//! Error types for the host server.

use thiserror::Error;

use crate::parser::Error as ParserError;

/// Errors that can end a connection task.
///
/// Routing never produces one of these: unmatched requests and handler
/// failures are always turned into a response before they reach the server.
#[derive(Debug, Error)]
pub enum Error {
    /// The bytes read from the socket were not a valid request.
    #[error("Parse error: {0}")]
    ParseError(#[from] ParserError),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON serialization error while building a response.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}
