//! The structured failure a handler unit returns to stop its endpoint.

use std::error::Error as StdError;

use serde::de::IgnoredAny;
use thiserror::Error;

use crate::server::StatusCode;

/// Boxed cause carried by an [`EndpointError`].
pub type BoxError = Box<dyn StdError + Send + Sync>;

/// Stops an endpoint's sequence and decides what the client sees.
///
/// The `cause` is for server logs only; the client receives `status` and
/// `message` and nothing else.
#[derive(Debug, Error)]
#[error("endpoint failed with status {status}: {}", describe(.cause))]
pub struct EndpointError {
    #[source]
    cause: Option<BoxError>,
    status: StatusCode,
    message: String,
}

fn describe(cause: &Option<BoxError>) -> String {
    match cause {
        Some(cause) => cause.to_string(),
        None => "no underlying cause".to_string(),
    }
}

impl EndpointError {
    pub fn new(status: StatusCode, message: impl Into<String>, cause: Option<BoxError>) -> Self {
        Self {
            cause,
            status,
            message: message.into(),
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// The response body sent to the client.
    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn cause(&self) -> Option<&(dyn StdError + Send + Sync + 'static)> {
        self.cause.as_deref()
    }

    /// Whether the response body is syntactically valid JSON.
    pub fn is_json(&self) -> bool {
        serde_json::from_str::<IgnoredAny>(&self.message).is_ok()
    }

    /// `application/json` for a JSON body, `text/plain` otherwise.
    pub fn content_type(&self) -> &'static str {
        if self.is_json() {
            "application/json"
        } else {
            "text/plain"
        }
    }
}
