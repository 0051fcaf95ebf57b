//! HTTP response types and utilities.
//!
//! [`HttpResponse`] doubles as the mutable response target handed to handler
//! units: the status is committed once, body writes append, and the whole
//! thing is serialized after the handler chain has finished.

use std::collections::HashMap;
use std::fmt;
use log::warn;
use serde::Serialize;

use crate::server::error::Error;

/// An HTTP status code.
///
/// Handlers may emit any code in `100..=999`; the named constants cover the
/// ones this crate produces itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StatusCode(u16);

impl StatusCode {
    pub const OK: StatusCode = StatusCode(200);
    pub const CREATED: StatusCode = StatusCode(201);
    pub const ACCEPTED: StatusCode = StatusCode(202);
    pub const NO_CONTENT: StatusCode = StatusCode(204);
    pub const BAD_REQUEST: StatusCode = StatusCode(400);
    pub const UNAUTHORIZED: StatusCode = StatusCode(401);
    pub const FORBIDDEN: StatusCode = StatusCode(403);
    pub const NOT_FOUND: StatusCode = StatusCode(404);
    pub const METHOD_NOT_ALLOWED: StatusCode = StatusCode(405);
    pub const CONFLICT: StatusCode = StatusCode(409);
    pub const UNPROCESSABLE_ENTITY: StatusCode = StatusCode(422);
    pub const INTERNAL_SERVER_ERROR: StatusCode = StatusCode(500);
    pub const NOT_IMPLEMENTED: StatusCode = StatusCode(501);
    pub const BAD_GATEWAY: StatusCode = StatusCode(502);
    pub const SERVICE_UNAVAILABLE: StatusCode = StatusCode(503);

    /// Build a status code from its numeric value, rejecting anything outside `100..=999`.
    pub fn from_u16(code: u16) -> Option<Self> {
        (100..=999).contains(&code).then_some(Self(code))
    }

    pub fn as_u16(&self) -> u16 {
        self.0
    }

    /// Get the reason phrase for this status code, or `""` for codes without one.
    pub fn reason_phrase(&self) -> &'static str {
        match self.0 {
            200 => "OK",
            201 => "Created",
            202 => "Accepted",
            204 => "No Content",
            301 => "Moved Permanently",
            302 => "Found",
            304 => "Not Modified",
            400 => "Bad Request",
            401 => "Unauthorized",
            403 => "Forbidden",
            404 => "Not Found",
            405 => "Method Not Allowed",
            409 => "Conflict",
            422 => "Unprocessable Entity",
            429 => "Too Many Requests",
            500 => "Internal Server Error",
            501 => "Not Implemented",
            502 => "Bad Gateway",
            503 => "Service Unavailable",
            _ => "",
        }
    }
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Represents an HTTP response.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    /// The HTTP status code
    pub status: StatusCode,
    /// The HTTP headers
    pub headers: HashMap<String, String>,
    /// The response body
    pub body: Vec<u8>,
    status_written: bool,
}

impl Default for HttpResponse {
    /// A blank response target: status 200, nothing committed yet.
    fn default() -> Self {
        let mut headers = HashMap::new();
        headers.insert("Server".to_string(), "microroute-rs".to_string());

        Self {
            status: StatusCode::OK,
            headers,
            body: Vec::new(),
            status_written: false,
        }
    }
}

impl HttpResponse {
    /// Create a complete response with the given status code already committed.
    pub fn new(status: StatusCode) -> Self {
        let mut response = Self::default();
        response.write_header(status);
        response
    }

    /// Commit the status code.
    ///
    /// Only the first call has an effect; later calls are logged and ignored.
    pub fn write_header(&mut self, status: StatusCode) {
        if self.status_written {
            warn!(
                "superfluous write_header call: status already {committed}, ignoring {status}",
                committed = self.status
            );
            return;
        }
        self.status = status;
        self.status_written = true;
    }

    /// Append bytes to the body, committing a 200 first if no status was written.
    pub fn write(&mut self, bytes: &[u8]) {
        if !self.status_written {
            self.write_header(StatusCode::OK);
        }
        self.body.extend_from_slice(bytes);
    }

    /// Whether a status has been committed, either explicitly or by a body write.
    pub fn is_written(&self) -> bool {
        self.status_written
    }

    /// Add or replace a header.
    pub fn set_header(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        self.headers.retain(|k, _| !k.eq_ignore_ascii_case(&name));
        self.headers.insert(name, value.into());
    }

    /// Get a header value, ignoring the case of the name.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find_map(|(k, v)| k.eq_ignore_ascii_case(name).then_some(v.as_str()))
    }

    /// Set the response body with a string.
    pub fn with_body_string(mut self, body: impl Into<String>) -> Self {
        self.body = body.into().into_bytes();
        self
    }

    /// Set the response body with bytes.
    pub fn with_body_bytes(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.body = body.into();
        self
    }

    /// Add or replace a header.
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_header(name, value);
        self
    }

    /// Set the content type.
    pub fn with_content_type(self, content_type: impl Into<String>) -> Self {
        self.with_header("Content-Type", content_type)
    }

    /// Serialize `value` to JSON and use it as the body.
    pub fn with_json<T: Serialize>(self, value: &T) -> Result<Self, Error> {
        let json = serde_json::to_vec(value)?;
        Ok(self
            .with_content_type("application/json")
            .with_body_bytes(json))
    }

    /// Convert the response to bytes.
    ///
    /// `Content-Length` is always computed from the final body.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(128 + self.body.len());

        let status_line = format!("HTTP/1.1 {} {}\r\n", self.status, self.status.reason_phrase());
        bytes.extend_from_slice(status_line.as_bytes());

        let mut names: Vec<&String> = self.headers.keys().collect();
        names.sort();
        for name in names {
            if name.eq_ignore_ascii_case("Content-Length") {
                continue;
            }
            let header_line = format!("{name}: {value}\r\n", value = self.headers[name]);
            bytes.extend_from_slice(header_line.as_bytes());
        }
        let content_length = format!("Content-Length: {}\r\n", self.body.len());
        bytes.extend_from_slice(content_length.as_bytes());

        bytes.extend_from_slice(b"\r\n");
        bytes.extend_from_slice(&self.body);

        bytes
    }
}
