//! HTTP request parsing and representation.

use std::collections::HashMap;
use std::str::FromStr;
use serde::de::DeserializeOwned;

use crate::parser::error::Error;
use crate::parser::method::Method;
use crate::parser::version::HttpVersion;

/// Represents an HTTP request as seen by route handlers.
///
/// The request target is split on the first `?`: `path` holds only the part
/// the router matches against, the remainder is kept raw in `query` and
/// decoded loosely into `query_params`.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    /// The HTTP method (GET, POST, etc.)
    pub method: Method,
    /// The request path, without the query string
    pub path: String,
    /// The raw query string, if the target had one
    pub query: Option<String>,
    /// The HTTP version
    pub version: HttpVersion,
    /// The HTTP headers
    pub headers: HashMap<String, String>,
    /// The request body
    pub body: Vec<u8>,
    /// Query parameters parsed from the target
    pub query_params: HashMap<String, String>,
}

impl HttpRequest {
    /// Create a new HTTP request from a request target such as `/users/7?full=1`.
    pub fn new(method: Method, target: impl Into<String>, version: HttpVersion, headers: HashMap<String, String>) -> Self {
        let target = target.into();
        let (path, query) = match target.split_once('?') {
            Some((path, query)) => (path.to_string(), Some(query.to_string())),
            None => (target, None),
        };

        let query_params = query
            .as_deref()
            .map(parse_query)
            .unwrap_or_default();

        Self {
            method,
            path,
            query,
            version,
            headers,
            body: Vec::new(),
            query_params,
        }
    }

    /// Create a new HTTP request with a body.
    pub fn with_body(method: Method, target: impl Into<String>, version: HttpVersion, headers: HashMap<String, String>, body: Vec<u8>) -> Self {
        let mut request = Self::new(method, target, version, headers);
        request.body = body;
        request
    }

    /// Get a header value, ignoring the case of the name.
    pub fn get_header(&self, name: &str) -> Option<&String> {
        self.headers
            .iter()
            .find_map(|(k, v)| k.eq_ignore_ascii_case(name).then_some(v))
    }

    /// Check if a header exists.
    pub fn has_header(&self, name: &str) -> bool {
        self.get_header(name).is_some()
    }

    /// Parse the request body as JSON.
    ///
    /// Fails with [`Error::MissingHeader`] unless the request declares an
    /// `application/json` content type.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, Error> {
        if !self.is_json() {
            return Err(Error::MissingHeader("Content-Type: application/json".to_string()));
        }
        Ok(serde_json::from_slice(&self.body)?)
    }

    /// Check if the request has a JSON body.
    pub fn is_json(&self) -> bool {
        self.get_header("Content-Type")
            .is_some_and(|content_type| content_type.starts_with("application/json"))
    }

    /// Get a query parameter value.
    pub fn get_query_param(&self, name: &str) -> Option<&String> {
        self.query_params.get(name)
    }

    /// Check if a query parameter exists.
    pub fn has_query_param(&self, name: &str) -> bool {
        self.query_params.contains_key(name)
    }
}

fn parse_query(query: &str) -> HashMap<String, String> {
    query
        .split('&')
        .filter(|s| !s.is_empty())
        .map(|pair| match pair.split_once('=') {
            Some((k, v)) => (k.to_string(), v.to_string()),
            None => (pair.to_string(), String::new()),
        })
        .collect()
}

/// Split raw bytes into the header block and whatever follows the blank line.
fn split_head(input: &[u8]) -> (&[u8], &[u8]) {
    if let Some(pos) = input.windows(4).position(|w| w == b"\r\n\r\n") {
        return (&input[..pos], &input[pos + 4..]);
    }
    if let Some(pos) = input.windows(2).position(|w| w == b"\n\n") {
        return (&input[..pos], &input[pos + 2..]);
    }
    (input, &[])
}

/// Parse an HTTP request from a byte slice.
///
/// Everything after the header block is taken as the body, truncated to
/// `Content-Length` when that header is present and smaller than what was read.
pub fn parse_request(input: &[u8]) -> Result<HttpRequest, Error> {
    if input.is_empty() {
        return Err(Error::EmptyRequest);
    }

    let (head, body) = split_head(input);
    let head = std::str::from_utf8(head)
        .map_err(|_| Error::MalformedRequestLine("Invalid UTF-8".to_string()))?;

    let mut lines = head.lines();
    let request_line = lines.next().ok_or(Error::EmptyRequest)?;

    let parts: Vec<&str> = request_line.split_whitespace().collect();
    let [method, target, version] = parts[..] else {
        return Err(Error::MalformedRequestLine(request_line.to_string()));
    };

    let method = Method::from_str(method)?;
    if !target.starts_with('/') && target != "*" {
        return Err(Error::InvalidPath);
    }
    let version = HttpVersion::from_str(version)?;

    let mut headers = HashMap::new();
    for line in lines {
        if line.is_empty() {
            break;
        }
        let (name, value) = line.split_once(':').ok_or(Error::InvalidHeaderFormat)?;
        headers.insert(name.trim().to_string(), value.trim().to_string());
    }

    if version == HttpVersion::Http11 && !headers.keys().any(|k| k.eq_ignore_ascii_case("Host")) {
        return Err(Error::MissingHeader("Host".to_string()));
    }

    let mut body = body.to_vec();
    let declared_length = headers
        .iter()
        .find(|(k, _)| k.eq_ignore_ascii_case("Content-Length"))
        .and_then(|(_, v)| v.parse::<usize>().ok());
    if let Some(length) = declared_length {
        body.truncate(length);
    }

    Ok(HttpRequest::with_body(method, target, version, headers, body))
}
