//! HTTP request methods.

use std::fmt;
use std::str::FromStr;

use crate::parser::error::Error;

/// HTTP request methods understood by the parser.
///
/// Only [`Method::GET`], [`Method::POST`], [`Method::PATCH`] and
/// [`Method::DELETE`] can carry routes; `OPTIONS` is answered by the CORS
/// preflight responder and the rest always resolve to 404. Any other
/// well-formed method token parses as [`Method::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Method {
    GET,
    POST,
    PUT,
    DELETE,
    HEAD,
    OPTIONS,
    PATCH,
    TRACE,
    CONNECT,
    /// An extension method the parser has no name for.
    Other,
}

impl Method {
    /// Methods that can hold routes, in the order they are listed for diagnostics.
    pub const ROUTABLE: [Method; 4] = [Method::GET, Method::POST, Method::PATCH, Method::DELETE];

    /// The canonical upper-case name of the method.
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::GET => "GET",
            Method::POST => "POST",
            Method::PUT => "PUT",
            Method::DELETE => "DELETE",
            Method::HEAD => "HEAD",
            Method::OPTIONS => "OPTIONS",
            Method::PATCH => "PATCH",
            Method::TRACE => "TRACE",
            Method::CONNECT => "CONNECT",
            Method::Other => "OTHER",
        }
    }

    /// Whether routes may be registered under this method.
    pub fn is_routable(&self) -> bool {
        Self::ROUTABLE.contains(self)
    }
}

impl FromStr for Method {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "GET" => Ok(Method::GET),
            "POST" => Ok(Method::POST),
            "PUT" => Ok(Method::PUT),
            "DELETE" => Ok(Method::DELETE),
            "HEAD" => Ok(Method::HEAD),
            "OPTIONS" => Ok(Method::OPTIONS),
            "PATCH" => Ok(Method::PATCH),
            "TRACE" => Ok(Method::TRACE),
            "CONNECT" => Ok(Method::CONNECT),
            _ if is_token(s) => Ok(Method::Other),
            _ => Err(Error::InvalidMethod(s.to_string())),
        }
    }
}

/// RFC 9110 `token`: one or more tchars.
fn is_token(s: &str) -> bool {
    !s.is_empty()
        && s.bytes()
            .all(|b| b.is_ascii_alphanumeric() || b"!#$%&'*+-.^_`|~".contains(&b))
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
