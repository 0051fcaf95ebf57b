//! Minimal HTTP/1.x request parser.
//!
//! Produces the immutable [`HttpRequest`] descriptor that the router matches
//! on and hands to every handler unit.

mod request;
mod method;
mod version;
mod error;
mod tests;

pub use request::HttpRequest;
pub use method::Method;
pub use version::HttpVersion;
pub use error::Error;

pub use request::parse_request;
