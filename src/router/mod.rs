//! Request routing.
//!
//! Patterns come in three kinds. A plain path is matched exactly. A path
//! containing `{}` matches any request path with the same number of segments
//! whose other segments agree. A path containing `{*}` matches every request
//! path that starts with the part before the marker. Lookups try exact,
//! variable and static routes in that order.

mod config;
mod cors;
mod dispatch;
mod endpoint;
mod endpoint_error;
mod handler;
mod matcher;
mod pattern;
mod registry;
mod respond;

pub use config::{CorsPolicy, MatchMode, RouterConfig};
pub use cors::{apply_cors_headers, handle_preflight, ALLOW_HEADERS, ALLOW_METHODS, ALLOW_ORIGIN};
pub use dispatch::Router;
pub use endpoint::Endpoint;
pub use endpoint_error::{BoxError, EndpointError};
pub use handler::{endpoint_fn, handler_fn, EndpointHandlerFn, EndpointResult, HandlerFn};
pub use matcher::{static_matches, variable_matches, RouteMatch};
pub use pattern::{literal_prefix, PatternKind, STATIC_MARKER, VARIABLE_MARKER};
pub use registry::RouteRegistry;
pub use respond::{fail_with_error_message, fail_with_json_status, succeed_with_json_status, succeed_with_message};
