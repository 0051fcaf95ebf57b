//! CORS headers and preflight responses.

use crate::router::config::CorsPolicy;
use crate::server::{HttpResponse, StatusCode};

pub const ALLOW_ORIGIN: &str = "Access-Control-Allow-Origin";
pub const ALLOW_METHODS: &str = "Access-Control-Allow-Methods";
pub const ALLOW_HEADERS: &str = "Access-Control-Allow-Headers";

/// Stamp the policy's three CORS headers on `rw`.
pub fn apply_cors_headers(policy: &CorsPolicy, rw: &mut HttpResponse) {
    rw.set_header(ALLOW_ORIGIN, policy.allow_origin.as_str());
    rw.set_header(ALLOW_METHODS, policy.allow_methods.as_str());
    rw.set_header(ALLOW_HEADERS, policy.allow_headers.as_str());
}

/// Answer an `OPTIONS` request: the CORS headers and `204 No Content`,
/// whatever the path.
pub fn handle_preflight(policy: &CorsPolicy, rw: &mut HttpResponse) {
    apply_cors_headers(policy, rw);
    rw.write_header(StatusCode::NO_CONTENT);
}
