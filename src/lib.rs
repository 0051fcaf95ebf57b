//! A lightweight HTTP request router.
//!
//! Routes are registered per method against path patterns, and each request
//! runs the handlers of the first matching pattern.
//!
//! # Features
//!
//! - Three pattern kinds: exact (`/health`), variable (`/users/{}`, one
//!   segment of any value) and static (`/assets/{*}`, any suffix)
//! - Exact routes always win, then variable, then static; within a kind the
//!   first registered pattern wins
//! - Endpoints: ordered sequences of fallible handler units that stop at the
//!   first [`EndpointError`] and turn it into the response
//! - Permissive CORS headers on every response and a built-in answer to
//!   `OPTIONS` preflight requests
//! - A small tokio server to host the router
//!
//! # Examples
//!
//! ## Routing
//!
//! ```
//! use microroute_rs::{endpoint_fn, succeed_with_message, HttpRequest, HttpVersion, Method, Router, StatusCode};
//!
//! let mut router = Router::default();
//! router
//!     .get("/health", [endpoint_fn(|rw, _req| succeed_with_message("ok", rw))])
//!     .get("/users/{}", [endpoint_fn(|rw, req| succeed_with_message(&req.path, rw))])
//!     .get("/assets/{*}", [endpoint_fn(|rw, _req| succeed_with_message("file", rw))]);
//!
//! let request = HttpRequest::new(Method::GET, "/users/7", HttpVersion::Http11, Default::default());
//! let response = router.handle(&request);
//! assert_eq!(response.status, StatusCode::OK);
//! assert_eq!(response.body, b"/users/7");
//!
//! let request = HttpRequest::new(Method::GET, "/users/7/posts", HttpVersion::Http11, Default::default());
//! assert_eq!(router.handle(&request).status, StatusCode::NOT_FOUND);
//! ```
//!
//! ## Short-circuiting endpoints
//!
//! ```
//! use microroute_rs::{endpoint_fn, fail_with_error_message, succeed_with_json_status};
//! use microroute_rs::{HttpRequest, HttpVersion, Method, Router, StatusCode};
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct Order {
//!     id: u32,
//! }
//!
//! let mut router = Router::default();
//! router.get("/orders/{}", [
//!     endpoint_fn(|_rw, req| match req.get_header("Authorization") {
//!         Some(_) => Ok(()),
//!         None => Err(fail_with_error_message(StatusCode::UNAUTHORIZED, "login required", "missing Authorization header")),
//!     }),
//!     endpoint_fn(|rw, _req| succeed_with_json_status(&Order { id: 1 }, rw)),
//! ]);
//!
//! let request = HttpRequest::new(Method::GET, "/orders/1", HttpVersion::Http11, Default::default());
//! let response = router.handle(&request);
//! assert_eq!(response.status, StatusCode::UNAUTHORIZED);
//! assert_eq!(response.header("Content-Type"), Some("text/plain"));
//! assert_eq!(response.body, b"login required");
//! ```
//!
//! ## Serving
//!
//! ```no_run
//! use microroute_rs::{HttpServer, Router, ServerConfig};
//!
//! # async fn run() -> Result<(), microroute_rs::ServerError> {
//! let router = Router::default();
//! HttpServer::new(ServerConfig::default(), router).start().await
//! # }
//! ```
//!
//! See the `demos` directory for runnable programs.

pub mod parser;

pub mod router;

pub mod server;

pub use parser::{Error as ParserError, HttpRequest, HttpVersion, Method, parse_request};
pub use router::{
    endpoint_fn, fail_with_error_message, fail_with_json_status, handler_fn, succeed_with_json_status,
    succeed_with_message, CorsPolicy, Endpoint, EndpointError, EndpointHandlerFn, EndpointResult, HandlerFn,
    MatchMode, PatternKind, RouteMatch, RouteRegistry, Router, RouterConfig,
};
pub use server::{Error as ServerError, HttpResponse, HttpServer, ServerConfig, StatusCode};
