//! Handler unit types.

use std::sync::Arc;

use crate::parser::HttpRequest;
use crate::router::endpoint_error::EndpointError;
use crate::server::HttpResponse;

/// Outcome of an endpoint handler unit: keep going, or stop and emit the error.
pub type EndpointResult = Result<(), EndpointError>;

/// A raw handler unit. Every unit registered for a route runs, in order.
pub type HandlerFn = Arc<dyn Fn(&mut HttpResponse, &HttpRequest) + Send + Sync>;

/// A fallible handler unit, run as one step of an [`Endpoint`](crate::Endpoint).
pub type EndpointHandlerFn = Arc<dyn Fn(&mut HttpResponse, &HttpRequest) -> EndpointResult + Send + Sync>;

/// Wrap a closure as a [`HandlerFn`].
pub fn handler_fn<F>(f: F) -> HandlerFn
where
    F: Fn(&mut HttpResponse, &HttpRequest) + Send + Sync + 'static,
{
    Arc::new(f)
}

/// Wrap a closure as an [`EndpointHandlerFn`].
pub fn endpoint_fn<F>(f: F) -> EndpointHandlerFn
where
    F: Fn(&mut HttpResponse, &HttpRequest) -> EndpointResult + Send + Sync + 'static,
{
    Arc::new(f)
}
