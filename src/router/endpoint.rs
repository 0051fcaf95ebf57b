//! Endpoints: an ordered, short-circuiting sequence of fallible handler units.

use std::fmt;
use std::sync::Arc;

use log::{debug, warn};

use crate::parser::{HttpRequest, Method};
use crate::router::endpoint_error::EndpointError;
use crate::router::handler::{EndpointHandlerFn, EndpointResult, HandlerFn};
use crate::server::HttpResponse;

/// A path, a method and the units that serve it.
///
/// Built with the `with_*` methods, then handed to the
/// [`Router`](crate::Router), which freezes it for the life of the process.
///
/// ```
/// use microroute_rs::{Endpoint, Method, StatusCode, fail_with_error_message, succeed_with_message};
///
/// let endpoint = Endpoint::new("/orders/{}")
///     .with_method(Method::GET)
///     .with_handler(|_rw, req| {
///         if req.has_header("Authorization") {
///             Ok(())
///         } else {
///             Err(fail_with_error_message(StatusCode::UNAUTHORIZED, "login required", "no Authorization header"))
///         }
///     })
///     .with_handler(|rw, _req| succeed_with_message("order", rw));
///
/// assert_eq!(endpoint.len(), 2);
/// ```
#[derive(Clone)]
pub struct Endpoint {
    path: String,
    method: Option<Method>,
    sequence: Vec<EndpointHandlerFn>,
    terminal_success: Option<bool>,
}

impl Endpoint {
    /// Create an endpoint for `path` with no method and no units.
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            method: None,
            sequence: Vec::new(),
            terminal_success: None,
        }
    }

    pub fn with_method(mut self, method: Method) -> Self {
        self.method = Some(method);
        self
    }

    /// Append one unit to the sequence.
    pub fn with_handler<F>(mut self, f: F) -> Self
    where
        F: Fn(&mut HttpResponse, &HttpRequest) -> EndpointResult + Send + Sync + 'static,
    {
        self.sequence.push(Arc::new(f));
        self
    }

    /// Append several units to the sequence, keeping their order.
    pub fn with_handlers(mut self, handlers: impl IntoIterator<Item = EndpointHandlerFn>) -> Self {
        self.sequence.extend(handlers);
        self
    }

    /// Override the router-wide `terminal_success` setting for this endpoint.
    pub fn with_terminal_success(mut self, terminal: bool) -> Self {
        self.terminal_success = Some(terminal);
        self
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn method(&self) -> Option<Method> {
        self.method
    }

    /// Number of units in the sequence.
    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    pub(crate) fn set_method(&mut self, method: Method) {
        self.method = Some(method);
    }

    pub(crate) fn default_terminal_success(&mut self, terminal: bool) {
        self.terminal_success.get_or_insert(terminal);
    }

    /// Run the units in order against one request.
    ///
    /// The first `Err` is written to `rw` and ends the sequence. A unit that
    /// returns `Ok` after writing a response does not end it unless terminal
    /// success is enabled; whatever later units write is appended.
    pub fn handle(&self, rw: &mut HttpResponse, req: &HttpRequest) {
        let terminal_success = self.terminal_success.unwrap_or(false);
        for (step, unit) in self.sequence.iter().enumerate() {
            match unit(rw, req) {
                Ok(()) if terminal_success && rw.is_written() => {
                    debug!("Response for '{}' written at step {step}, ending sequence", self.path);
                    return;
                }
                Ok(()) => {}
                Err(err) => {
                    self.respond_with_error(rw, step, &err);
                    return;
                }
            }
        }
    }

    fn respond_with_error(&self, rw: &mut HttpResponse, step: usize, err: &EndpointError) {
        // Headers are frozen once a status is committed.
        if !rw.is_written() {
            rw.set_header("Content-Type", err.content_type());
        }
        rw.write_header(err.status());
        rw.write(err.message().as_bytes());

        match err.cause() {
            Some(cause) => warn!("Stopping sequence for '{}' at step {step}: {cause}", self.path),
            None => warn!("Stopping sequence for '{}' at step {step} without an underlying cause", self.path),
        }
        warn!(
            "Client receives status {status} with body: {body}",
            status = err.status(),
            body = err.message()
        );
    }

    /// Freeze the endpoint into a single [`HandlerFn`].
    pub fn into_handler(self) -> HandlerFn {
        let endpoint = Arc::new(self);
        Arc::new(move |rw: &mut HttpResponse, req: &HttpRequest| endpoint.handle(rw, req))
    }
}

impl fmt::Debug for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Endpoint")
            .field("path", &self.path)
            .field("method", &self.method)
            .field("units", &self.sequence.len())
            .field("terminal_success", &self.terminal_success)
            .finish()
    }
}
