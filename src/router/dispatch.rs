//! The router: registration surface and per-request dispatch.

use log::{info, warn};

use crate::parser::{HttpRequest, Method};
use crate::router::config::RouterConfig;
use crate::router::cors::{apply_cors_headers, handle_preflight};
use crate::router::endpoint::Endpoint;
use crate::router::handler::{EndpointHandlerFn, HandlerFn};
use crate::router::matcher::RouteMatch;
use crate::router::registry::RouteRegistry;
use crate::server::{HttpResponse, StatusCode};

/// Matches requests against registered patterns and runs their handlers.
///
/// Routes are registered through `&mut self`; once the router is handed to
/// an [`HttpServer`](crate::HttpServer) it is shared immutably, so the route
/// table cannot change while requests are being served.
///
/// ```
/// use microroute_rs::{endpoint_fn, succeed_with_message, HttpRequest, HttpVersion, Method, Router, StatusCode};
///
/// let mut router = Router::default();
/// router.get("/hello/{}", [endpoint_fn(|rw, _req| succeed_with_message("hi", rw))]);
///
/// let request = HttpRequest::new(Method::GET, "/hello/world", HttpVersion::Http11, Default::default());
/// let response = router.handle(&request);
/// assert_eq!(response.status, StatusCode::OK);
/// assert_eq!(response.body, b"hi");
/// ```
#[derive(Debug, Default)]
pub struct Router {
    config: RouterConfig,
    registry: RouteRegistry,
}

impl Router {
    pub fn new(config: RouterConfig) -> Self {
        Self {
            config,
            registry: RouteRegistry::new(),
        }
    }

    pub fn config(&self) -> &RouterConfig {
        &self.config
    }

    pub fn registry(&self) -> &RouteRegistry {
        &self.registry
    }

    /// Build a GET endpoint from `handlers` and register it under `path`.
    pub fn get(&mut self, path: impl Into<String>, handlers: impl IntoIterator<Item = EndpointHandlerFn>) -> &mut Self {
        self.with_endpoint(Endpoint::new(path).with_handlers(handlers).with_method(Method::GET))
    }

    /// Build a POST endpoint from `handlers` and register it under `path`.
    pub fn post(&mut self, path: impl Into<String>, handlers: impl IntoIterator<Item = EndpointHandlerFn>) -> &mut Self {
        self.with_endpoint(Endpoint::new(path).with_handlers(handlers).with_method(Method::POST))
    }

    /// Build a PATCH endpoint from `handlers` and register it under `path`.
    pub fn patch(&mut self, path: impl Into<String>, handlers: impl IntoIterator<Item = EndpointHandlerFn>) -> &mut Self {
        self.with_endpoint(Endpoint::new(path).with_handlers(handlers).with_method(Method::PATCH))
    }

    /// Build a DELETE endpoint from `handlers` and register it under `path`.
    pub fn delete(&mut self, path: impl Into<String>, handlers: impl IntoIterator<Item = EndpointHandlerFn>) -> &mut Self {
        self.with_endpoint(Endpoint::new(path).with_handlers(handlers).with_method(Method::DELETE))
    }

    /// Register raw GET handlers, which all run regardless of what they write.
    pub fn get_fn(&mut self, path: impl Into<String>, handlers: impl IntoIterator<Item = HandlerFn>) -> &mut Self {
        self.with_handle_funcs(path, Method::GET, handlers)
    }

    pub fn post_fn(&mut self, path: impl Into<String>, handlers: impl IntoIterator<Item = HandlerFn>) -> &mut Self {
        self.with_handle_funcs(path, Method::POST, handlers)
    }

    pub fn patch_fn(&mut self, path: impl Into<String>, handlers: impl IntoIterator<Item = HandlerFn>) -> &mut Self {
        self.with_handle_funcs(path, Method::PATCH, handlers)
    }

    pub fn delete_fn(&mut self, path: impl Into<String>, handlers: impl IntoIterator<Item = HandlerFn>) -> &mut Self {
        self.with_handle_funcs(path, Method::DELETE, handlers)
    }

    /// Register raw handlers under any method.
    pub fn with_handle_funcs(
        &mut self,
        path: impl Into<String>,
        method: Method,
        handlers: impl IntoIterator<Item = HandlerFn>,
    ) -> &mut Self {
        self.registry.register(method, path, handlers.into_iter().collect());
        self
    }

    /// Register a built endpoint under its own method.
    ///
    /// An endpoint without a method is logged and dropped.
    pub fn with_endpoint(&mut self, mut endpoint: Endpoint) -> &mut Self {
        let Some(method) = endpoint.method() else {
            warn!("Endpoint '{}' has no HTTP method, ignoring it", endpoint.path());
            return self;
        };
        endpoint.default_terminal_success(self.config.terminal_success);
        let path = endpoint.path().to_string();
        self.registry.register(method, path, vec![endpoint.into_handler()]);
        self
    }

    /// Register `endpoint` as a GET endpoint, whatever method it carried.
    pub fn with_get_endpoint(&mut self, endpoint: Endpoint) -> &mut Self {
        self.with_endpoint_as(Method::GET, endpoint)
    }

    pub fn with_post_endpoint(&mut self, endpoint: Endpoint) -> &mut Self {
        self.with_endpoint_as(Method::POST, endpoint)
    }

    pub fn with_patch_endpoint(&mut self, endpoint: Endpoint) -> &mut Self {
        self.with_endpoint_as(Method::PATCH, endpoint)
    }

    pub fn with_delete_endpoint(&mut self, endpoint: Endpoint) -> &mut Self {
        self.with_endpoint_as(Method::DELETE, endpoint)
    }

    fn with_endpoint_as(&mut self, method: Method, mut endpoint: Endpoint) -> &mut Self {
        endpoint.set_method(method);
        self.with_endpoint(endpoint)
    }

    /// Every registered route, one line each; handy for startup logs.
    pub fn handler_names(&self) -> Vec<String> {
        self.registry.names()
    }

    /// Find the route that would serve `method` and `path`.
    pub fn resolve(&self, method: Method, path: &str) -> Option<RouteMatch<'_>> {
        self.registry.resolve(method, path, self.config.match_mode)
    }

    /// Serve one request into `rw`.
    ///
    /// `OPTIONS` gets the preflight response. Anything else gets the CORS
    /// headers, then either its route's handlers in order or an empty 404.
    /// Never fails: every outcome ends up in `rw`.
    pub fn serve_http(&self, rw: &mut HttpResponse, req: &HttpRequest) {
        if req.method == Method::OPTIONS {
            handle_preflight(&self.config.cors, rw);
            return;
        }

        apply_cors_headers(&self.config.cors, rw);

        if self.config.verbose {
            info!("Received request for '{}'", req.path);
        }

        let Some(route) = self.resolve(req.method, &req.path) else {
            if self.config.verbose {
                info!("No handler for [{}] '{}'", req.method, req.path);
            }
            rw.write_header(StatusCode::NOT_FOUND);
            return;
        };

        for handler in route.handlers {
            handler(rw, req);
        }

        if self.config.verbose {
            info!("Handled request for '{}' via {} route '{}'", req.path, route.kind, route.pattern);
        }
    }

    /// Serve one request into a fresh response.
    pub fn handle(&self, req: &HttpRequest) -> HttpResponse {
        let mut response = HttpResponse::default();
        self.serve_http(&mut response, req);
        response
    }
}
