//! Host server for the router.
//!
//! A small tokio TCP server: one task per connection, a cap on concurrent
//! connections, and a graceful drain on Ctrl+C. Each connection carries a
//! single request, which is parsed and handed to the [`Router`](crate::Router).

mod response;
mod config;
mod error;
mod http_server;

pub use response::{HttpResponse, StatusCode};
pub use config::ServerConfig;
pub use error::Error;
pub use http_server::HttpServer;
