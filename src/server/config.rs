//! Server configuration.

use std::net::{Ipv4Addr, SocketAddr};
use serde::Deserialize;

/// HTTP server configuration.
///
/// Missing fields fall back to their defaults when deserialized, so a config
/// file only needs to name what it changes.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// The address to bind to.
    pub addr: SocketAddr,
    /// The maximum number of concurrent connections.
    pub max_connections: usize,
    /// The read buffer size.
    pub read_buffer_size: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from((Ipv4Addr::LOCALHOST, 8080)),
            max_connections: 1024,
            read_buffer_size: 8192,
        }
    }
}
