//! HTTP server implementation.

use std::net::SocketAddr;
use std::sync::Arc;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::{mpsc, Semaphore};
use tokio::task::JoinSet;
use tokio::signal;
use log::{debug, info, warn, error};

use crate::parser::parse_request;
use crate::router::{apply_cors_headers, Router};
use crate::server::config::ServerConfig;
use crate::server::error::Error;
use crate::server::response::{HttpResponse, StatusCode};

/// Serves a [`Router`] over TCP.
///
/// The router is moved in at construction and only ever read afterwards, so
/// every connection task shares the same route table without locking.
pub struct HttpServer {
    /// The server configuration.
    pub config: ServerConfig,
    router: Arc<Router>,
}

impl HttpServer {
    /// Create a server that dispatches every request through `router`.
    pub fn new(config: ServerConfig, router: Router) -> Self {
        Self {
            config,
            router: Arc::new(router),
        }
    }

    /// The router this server dispatches to.
    pub fn router(&self) -> &Arc<Router> {
        &self.router
    }

    /// Log the banner and the route table.
    fn display_server_info(&self) {
        let banner = include_str!("../banner.txt");
        info!("\n{banner}");

        let names = self.router.handler_names();
        if names.is_empty() {
            warn!("No routes registered; every request will receive a 404");
            return;
        }
        info!("Registered endpoints:");
        for name in names {
            info!("  {name}");
        }
    }

    async fn setup_listener(&self) -> Result<TcpListener, Error> {
        let listener = TcpListener::bind(&self.config.addr).await?;
        info!("Server listening on http://{addr}", addr = self.config.addr);
        Ok(listener)
    }

    /// Set up a Ctrl+C handler for graceful shutdown.
    fn setup_ctrl_c_handler(shutdown_tx: mpsc::Sender<()>, tasks: &mut JoinSet<()>) {
        tasks.spawn(async move {
            match signal::ctrl_c().await {
                Ok(()) => {
                    info!("Received Ctrl+C, initiating graceful shutdown");
                    let _ = shutdown_tx.send(()).await;
                }
                Err(e) => {
                    error!("Error setting up Ctrl+C handler: {e}");
                }
            }
        });
    }

    /// Take a connection slot and spawn a task for the connection, or turn it away with a 503.
    async fn handle_new_connection(
        mut socket: TcpStream,
        addr: SocketAddr,
        semaphore: Arc<Semaphore>,
        router: Arc<Router>,
        read_buffer_size: usize,
        tasks: &mut JoinSet<()>,
    ) {
        let permit = match semaphore.try_acquire_owned() {
            Ok(permit) => permit,
            Err(_) => {
                warn!("Connection limit reached, rejecting connection from {addr}");
                let mut response = HttpResponse::new(StatusCode::SERVICE_UNAVAILABLE)
                    .with_content_type("text/plain")
                    .with_body_string("Server is at capacity, please try again later");
                apply_cors_headers(&router.config().cors, &mut response);
                let _ = socket.write_all(&response.to_bytes()).await;
                return;
            }
        };

        tasks.spawn(async move {
            // Held until the connection is done.
            let _permit = permit;

            if let Err(e) = Self::handle_connection(&mut socket, &router, read_buffer_size).await {
                error!("Error handling connection from {addr}: {e}");
            }
        });
    }

    /// Decide whether an accept error should stop the server.
    async fn handle_accept_error(e: std::io::Error) -> bool {
        error!("Error accepting connection: {e}");

        if e.kind() == std::io::ErrorKind::BrokenPipe {
            error!("Critical error accepting connection, shutting down");
            return true;
        }

        tokio::time::sleep(tokio::time::Duration::from_millis(100)).await;
        false
    }

    /// Wait up to 30 seconds for in-flight connections to finish.
    async fn perform_shutdown(tasks: &mut JoinSet<()>) {
        info!("Waiting for {len} active connections to complete...", len = tasks.len());
        let shutdown_timeout = tokio::time::Duration::from_secs(30);
        let drained = tokio::time::timeout(shutdown_timeout, async {
            while let Some(res) = tasks.join_next().await {
                if let Err(e) = res {
                    error!("Task failed during shutdown: {e}");
                }
            }
        })
        .await;

        if drained.is_err() {
            warn!("Shutdown timed out with {len} connections still open", len = tasks.len());
        }
        info!("Server shutdown complete");
    }

    /// Start the server and serve until Ctrl+C.
    pub async fn start(&self) -> Result<(), Error> {
        self.display_server_info();

        let listener = self.setup_listener().await?;
        let semaphore = Arc::new(Semaphore::new(self.config.max_connections));
        let (shutdown_tx, mut shutdown_rx) = mpsc::channel::<()>(1);
        let mut tasks = JoinSet::new();

        Self::setup_ctrl_c_handler(shutdown_tx, &mut tasks);

        loop {
            tokio::select! {
                _ = shutdown_rx.recv() => {
                    info!("Shutting down server...");
                    break;
                }

                accept_result = listener.accept() => {
                    match accept_result {
                        Ok((socket, addr)) => {
                            debug!("Accepted connection from {addr}");
                            Self::handle_new_connection(
                                socket,
                                addr,
                                Arc::clone(&semaphore),
                                Arc::clone(&self.router),
                                self.config.read_buffer_size,
                                &mut tasks,
                            ).await;
                        },
                        Err(e) => {
                            if Self::handle_accept_error(e).await {
                                break;
                            }
                        }
                    }
                }
            }
        }

        Self::perform_shutdown(&mut tasks).await;

        Ok(())
    }

    /// Read one request from `socket`, route it, and write the response.
    ///
    /// Unparseable input gets a 400 carrying the router's CORS headers and is
    /// reported as an error. Everything else, including unknown methods,
    /// unmatched routes and handler failures, is answered by the router and
    /// counts as success.
    pub async fn handle_connection(
        socket: &mut (impl AsyncRead + AsyncWrite + Unpin),
        router: &Router,
        read_buffer_size: usize,
    ) -> Result<(), Error> {
        let mut buf = vec![0; read_buffer_size];

        let n = socket.read(&mut buf).await?;
        if n == 0 {
            return Ok(());
        }

        let request = match parse_request(&buf[..n]) {
            Ok(req) => req,
            Err(e) => {
                let mut response = HttpResponse::new(StatusCode::BAD_REQUEST)
                    .with_content_type("text/plain")
                    .with_body_string(format!("Error parsing request: {e}"));
                apply_cors_headers(&router.config().cors, &mut response);
                socket.write_all(&response.to_bytes()).await?;
                return Err(Error::ParseError(e));
            }
        };

        let response = router.handle(&request);
        debug!("{} {} -> {}", request.method, request.path, response.status);

        socket.write_all(&response.to_bytes()).await?;
        socket.flush().await?;

        Ok(())
    }
}
