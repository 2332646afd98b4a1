//! HTTP server setup and lifecycle entry point.
//!
//! # Responsibilities
//! - Build the application router
//! - Spawn the serve loop on its own task
//! - Wire the graceful-shutdown trigger into the serve loop
//! - Delegate ordered shutdown to the lifecycle supervisor

use tokio::net::TcpListener;
use tokio::sync::{broadcast, oneshot};

use crate::config::ServerConfig;
use crate::http::handler;
use crate::lifecycle::supervisor::{self, DrainPolicy, ServerError};

/// HTTP server bundling the router with its drain policy.
pub struct HttpServer {
    router: axum::Router,
    policy: DrainPolicy,
}

impl HttpServer {
    /// Create a new HTTP server from the configuration.
    pub fn new(config: &ServerConfig) -> Self {
        Self {
            router: handler::router(&config.handler),
            policy: DrainPolicy::from(&config.shutdown),
        }
    }

    /// Serve until `cancel` fires, then drain and stop.
    ///
    /// The serve loop runs on its own task so slow handlers never block
    /// cancellation observation. Returns the first genuine error; a serve
    /// error caused by the requested shutdown is not an error.
    pub async fn run(
        self,
        listener: TcpListener,
        cancel: broadcast::Receiver<()>,
    ) -> Result<(), ServerError> {
        let addr = listener.local_addr().map_err(ServerError::Serve)?;
        tracing::info!(address = %addr, "HTTP server starting");

        let (drain_tx, drain_rx) = oneshot::channel();
        let app = self.router.into_make_service();
        let serve = tokio::spawn(async move {
            axum::serve(listener, app)
                // Stop accepting when the trigger fires or its sender
                // goes away; in-flight connections finish first.
                .with_graceful_shutdown(async move {
                    let _ = drain_rx.await;
                })
                .await
        });

        let result = supervisor::supervise(serve, drain_tx, cancel, self.policy).await;

        tracing::info!("HTTP server stopped");
        result
    }
}
