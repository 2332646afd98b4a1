//! Graceful-shutdown HTTP demo server.
//!
//! Binds a listener on the configured port, serves a deliberately slow
//! greeter handler, and drains in-flight requests before exiting when the
//! process receives SIGINT or SIGTERM.
//!
//! # Architecture Overview
//!
//! ```text
//!                    ┌───────────────────────────────────────────────┐
//!                    │                 HELLO SERVER                  │
//!                    │                                               │
//!   HTTP request     │  ┌──────────┐   ┌─────────┐   ┌───────────┐  │
//!   ─────────────────┼─▶│   net    │──▶│  http   │──▶│  greeter  │  │
//!                    │  │ listener │   │ server  │   │  handler  │  │
//!                    │  └──────────┘   └────┬────┘   └───────────┘  │
//!                    │                      │                       │
//!   SIGINT / SIGTERM │  ┌──────────┐   ┌────▼────────────────────┐  │
//!   ─────────────────┼─▶│ signals  │──▶│  lifecycle supervisor   │  │
//!                    │  └──────────┘   │  stop accept → drain →  │  │
//!                    │                 │  join → classify errors │  │
//!                    │                 └─────────────────────────┘  │
//!                    │  ┌─────────────────────────────────────────┐ │
//!                    │  │   config            observability       │ │
//!                    │  └─────────────────────────────────────────┘ │
//!                    └───────────────────────────────────────────────┘
//! ```

use hello_server::config::loader;
use hello_server::http::HttpServer;
use hello_server::lifecycle::{signals, Shutdown};
use hello_server::net::listener;
use hello_server::observability::logging;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Configuration failures abort before anything is bound.
    let config = loader::load()?;

    logging::init(&config.observability);

    tracing::info!(
        port = config.listener.port,
        handler_delay_ms = config.handler.delay_ms,
        "hello-server v0.1.0 starting"
    );

    let (tcp, addr) = listener::bind(&config.listener).await?;
    tracing::info!(url = %format!("http://{addr}"), "Ready for requests");

    // OS signals are translated into the explicit shutdown trigger here;
    // the server itself never touches signal delivery.
    let shutdown = Shutdown::new();
    let cancel = shutdown.subscribe();
    tokio::spawn(async move {
        signals::shutdown_signal().await;
        shutdown.trigger();
    });

    let server = HttpServer::new(&config);
    server.run(tcp, cancel).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
