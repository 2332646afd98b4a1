//! Shared utilities for integration testing.

use std::net::SocketAddr;

use hello_server::config::ServerConfig;
use hello_server::http::HttpServer;
use hello_server::lifecycle::{ServerError, Shutdown};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// A server running on an ephemeral loopback port.
pub struct TestServer {
    pub addr: SocketAddr,
    pub shutdown: Shutdown,
    pub task: JoinHandle<Result<(), ServerError>>,
}

impl TestServer {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }
}

/// Start a server with the given config on an OS-assigned port.
pub async fn spawn_server(config: ServerConfig) -> TestServer {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let cancel = shutdown.subscribe();
    let server = HttpServer::new(&config);
    let task = tokio::spawn(async move { server.run(listener, cancel).await });

    TestServer {
        addr,
        shutdown,
        task,
    }
}

/// Config with a short handler delay so tests stay fast.
pub fn fast_config(delay_ms: u64) -> ServerConfig {
    let mut config = ServerConfig::default();
    config.handler.delay_ms = delay_ms;
    config
}
