//! TCP listener acquisition.
//!
//! # Responsibilities
//! - Bind to the configured port on all interfaces
//! - Resolve the concrete bound address (port 0 is assigned by the OS)
//! - Fail fast on bind errors

use std::net::SocketAddr;

use thiserror::Error;
use tokio::net::TcpListener;

use crate::config::ListenerConfig;

/// Error type for listener acquisition.
#[derive(Debug, Error)]
pub enum BindError {
    /// The port could not be bound (address in use, permission denied, ...).
    #[error("failed to bind port {port}: {source}")]
    Bind {
        port: u16,
        #[source]
        source: std::io::Error,
    },

    /// The bound address could not be resolved.
    #[error("failed to resolve bound address: {0}")]
    Resolve(#[source] std::io::Error),
}

/// Bind a listener for the configured port and resolve its address.
///
/// The resolved address matters when the config asks for port 0: the OS
/// picks the port only at bind time.
pub async fn bind(config: &ListenerConfig) -> Result<(TcpListener, SocketAddr), BindError> {
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| BindError::Bind {
            port: config.port,
            source,
        })?;

    let local_addr = listener.local_addr().map_err(BindError::Resolve)?;

    tracing::info!(address = %local_addr, "Listener bound");

    Ok((listener, local_addr))
}
