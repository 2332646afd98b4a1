//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files,
//! and every section defaults so a bare environment still runs.

use serde::{Deserialize, Serialize};

/// Root configuration for the server.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct ServerConfig {
    /// Listener configuration (port).
    pub listener: ListenerConfig,

    /// Greeter handler settings.
    pub handler: HandlerConfig,

    /// Graceful shutdown settings.
    pub shutdown: ShutdownConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Port to bind on all interfaces. Port 0 requests an OS-assigned
    /// ephemeral port.
    pub port: u16,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self { port: 8080 }
    }
}

/// Settings for the greeter handler.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct HandlerConfig {
    /// Artificial delay before responding, in milliseconds.
    pub delay_ms: u64,
}

impl Default for HandlerConfig {
    fn default() -> Self {
        Self { delay_ms: 5_000 }
    }
}

/// Graceful shutdown configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct ShutdownConfig {
    /// Maximum seconds to wait for in-flight requests to drain.
    /// Unset waits indefinitely.
    pub drain_timeout_secs: Option<u64>,

    /// Treat drain failures as fatal instead of only logging them.
    pub escalate_drain_errors: bool,
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}
