//! Network layer subsystem.
//!
//! # Data Flow
//! ```text
//! Configured port
//!     → listener.rs (bind, resolve concrete bound address)
//!     → Hand off to HTTP layer, which owns the listener until shutdown
//! ```
//!
//! # Design Decisions
//! - Bind failures are fatal: no retry, the operator must fix the config
//! - Port 0 requests an OS-assigned ephemeral port; the resolved address
//!   is reported so callers know where the server is reachable

pub mod listener;

pub use listener::{bind, BindError};
