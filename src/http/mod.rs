//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (serve loop on its own task, drain trigger wiring)
//!     → handler.rs (fixed delay, then greet the request path)
//!     → Response to client
//! ```

pub mod handler;
pub mod server;

pub use server::HttpServer;
