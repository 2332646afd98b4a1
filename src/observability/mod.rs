//! Observability subsystem.
//!
//! # Design Decisions
//! - Structured logging through `tracing`; per-request logs come from the
//!   `tower-http` trace layer
//! - Log level comes from config; `RUST_LOG` wins when set

pub mod logging;
