//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (main):
//!     Load config → Init logging → Bind listener → Spawn serve task
//!
//! Shutdown (supervisor.rs):
//!     Signal received → Stop accepting → Drain in-flight → Join serve task
//!
//! Signals (signals.rs):
//!     SIGTERM/SIGINT → Shutdown::trigger → supervisor observes
//! ```
//!
//! # Design Decisions
//! - Ordered shutdown: stop accept, drain, join, classify
//! - Shutdown request is single-shot; repeats are no-ops
//! - Drain deadline is optional config; the default waits indefinitely

pub mod shutdown;
pub mod signals;
pub mod supervisor;

pub use shutdown::{LifecycleState, ServeState, Shutdown};
pub use supervisor::{supervise, DrainPolicy, ServerError, ShutdownError};
