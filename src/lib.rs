//! Hello Server Library

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod net;
pub mod observability;

pub use config::ServerConfig;
pub use http::HttpServer;
pub use lifecycle::{ServerError, Shutdown};
