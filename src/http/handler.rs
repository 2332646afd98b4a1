//! The slow greeter handler.
//!
//! # Responsibilities
//! - Simulate a slow request with a fixed delay
//! - Echo the request path back in the response body

use std::time::Duration;

use axum::extract::State;
use axum::http::Uri;
use axum::response::Html;
use axum::routing::any;
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::config::HandlerConfig;

/// Read-only state handed to each greeter invocation.
#[derive(Debug, Clone)]
pub struct GreeterState {
    /// Artificial delay applied before responding.
    pub delay: Duration,
}

/// Build the application router: every path greets, after the delay.
pub fn router(config: &HandlerConfig) -> Router {
    let state = GreeterState {
        delay: Duration::from_millis(config.delay_ms),
    };

    Router::new()
        .route("/", any(greet))
        .route("/{*path}", any(greet))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

/// Wait the configured delay, then greet whoever the path names.
///
/// `GET /world` responds with `<h1>Hello again, world!</h1>`.
pub async fn greet(State(state): State<GreeterState>, uri: Uri) -> Html<String> {
    tokio::time::sleep(state.delay).await;

    let path = uri.path();
    let name = path.strip_prefix('/').unwrap_or(path);
    Html(format!("<h1>Hello again, {name}!</h1>"))
}
