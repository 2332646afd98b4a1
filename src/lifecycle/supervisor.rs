//! Ordered shutdown supervision for the serve loop.
//!
//! # Data Flow
//! ```text
//! serve task (accept → dispatch) runs concurrently
//!     supervisor waits: cancellation signal OR serve task exit
//!     on cancellation → fire drain trigger (listener stops accepting)
//!         → in-flight handlers finish (optional deadline)
//!         → join serve task, classify its result by cause
//!         → first genuine error wins; drain errors are logged
//! ```
//!
//! # Design Decisions
//! - The drain trigger is a consumed oneshot sender: a second shutdown
//!   request is impossible by construction
//! - Serve errors are classified by cause (was shutdown requested?), not
//!   by string matching; an error after the trigger is drain noise
//! - Drain failures never outrank a genuine serve error and only turn
//!   fatal when the policy says so

use std::io;
use std::time::Duration;

use thiserror::Error;
use tokio::sync::{broadcast, oneshot};
use tokio::task::{JoinError, JoinHandle};

use crate::config::ShutdownConfig;
use crate::lifecycle::shutdown::{LifecycleState, ServeState};

/// Fatal server error surfaced to the caller of `HttpServer::run`.
#[derive(Debug, Error)]
pub enum ServerError {
    /// Transport-level failure in the serve loop, unrelated to shutdown.
    #[error("serve loop failed: {0}")]
    Serve(#[source] io::Error),

    /// The serve task panicked or was aborted from outside.
    #[error("serve task failed: {0}")]
    ServeTask(#[source] JoinError),

    /// Drain failed and the policy escalates drain errors.
    #[error("graceful shutdown failed: {0}")]
    Shutdown(#[from] ShutdownError),
}

/// Error observed while draining; logged, and fatal only by policy.
#[derive(Debug, Error)]
pub enum ShutdownError {
    /// The serve loop reported an error after shutdown was requested.
    #[error("serve loop errored during drain: {0}")]
    Drain(#[source] io::Error),

    /// In-flight work did not finish within the drain deadline.
    #[error("drain did not complete within {0:?}")]
    DrainTimeout(Duration),

    /// The serve task panicked while draining.
    #[error("serve task failed during drain: {0}")]
    Join(#[source] JoinError),
}

/// How long to wait for in-flight work, and whether drain failure is fatal.
#[derive(Debug, Clone, Copy)]
pub struct DrainPolicy {
    /// Drain deadline; `None` waits indefinitely.
    pub timeout: Option<Duration>,
    /// Surface drain errors as `ServerError::Shutdown` instead of logging.
    pub escalate: bool,
}

impl From<&ShutdownConfig> for DrainPolicy {
    fn from(config: &ShutdownConfig) -> Self {
        Self {
            timeout: config.drain_timeout_secs.map(Duration::from_secs),
            escalate: config.escalate_drain_errors,
        }
    }
}

/// Drive a spawned serve task through cancellation and ordered shutdown.
///
/// Waits for `cancel` (or the serve task ending on its own), then fires
/// `drain` so the listener stops accepting, lets in-flight handlers finish
/// and joins the serve task. See the module docs for the error policy.
pub async fn supervise(
    mut serve: JoinHandle<io::Result<()>>,
    drain: oneshot::Sender<()>,
    mut cancel: broadcast::Receiver<()>,
    policy: DrainPolicy,
) -> Result<(), ServerError> {
    let mut state = LifecycleState::new();
    state.advance(ServeState::Running);

    tokio::select! {
        // Any receive outcome counts as cancellation: a message, a lagged
        // overwrite from repeated triggers, or the sender going away.
        _ = cancel.recv() => {
            tracing::info!("Shutdown signal received");
        }
        res = &mut serve => {
            // Serve loop ended with no shutdown requested: its result is
            // the coordinator's result.
            return match res {
                Ok(Ok(())) => Ok(()),
                Ok(Err(err)) => Err(ServerError::Serve(err)),
                Err(err) => Err(ServerError::ServeTask(err)),
            };
        }
    }

    state.advance(ServeState::ShuttingDown);
    let _ = drain.send(());

    let drained = match policy.timeout {
        Some(limit) => match tokio::time::timeout(limit, &mut serve).await {
            Ok(join) => classify_drain(join),
            Err(_) => {
                serve.abort();
                Err(ShutdownError::DrainTimeout(limit))
            }
        },
        None => classify_drain((&mut serve).await),
    };

    state.advance(ServeState::Stopped);

    match drained {
        Ok(()) => Ok(()),
        Err(err) if policy.escalate => Err(ServerError::Shutdown(err)),
        Err(err) => {
            tracing::warn!(error = %err, "Shutdown error suppressed");
            Ok(())
        }
    }
}

/// Classify the joined serve result after a shutdown request.
///
/// A clean exit is the expected terminal condition. Everything else
/// happened because, or while, the listener was being closed, so it is a
/// `ShutdownError` and never outranks a genuine serve error.
fn classify_drain(join: Result<io::Result<()>, JoinError>) -> Result<(), ShutdownError> {
    match join {
        Ok(Ok(())) => Ok(()),
        Ok(Err(err)) => Err(ShutdownError::Drain(err)),
        Err(err) => Err(ShutdownError::Join(err)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::future;

    fn wait_forever() -> DrainPolicy {
        DrainPolicy {
            timeout: None,
            escalate: false,
        }
    }

    fn transport_fault() -> io::Error {
        io::Error::new(io::ErrorKind::ConnectionReset, "transport fault")
    }

    /// A serve task that runs until the drain trigger, then returns `result`.
    fn draining_serve(
        result: io::Result<()>,
    ) -> (JoinHandle<io::Result<()>>, oneshot::Sender<()>) {
        let (drain_tx, drain_rx) = oneshot::channel::<()>();
        let handle = tokio::spawn(async move {
            let _ = drain_rx.await;
            result
        });
        (handle, drain_tx)
    }

    #[tokio::test]
    async fn serve_fault_without_shutdown_is_returned() {
        let (drain_tx, _drain_rx) = oneshot::channel::<()>();
        let serve = tokio::spawn(async move { Err(transport_fault()) });
        let (_cancel_tx, cancel) = broadcast::channel::<()>(1);

        let err = supervise(serve, drain_tx, cancel, wait_forever())
            .await
            .unwrap_err();
        assert!(matches!(err, ServerError::Serve(_)));
    }

    #[tokio::test]
    async fn unexpected_clean_exit_is_ok() {
        let (drain_tx, _drain_rx) = oneshot::channel::<()>();
        let serve = tokio::spawn(async move { Ok(()) });
        let (_cancel_tx, cancel) = broadcast::channel::<()>(1);

        let result = supervise(serve, drain_tx, cancel, wait_forever()).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn clean_drain_returns_ok() {
        let (serve, drain_tx) = draining_serve(Ok(()));
        let (cancel_tx, cancel) = broadcast::channel::<()>(1);
        cancel_tx.send(()).unwrap();

        let result = supervise(serve, drain_tx, cancel, wait_forever()).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn shutdown_induced_fault_is_suppressed() {
        // Same failure as serve_fault_without_shutdown_is_returned, but
        // after the shutdown request it is drain noise, not a result.
        let (serve, drain_tx) = draining_serve(Err(transport_fault()));
        let (cancel_tx, cancel) = broadcast::channel::<()>(1);
        cancel_tx.send(()).unwrap();

        let result = supervise(serve, drain_tx, cancel, wait_forever()).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn drain_timeout_is_suppressed_by_default() {
        let (drain_tx, drain_rx) = oneshot::channel::<()>();
        let serve: JoinHandle<io::Result<()>> = tokio::spawn(async move {
            let _ = drain_rx.await;
            future::pending::<io::Result<()>>().await
        });
        let (cancel_tx, cancel) = broadcast::channel::<()>(1);
        cancel_tx.send(()).unwrap();

        let policy = DrainPolicy {
            timeout: Some(Duration::from_millis(50)),
            escalate: false,
        };
        let result = supervise(serve, drain_tx, cancel, policy).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn drain_timeout_escalates_when_configured() {
        let (drain_tx, drain_rx) = oneshot::channel::<()>();
        let serve: JoinHandle<io::Result<()>> = tokio::spawn(async move {
            let _ = drain_rx.await;
            future::pending::<io::Result<()>>().await
        });
        let (cancel_tx, cancel) = broadcast::channel::<()>(1);
        cancel_tx.send(()).unwrap();

        let policy = DrainPolicy {
            timeout: Some(Duration::from_millis(50)),
            escalate: true,
        };
        let err = supervise(serve, drain_tx, cancel, policy).await.unwrap_err();
        assert!(matches!(
            err,
            ServerError::Shutdown(ShutdownError::DrainTimeout(_))
        ));
    }

    #[test]
    fn policy_from_config() {
        let config = ShutdownConfig {
            drain_timeout_secs: Some(30),
            escalate_drain_errors: true,
        };
        let policy = DrainPolicy::from(&config);
        assert_eq!(policy.timeout, Some(Duration::from_secs(30)));
        assert!(policy.escalate);
    }
}
