//! Shutdown coordination and serve-lifecycle state.

use tokio::sync::broadcast;

/// Coordinator for graceful shutdown.
///
/// Provides a broadcast channel that all long-running tasks can subscribe
/// to. Triggering more than once is harmless, and dropping the coordinator
/// also reads as a shutdown request on the subscriber side.
pub struct Shutdown {
    /// Broadcast channel sender.
    tx: broadcast::Sender<()>,
}

impl Shutdown {
    /// Create a new shutdown coordinator.
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(1);
        Self { tx }
    }

    /// Subscribe to the shutdown signal.
    pub fn subscribe(&self) -> broadcast::Receiver<()> {
        self.tx.subscribe()
    }

    /// Trigger the shutdown signal.
    pub fn trigger(&self) {
        let _ = self.tx.send(());
    }

    /// Get the number of active subscribers (tasks still running).
    pub fn receiver_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl Default for Shutdown {
    fn default() -> Self {
        Self::new()
    }
}

/// Where a server handle is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServeState {
    /// Handle exists, serve loop not started.
    Created,
    /// Serve loop is accepting and dispatching connections.
    Running,
    /// Shutdown requested: no new connections, in-flight work draining.
    ShuttingDown,
    /// Drain complete and serve task joined.
    Stopped,
}

impl ServeState {
    /// Whether `next` is a legal successor of this state.
    pub fn can_advance_to(self, next: ServeState) -> bool {
        matches!(
            (self, next),
            (ServeState::Created, ServeState::Running)
                | (ServeState::Running, ServeState::ShuttingDown)
                | (ServeState::ShuttingDown, ServeState::Stopped)
        )
    }
}

/// Tracks lifecycle state for one server handle.
///
/// Owned and mutated exclusively by the supervisor; handler tasks never
/// see it.
#[derive(Debug)]
pub struct LifecycleState {
    current: ServeState,
}

impl LifecycleState {
    /// Start in `Created`.
    pub fn new() -> Self {
        Self {
            current: ServeState::Created,
        }
    }

    /// Current state.
    pub fn current(&self) -> ServeState {
        self.current
    }

    /// Advance to `next` if the transition is legal.
    ///
    /// Returns false and leaves the state untouched otherwise, which makes
    /// a repeated shutdown request a no-op.
    pub fn advance(&mut self, next: ServeState) -> bool {
        if !self.current.can_advance_to(next) {
            tracing::trace!(from = ?self.current, to = ?next, "Ignoring lifecycle transition");
            return false;
        }
        tracing::debug!(from = ?self.current, to = ?next, "Lifecycle transition");
        self.current = next;
        true
    }
}

impl Default for LifecycleState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::broadcast::error::RecvError;

    #[test]
    fn legal_chain_advances() {
        let mut state = LifecycleState::new();
        assert!(state.advance(ServeState::Running));
        assert!(state.advance(ServeState::ShuttingDown));
        assert!(state.advance(ServeState::Stopped));
        assert_eq!(state.current(), ServeState::Stopped);
    }

    #[test]
    fn shutdown_request_is_single_shot() {
        let mut state = LifecycleState::new();
        state.advance(ServeState::Running);
        assert!(state.advance(ServeState::ShuttingDown));
        assert!(!state.advance(ServeState::ShuttingDown));
        assert_eq!(state.current(), ServeState::ShuttingDown);
    }

    #[test]
    fn no_transition_out_of_stopped() {
        let mut state = LifecycleState::new();
        state.advance(ServeState::Running);
        state.advance(ServeState::ShuttingDown);
        state.advance(ServeState::Stopped);
        assert!(!state.advance(ServeState::Running));
        assert!(!state.advance(ServeState::ShuttingDown));
        assert_eq!(state.current(), ServeState::Stopped);
    }

    #[test]
    fn skipping_states_is_rejected() {
        let mut state = LifecycleState::new();
        assert!(!state.advance(ServeState::Stopped));
        assert!(!state.advance(ServeState::ShuttingDown));
        assert_eq!(state.current(), ServeState::Created);
    }

    #[tokio::test]
    async fn trigger_reaches_every_subscriber() {
        let shutdown = Shutdown::new();
        let mut a = shutdown.subscribe();
        let mut b = shutdown.subscribe();
        shutdown.trigger();
        assert!(a.recv().await.is_ok());
        assert!(b.recv().await.is_ok());
    }

    #[tokio::test]
    async fn double_trigger_is_harmless() {
        let shutdown = Shutdown::new();
        let mut rx = shutdown.subscribe();
        shutdown.trigger();
        shutdown.trigger();
        // A lagged receive still counts as having observed the signal.
        assert!(matches!(rx.recv().await, Ok(()) | Err(RecvError::Lagged(_))));
    }
}
