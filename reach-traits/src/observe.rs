//! Observation helpers bridging the live sequences to UI state.
//!
//! Two consumption shapes exist per sequence:
//!
//! - plain stream access: [`ConnectivityMonitor::status_changes`] /
//!   [`ConnectivityMonitor::transport_changes`] for event consumers that
//!   drive their own loop;
//! - [`StateCell`]: a watch-backed cell that starts from a fixed initial
//!   value and mirrors stream emissions for the lifetime of a cancellation
//!   scope. UI frameworks read the cell (or hold its watch receiver) and
//!   re-render on change; when the UI scope ends, cancelling the token
//!   detaches the mirror task and, through it, the underlying subscription.

use futures::future::Either;

use reach_async::sync::{watch, CancellationToken};
use reach_async::task;

use crate::monitor::{ConnectivityMonitor, ConnectivityStream};
use crate::platform::PlatformSendSync;
use crate::status::{ReachabilityStatus, TransportType};

/// Observable cell mirroring a connectivity stream.
pub struct StateCell<T> {
    rx: watch::Receiver<T>,
}

impl<T> StateCell<T>
where
    T: Clone + PartialEq + PlatformSendSync + 'static,
{
    /// Starts a mirror task feeding the cell from `stream`.
    ///
    /// The cell holds `initial` until the stream's first emission (which is
    /// the state current at subscribe time, so the window is short). The
    /// mirror task runs until `scope` is cancelled, the stream ends, or the
    /// cell and all its watch receivers are dropped, whichever comes first.
    /// Ending the task drops the stream, which releases the platform
    /// subscription behind it.
    pub fn bind<S>(initial: T, mut stream: S, scope: CancellationToken) -> Self
    where
        S: ConnectivityStream<T> + 'static,
    {
        let (tx, rx) = watch::channel(initial);
        task::spawn(async move {
            loop {
                let next = stream.next();
                futures::pin_mut!(next);
                let cancelled = scope.cancelled();
                futures::pin_mut!(cancelled);
                match futures::future::select(cancelled, next).await {
                    Either::Left(_) => break,
                    Either::Right((Some(value), _)) => {
                        if tx.send(value).is_err() {
                            break;
                        }
                    }
                    Either::Right((None, _)) => break,
                }
            }
        });
        Self { rx }
    }

    /// Returns the current value.
    pub fn get(&self) -> T {
        self.rx.borrow().clone()
    }

    /// Returns a watch receiver for change notifications.
    pub fn watch(&self) -> watch::Receiver<T> {
        self.rx.clone()
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for StateCell<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StateCell")
            .field("value", &*self.rx.borrow())
            .finish()
    }
}

/// Builds a reachability cell over `monitor`, starting from `Unreachable`.
pub async fn reachability_cell<M>(
    monitor: &M,
    scope: CancellationToken,
) -> StateCell<ReachabilityStatus>
where
    M: ConnectivityMonitor + ?Sized,
{
    let stream = monitor.status_changes().await;
    StateCell::bind(ReachabilityStatus::Unreachable, stream, scope)
}

/// Builds a transport-type cell over `monitor`, starting from `Unknown`.
pub async fn transport_cell<M>(monitor: &M, scope: CancellationToken) -> StateCell<TransportType>
where
    M: ConnectivityMonitor + ?Sized,
{
    let stream = monitor.transport_changes().await;
    StateCell::bind(TransportType::Unknown, stream, scope)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::monitor::ChannelStream;
    use std::time::Duration;

    async fn wait_for<T, F>(cell: &StateCell<T>, predicate: F)
    where
        T: Clone + PartialEq + Send + Sync + std::fmt::Debug + 'static,
        F: Fn(&T) -> bool,
    {
        tokio::time::timeout(Duration::from_secs(1), async {
            while !predicate(&cell.get()) {
                tokio::task::yield_now().await;
            }
        })
        .await
        .expect("cell never reached expected value");
    }

    #[tokio::test]
    async fn test_cell_starts_at_initial_value() {
        let (_tx, stream) = ChannelStream::<ReachabilityStatus>::channel();
        let cell = StateCell::bind(
            ReachabilityStatus::Unreachable,
            stream,
            CancellationToken::new(),
        );
        assert_eq!(cell.get(), ReachabilityStatus::Unreachable);
    }

    #[tokio::test]
    async fn test_cell_mirrors_emissions() {
        let (tx, stream) = ChannelStream::channel();
        let cell = StateCell::bind(
            ReachabilityStatus::Unreachable,
            stream,
            CancellationToken::new(),
        );

        tx.unbounded_send(ReachabilityStatus::Reachable).unwrap();
        wait_for(&cell, |v| *v == ReachabilityStatus::Reachable).await;
    }

    #[tokio::test]
    async fn test_cancelled_scope_stops_mirroring() {
        let (tx, stream) = ChannelStream::channel();
        let scope = CancellationToken::new();
        let cell = StateCell::bind(TransportType::Unknown, stream, scope.clone());

        tx.unbounded_send(TransportType::Wifi).unwrap();
        wait_for(&cell, |v| *v == TransportType::Wifi).await;

        scope.cancel();
        tokio::time::sleep(Duration::from_millis(20)).await;

        // Cancellation made the mirror task drop the stream, closing the
        // channel: nothing sent afterwards can reach the cell.
        assert!(tx.unbounded_send(TransportType::Cellular).is_err());
        assert_eq!(cell.get(), TransportType::Wifi);
    }

    #[tokio::test]
    async fn test_watch_receiver_sees_changes() {
        let (tx, stream) = ChannelStream::channel();
        let cell = StateCell::bind(
            ReachabilityStatus::Unreachable,
            stream,
            CancellationToken::new(),
        );
        let mut watcher = cell.watch();

        tx.unbounded_send(ReachabilityStatus::Reachable).unwrap();
        tokio::time::timeout(Duration::from_secs(1), watcher.changed())
            .await
            .expect("no change notification")
            .expect("watch channel closed");
        assert_eq!(*watcher.borrow(), ReachabilityStatus::Reachable);
    }
}
