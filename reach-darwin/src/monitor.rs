//! Path-monitor connectivity monitor with reference-counted activation.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, Weak};

use async_trait::async_trait;
use tracing::{debug, warn};

use reach_traits::monitor::{BoxedStream, ChannelStream, ConnectivityMonitor};
use reach_traits::status::{ReachabilityStatus, TransportType};

use crate::path::{ActivePathMonitor, PathMonitorFactory, PathSnapshot};

/// Fan-out target registered per subscription (not per stream type); each
/// derives its own typed value from the shared snapshot.
type Listener = Box<dyn Fn(PathSnapshot) + Send + Sync>;

struct Inner {
    active: Option<Box<dyn ActivePathMonitor>>,
    listeners: HashMap<u64, Listener>,
    next_id: u64,
}

struct Shared {
    factory: Arc<dyn PathMonitorFactory>,
    inner: Mutex<Inner>,
}

impl Shared {
    fn fan_out(&self, snapshot: PathSnapshot) {
        let inner = self.inner.lock().unwrap();
        for listener in inner.listeners.values() {
            listener(snapshot);
        }
    }
}

/// Event-driven monitor over a single shared native path monitor.
///
/// Activation is reference-counted across both streams: the native monitor
/// exists exactly while at least one subscription (of either type) is alive.
/// All mutation of the listener registry goes through one mutex, so
/// concurrent subscribe/detach from different lifecycles is safe.
pub struct PathNetworkMonitor {
    shared: Arc<Shared>,
}

impl PathNetworkMonitor {
    /// Creates a monitor over the injected native factory.
    pub fn new(factory: Arc<dyn PathMonitorFactory>) -> Self {
        Self {
            shared: Arc::new(Shared {
                factory,
                inner: Mutex::new(Inner {
                    active: None,
                    listeners: HashMap::new(),
                    next_id: 0,
                }),
            }),
        }
    }

    fn subscribe<T, F>(&self, derive: F) -> BoxedStream<T>
    where
        T: Clone + PartialEq + Send + Sync + 'static,
        F: Fn(PathSnapshot) -> T + Send + Sync + 'static,
    {
        let (tx, mut stream) = ChannelStream::channel();
        let mut inner = self.shared.inner.lock().unwrap();

        if inner.active.is_none() {
            // First subscriber of either stream: bring up the native monitor.
            // The handler holds a weak reference so the native side never
            // keeps the registry alive on its own.
            let weak: Weak<Shared> = Arc::downgrade(&self.shared);
            match self.shared.factory.start(Box::new(move |snapshot| {
                if let Some(shared) = weak.upgrade() {
                    shared.fan_out(snapshot);
                }
            })) {
                Ok(active) => {
                    debug!("path monitor started");
                    inner.active = Some(active);
                }
                Err(err) => {
                    drop(inner);
                    warn!(error = %err, "path monitor unavailable, reporting fallback");
                    return Box::new(ChannelStream::steady(derive(PathSnapshot::default())));
                }
            }
        }

        // First value: derived from the snapshot current at subscribe time.
        let snapshot = inner
            .active
            .as_ref()
            .map(|monitor| monitor.current())
            .unwrap_or_default();
        let _ = tx.unbounded_send(derive(snapshot));

        let id = inner.next_id;
        inner.next_id += 1;
        inner.listeners.insert(
            id,
            Box::new(move |snapshot| {
                let _ = tx.unbounded_send(derive(snapshot));
            }),
        );
        drop(inner);

        stream.attach_guard(Box::new(ListenerGuard {
            shared: Arc::clone(&self.shared),
            id,
        }));
        Box::new(stream)
    }

    fn current_snapshot(&self) -> PathSnapshot {
        let inner = self.shared.inner.lock().unwrap();
        if let Some(monitor) = inner.active.as_ref() {
            return monitor.current();
        }
        drop(inner);

        // No subscription is active; spin up a transient monitor just long
        // enough to read the snapshot.
        match self.shared.factory.start(Box::new(|_| {})) {
            Ok(monitor) => monitor.current(),
            Err(err) => {
                warn!(error = %err, "path monitor unavailable for one-shot read");
                PathSnapshot::default()
            }
        }
    }
}

#[async_trait]
impl ConnectivityMonitor for PathNetworkMonitor {
    async fn current_status(&self) -> ReachabilityStatus {
        self.current_snapshot().status()
    }

    async fn current_transport(&self) -> TransportType {
        self.current_snapshot().transport()
    }

    async fn status_changes(&self) -> BoxedStream<ReachabilityStatus> {
        self.subscribe(PathSnapshot::status)
    }

    async fn transport_changes(&self) -> BoxedStream<TransportType> {
        self.subscribe(PathSnapshot::transport)
    }
}

/// Removes one listener; tears down the native monitor after the last one.
struct ListenerGuard {
    shared: Arc<Shared>,
    id: u64,
}

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        let mut inner = self.shared.inner.lock().unwrap();
        inner.listeners.remove(&self.id);
        let teardown = if inner.listeners.is_empty() {
            inner.active.take()
        } else {
            None
        };
        // Cancel outside the lock so a native cancel callback cannot
        // re-enter the registry.
        drop(inner);
        if teardown.is_some() {
            debug!("last subscriber detached, path monitor stopped");
        }
        drop(teardown);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reach_traits::error::MonitorError;
    use reach_traits::monitor::ConnectivityStream;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    use crate::path::PathUpdateHandler;

    #[derive(Default)]
    struct FakeFactoryState {
        handler: Mutex<Option<Arc<PathUpdateHandler>>>,
        snapshot: Mutex<PathSnapshot>,
        started: AtomicUsize,
        cancelled: AtomicUsize,
    }

    #[derive(Default)]
    struct FakeFactory {
        state: Arc<FakeFactoryState>,
        fail_start: bool,
    }

    impl FakeFactory {
        fn set_snapshot(&self, snapshot: PathSnapshot) {
            *self.state.snapshot.lock().unwrap() = snapshot;
        }

        /// Updates the snapshot and delivers it to the registered handler.
        fn fire(&self, snapshot: PathSnapshot) {
            self.set_snapshot(snapshot);
            let handler = self.state.handler.lock().unwrap().clone();
            if let Some(handler) = handler {
                handler(snapshot);
            }
        }

        fn started(&self) -> usize {
            self.state.started.load(Ordering::SeqCst)
        }

        fn cancelled(&self) -> usize {
            self.state.cancelled.load(Ordering::SeqCst)
        }
    }

    impl PathMonitorFactory for FakeFactory {
        fn start(
            &self,
            on_update: PathUpdateHandler,
        ) -> reach_traits::error::Result<Box<dyn ActivePathMonitor>> {
            if self.fail_start {
                return Err(MonitorError::NotAvailable("no path monitor".into()));
            }
            self.state.started.fetch_add(1, Ordering::SeqCst);
            *self.state.handler.lock().unwrap() = Some(Arc::new(on_update));
            Ok(Box::new(FakeActive {
                state: Arc::clone(&self.state),
            }))
        }
    }

    struct FakeActive {
        state: Arc<FakeFactoryState>,
    }

    impl ActivePathMonitor for FakeActive {
        fn current(&self) -> PathSnapshot {
            *self.state.snapshot.lock().unwrap()
        }
    }

    impl Drop for FakeActive {
        fn drop(&mut self) {
            self.state.cancelled.fetch_add(1, Ordering::SeqCst);
            *self.state.handler.lock().unwrap() = None;
        }
    }

    fn satisfied_wifi() -> PathSnapshot {
        PathSnapshot {
            satisfied: true,
            uses_wifi: true,
            uses_cellular: false,
        }
    }

    fn satisfied_cellular() -> PathSnapshot {
        PathSnapshot {
            satisfied: true,
            uses_wifi: false,
            uses_cellular: true,
        }
    }

    #[tokio::test]
    async fn test_initial_value_from_current_snapshot() {
        let factory = Arc::new(FakeFactory::default());
        factory.set_snapshot(satisfied_cellular());
        let monitor = PathNetworkMonitor::new(Arc::clone(&factory) as Arc<dyn PathMonitorFactory>);

        let mut transport = monitor.transport_changes().await;
        assert_eq!(transport.next().await, Some(TransportType::Cellular));
    }

    #[tokio::test]
    async fn test_two_subscribers_share_one_monitor() {
        let factory = Arc::new(FakeFactory::default());
        let monitor = PathNetworkMonitor::new(Arc::clone(&factory) as Arc<dyn PathMonitorFactory>);

        let mut status = monitor.status_changes().await;
        let mut transport = monitor.transport_changes().await;
        assert_eq!(factory.started(), 1);

        assert_eq!(status.next().await, Some(ReachabilityStatus::Unreachable));
        assert_eq!(transport.next().await, Some(TransportType::Unknown));

        // One update, both listeners derive independently from it.
        factory.fire(satisfied_wifi());
        assert_eq!(status.next().await, Some(ReachabilityStatus::Reachable));
        assert_eq!(transport.next().await, Some(TransportType::Wifi));
    }

    #[tokio::test]
    async fn test_monitor_torn_down_after_last_subscriber() {
        let factory = Arc::new(FakeFactory::default());
        let monitor = PathNetworkMonitor::new(Arc::clone(&factory) as Arc<dyn PathMonitorFactory>);

        let status = monitor.status_changes().await;
        let transport = monitor.transport_changes().await;
        assert_eq!(factory.started(), 1);

        drop(status);
        assert_eq!(factory.cancelled(), 0, "monitor must outlive first detach");

        drop(transport);
        assert_eq!(factory.cancelled(), 1);

        // A later subscriber brings up a fresh monitor.
        let _status = monitor.status_changes().await;
        assert_eq!(factory.started(), 2);
    }

    #[tokio::test]
    async fn test_second_subscriber_receives_updates() {
        let factory = Arc::new(FakeFactory::default());
        let monitor = PathNetworkMonitor::new(Arc::clone(&factory) as Arc<dyn PathMonitorFactory>);

        let mut status = monitor.status_changes().await;
        assert_eq!(status.next().await, Some(ReachabilityStatus::Unreachable));

        // Joins while the monitor is already running.
        let mut transport = monitor.transport_changes().await;
        assert_eq!(transport.next().await, Some(TransportType::Unknown));

        factory.fire(satisfied_cellular());
        assert_eq!(status.next().await, Some(ReachabilityStatus::Reachable));
        assert_eq!(transport.next().await, Some(TransportType::Cellular));
    }

    #[tokio::test]
    async fn test_unsatisfied_update_resets_both_streams() {
        let factory = Arc::new(FakeFactory::default());
        factory.set_snapshot(satisfied_wifi());
        let monitor = PathNetworkMonitor::new(Arc::clone(&factory) as Arc<dyn PathMonitorFactory>);

        let mut status = monitor.status_changes().await;
        let mut transport = monitor.transport_changes().await;
        assert_eq!(status.next().await, Some(ReachabilityStatus::Reachable));
        assert_eq!(transport.next().await, Some(TransportType::Wifi));

        factory.fire(PathSnapshot {
            satisfied: false,
            uses_wifi: true,
            uses_cellular: false,
        });
        assert_eq!(status.next().await, Some(ReachabilityStatus::Unreachable));
        assert_eq!(transport.next().await, Some(TransportType::Unknown));
    }

    #[tokio::test]
    async fn test_factory_failure_yields_steady_fallback() {
        let factory = Arc::new(FakeFactory {
            fail_start: true,
            ..Default::default()
        });
        let monitor = PathNetworkMonitor::new(factory);

        let mut status = monitor.status_changes().await;
        assert_eq!(status.next().await, Some(ReachabilityStatus::Unreachable));
        let pending = tokio::time::timeout(Duration::from_millis(50), status.next()).await;
        assert!(pending.is_err());
    }

    #[tokio::test]
    async fn test_current_values_without_subscription() {
        let factory = Arc::new(FakeFactory::default());
        factory.set_snapshot(satisfied_wifi());
        let monitor = PathNetworkMonitor::new(Arc::clone(&factory) as Arc<dyn PathMonitorFactory>);

        assert_eq!(
            monitor.current_status().await,
            ReachabilityStatus::Reachable
        );
        assert_eq!(monitor.current_transport().await, TransportType::Wifi);
        // The one-shot reads tore their transient monitors down again.
        assert_eq!(factory.started(), factory.cancelled());
    }
}
