//! Polling connectivity monitor implementation.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use reach_async::sync::CancellationToken;
use reach_async::task;
use reach_async::time::{interval, Instant};
use reach_traits::monitor::{BoxedStream, ChannelStream, ConnectivityMonitor};
use reach_traits::status::{ReachabilityStatus, TransportType};

use crate::config::PollConfig;
use crate::interfaces::{classify_interfaces, InterfaceSource, SystemInterfaceSource};
use crate::probe::{HttpProbe, ReachabilityProbe};

/// Poll-based monitor probing well-known endpoints on a fixed cadence.
///
/// Each subscription runs its own background polling task; the task owns a
/// probe-result cache, so the poll cadence (3 s) and the probe cadence (5 s
/// cache validity) stay decoupled without any cross-task synchronization.
/// Dropping the stream cancels the task before its next tick.
pub struct PollingNetworkMonitor {
    probe: Arc<dyn ReachabilityProbe>,
    interfaces: Arc<dyn InterfaceSource>,
    config: PollConfig,
}

impl PollingNetworkMonitor {
    /// Creates a monitor with the default cadence and system probes.
    pub fn new() -> Self {
        Self::with_config(PollConfig::default())
    }

    /// Creates a monitor with a custom cadence over the system probes.
    pub fn with_config(config: PollConfig) -> Self {
        let probe = Arc::new(HttpProbe::new(&config));
        Self::with_parts(probe, Arc::new(SystemInterfaceSource), config)
    }

    /// Fully injected constructor, used by tests and exotic hosts.
    pub fn with_parts(
        probe: Arc<dyn ReachabilityProbe>,
        interfaces: Arc<dyn InterfaceSource>,
        config: PollConfig,
    ) -> Self {
        Self {
            probe,
            interfaces,
            config,
        }
    }

    fn spawn_poller<T, F>(&self, derive: F) -> BoxedStream<T>
    where
        T: Clone + PartialEq + Send + Sync + 'static,
        F: Fn(bool, &dyn InterfaceSource) -> T + Send + Sync + 'static,
    {
        let (tx, mut stream) = ChannelStream::channel();
        let token = CancellationToken::new();
        let probe = Arc::clone(&self.probe);
        let interfaces = Arc::clone(&self.interfaces);
        let poll_interval = self.config.poll_interval;
        let cache_ttl = self.config.cache_ttl;

        let task_token = token.clone();
        task::spawn(async move {
            let mut cache: Option<CachedProbe> = None;
            let mut ticker = interval(poll_interval);
            loop {
                tokio::select! {
                    _ = task_token.cancelled() => break,
                    _ = ticker.tick() => {}
                }
                let reachable = cached_check(probe.as_ref(), &mut cache, cache_ttl).await;
                if tx.unbounded_send(derive(reachable, interfaces.as_ref())).is_err() {
                    break;
                }
            }
            debug!("polling task stopped");
        });

        stream.attach_guard(Box::new(CancelOnDrop(token)));
        Box::new(stream)
    }
}

impl Default for PollingNetworkMonitor {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ConnectivityMonitor for PollingNetworkMonitor {
    async fn current_status(&self) -> ReachabilityStatus {
        ReachabilityStatus::from_reachable(self.probe.check().await)
    }

    async fn current_transport(&self) -> TransportType {
        derive_transport(self.probe.check().await, self.interfaces.as_ref())
    }

    async fn status_changes(&self) -> BoxedStream<ReachabilityStatus> {
        self.spawn_poller(|reachable, _| ReachabilityStatus::from_reachable(reachable))
    }

    async fn transport_changes(&self) -> BoxedStream<TransportType> {
        self.spawn_poller(derive_transport)
    }
}

fn derive_transport(reachable: bool, interfaces: &dyn InterfaceSource) -> TransportType {
    // Interface names are only consulted while the internet is actually
    // reachable; otherwise the transport is unknown by definition.
    if reachable {
        classify_interfaces(&interfaces.interfaces())
    } else {
        TransportType::Unknown
    }
}

struct CachedProbe {
    reachable: bool,
    completed_at: Instant,
}

/// Runs the probe unless a result younger than `ttl` exists.
async fn cached_check(
    probe: &dyn ReachabilityProbe,
    cache: &mut Option<CachedProbe>,
    ttl: std::time::Duration,
) -> bool {
    if let Some(entry) = cache {
        if entry.completed_at.elapsed() < ttl {
            return entry.reachable;
        }
    }
    let reachable = probe.check().await;
    *cache = Some(CachedProbe {
        reachable,
        completed_at: Instant::now(),
    });
    reachable
}

/// Cancels the polling task when the subscription ends.
struct CancelOnDrop(CancellationToken);

impl Drop for CancelOnDrop {
    fn drop(&mut self) {
        self.0.cancel();
    }
}
