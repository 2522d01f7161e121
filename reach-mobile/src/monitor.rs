//! Mobile connectivity monitor implementation.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, warn};

use reach_traits::monitor::{BoxedStream, ChannelStream, ConnectivityMonitor};
use reach_traits::status::{ReachabilityStatus, TransportType};

use crate::events::NetworkEvent;
use crate::registry::{CallbackRegistry, EventHandler, RegistrationId};

/// Push-based monitor over the mobile OS's network callback.
///
/// Each subscription registers its own callback and carries the
/// unregistration in the stream's drop guard, so no registration outlives its
/// subscriber.
pub struct MobileNetworkMonitor {
    registry: Arc<dyn CallbackRegistry>,
}

impl MobileNetworkMonitor {
    /// Creates a monitor over the injected callback registry.
    pub fn new(registry: Arc<dyn CallbackRegistry>) -> Self {
        Self { registry }
    }

    fn subscribe<T, F>(&self, initial: T, map: F) -> BoxedStream<T>
    where
        T: Clone + PartialEq + Send + Sync + 'static,
        F: Fn(NetworkEvent) -> Option<T> + Send + Sync + 'static,
    {
        let (tx, mut stream) = ChannelStream::channel();

        // First value: the synchronously computable current state.
        let _ = tx.unbounded_send(initial.clone());

        let handler: EventHandler = Box::new(move |event| {
            if let Some(value) = map(event) {
                let _ = tx.unbounded_send(value);
            }
        });

        match self.registry.register(handler) {
            Ok(id) => {
                debug!(id = id.0, "network callback registered");
                stream.attach_guard(Box::new(Registration {
                    registry: Arc::clone(&self.registry),
                    id,
                }));
                Box::new(stream)
            }
            Err(err) => {
                // No signal source: report the fallback value as the sole
                // steady-state emission instead of erroring the stream.
                warn!(error = %err, "network callback unavailable, reporting fallback");
                Box::new(ChannelStream::steady(initial))
            }
        }
    }
}

#[async_trait]
impl ConnectivityMonitor for MobileNetworkMonitor {
    async fn current_status(&self) -> ReachabilityStatus {
        self.registry
            .current()
            .map(|caps| caps.status())
            .unwrap_or(ReachabilityStatus::Unreachable)
    }

    async fn current_transport(&self) -> TransportType {
        self.registry
            .current()
            .map(|caps| caps.transport())
            .unwrap_or(TransportType::Unknown)
    }

    async fn status_changes(&self) -> BoxedStream<ReachabilityStatus> {
        let initial = self.current_status().await;
        self.subscribe(initial, |event| match event {
            NetworkEvent::Available(_) => Some(ReachabilityStatus::Reachable),
            NetworkEvent::Lost => Some(ReachabilityStatus::Unreachable),
            // Capability churn on the same network does not change
            // reachability; the status stream ignores it.
            NetworkEvent::CapabilitiesChanged(_) => None,
        })
    }

    async fn transport_changes(&self) -> BoxedStream<TransportType> {
        let initial = self.current_transport().await;
        self.subscribe(initial, |event| match event {
            NetworkEvent::Available(caps) | NetworkEvent::CapabilitiesChanged(caps) => {
                Some(caps.transport())
            }
            NetworkEvent::Lost => Some(TransportType::Unknown),
        })
    }
}

/// Unregisters the native callback when the subscription ends.
struct Registration {
    registry: Arc<dyn CallbackRegistry>,
    id: RegistrationId,
}

impl Drop for Registration {
    fn drop(&mut self) {
        debug!(id = self.id.0, "network callback unregistered");
        self.registry.unregister(self.id);
    }
}
