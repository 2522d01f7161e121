//! Injected handle to the native network-callback registry.

use reach_traits::error::Result;

use crate::events::{NetworkCapabilities, NetworkEvent};

/// Handler invoked by the native side for each network event.
pub type EventHandler = Box<dyn Fn(NetworkEvent) + Send + Sync>;

/// Opaque token identifying one registered callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RegistrationId(pub u64);

/// The native network-callback registry, scoped to networks with internet
/// capability.
///
/// Host apps implement this over their platform's connectivity manager and
/// pass it into [`MobileNetworkMonitor::new`](crate::MobileNetworkMonitor::new);
/// the detector never touches process-wide global state itself.
///
/// Implementations must deliver events to every registered handler in the
/// order the OS reported them.
pub trait CallbackRegistry: Send + Sync {
    /// Registers a handler for future network events.
    ///
    /// Fails when the platform's connectivity service is unavailable (e.g.,
    /// missing permission); the monitor folds that into the fallback values
    /// rather than surfacing it to subscribers.
    fn register(&self, handler: EventHandler) -> Result<RegistrationId>;

    /// Removes a previously registered handler.
    ///
    /// Unknown ids are ignored.
    fn unregister(&self, id: RegistrationId);

    /// Capability set of the active network, if any.
    fn current(&self) -> Option<NetworkCapabilities>;
}
