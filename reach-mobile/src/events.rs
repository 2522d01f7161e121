//! Native callback events and capability sets.

use reach_traits::status::{ReachabilityStatus, TransportType};

/// Capability snapshot of the active network, as reported by the OS.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NetworkCapabilities {
    /// The network claims internet capability.
    pub internet: bool,
    /// The OS has validated that internet actually works on this network.
    pub validated: bool,
    /// WiFi transport flag.
    pub wifi: bool,
    /// Cellular transport flag.
    pub cellular: bool,
    /// Ethernet transport flag.
    pub ethernet: bool,
}

impl NetworkCapabilities {
    /// Reachable only when the network both claims and has validated
    /// internet access.
    pub fn is_reachable(self) -> bool {
        self.internet && self.validated
    }

    pub fn status(self) -> ReachabilityStatus {
        ReachabilityStatus::from_reachable(self.is_reachable())
    }

    /// Transport flags checked in priority order.
    ///
    /// WiFi wins over cellular: a VPN over WiFi can report both transport
    /// flags, and WiFi is the physically active one.
    pub fn transport(self) -> TransportType {
        if self.wifi {
            TransportType::Wifi
        } else if self.cellular {
            TransportType::Cellular
        } else if self.ethernet {
            TransportType::Ethernet
        } else {
            TransportType::Unknown
        }
    }
}

/// Tagged event mirroring the native callback's override points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NetworkEvent {
    /// A network satisfying the internet request became available.
    Available(NetworkCapabilities),
    /// The active network was lost.
    Lost,
    /// The active network's capability set changed without loss or gain.
    CapabilitiesChanged(NetworkCapabilities),
}
