//! Native path-monitor primitive, as injected by the host.

use reach_traits::error::Result;
use reach_traits::status::{ReachabilityStatus, TransportType};

/// Raw snapshot of the current network path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PathSnapshot {
    /// The path can carry traffic.
    pub satisfied: bool,
    /// The path uses a WiFi interface.
    pub uses_wifi: bool,
    /// The path uses a cellular interface.
    pub uses_cellular: bool,
}

impl PathSnapshot {
    pub fn status(self) -> ReachabilityStatus {
        ReachabilityStatus::from_reachable(self.satisfied)
    }

    /// Interface flags are only meaningful while the path is satisfied.
    pub fn transport(self) -> TransportType {
        if !self.satisfied {
            TransportType::Unknown
        } else if self.uses_wifi {
            TransportType::Wifi
        } else if self.uses_cellular {
            TransportType::Cellular
        } else {
            TransportType::Unknown
        }
    }
}

/// Callback invoked by the native monitor for each path update.
pub type PathUpdateHandler = Box<dyn Fn(PathSnapshot) + Send + Sync>;

/// Creates native path monitors.
///
/// `start` must return before delivering any update through the handler;
/// updates are delivered asynchronously from the monitor's own queue.
pub trait PathMonitorFactory: Send + Sync {
    fn start(&self, on_update: PathUpdateHandler) -> Result<Box<dyn ActivePathMonitor>>;
}

/// A running native monitor. Dropping it cancels the native resource.
pub trait ActivePathMonitor: Send + Sync {
    /// The most recent path snapshot.
    fn current(&self) -> PathSnapshot;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_follows_satisfied() {
        let mut snapshot = PathSnapshot::default();
        assert_eq!(snapshot.status(), ReachabilityStatus::Unreachable);

        snapshot.satisfied = true;
        assert_eq!(snapshot.status(), ReachabilityStatus::Reachable);
    }

    #[test]
    fn test_transport_derivation() {
        let wifi = PathSnapshot {
            satisfied: true,
            uses_wifi: true,
            uses_cellular: false,
        };
        assert_eq!(wifi.transport(), TransportType::Wifi);

        let cellular = PathSnapshot {
            satisfied: true,
            uses_wifi: false,
            uses_cellular: true,
        };
        assert_eq!(cellular.transport(), TransportType::Cellular);

        let wired = PathSnapshot {
            satisfied: true,
            ..Default::default()
        };
        assert_eq!(wired.transport(), TransportType::Unknown);
    }

    #[test]
    fn test_unsatisfied_path_hides_interface_flags() {
        let snapshot = PathSnapshot {
            satisfied: false,
            uses_wifi: true,
            uses_cellular: true,
        };
        assert_eq!(snapshot.transport(), TransportType::Unknown);
    }
}
