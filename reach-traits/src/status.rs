//! Reachability and transport value types.
//!
//! Both types are immutable value tags: produced fresh on every observation,
//! no identity, no history.

use serde::{Deserialize, Serialize};

/// Whether the device currently has internet access.
///
/// How strictly "access" is validated depends on the platform detector: the
/// mobile detector requires the OS-validated capability flag, the desktop
/// detector requires a successful HTTP probe, the browser detector trusts
/// `navigator.onLine`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReachabilityStatus {
    /// The device has (platform-validated) internet access.
    Reachable,
    /// No internet access, or no way to confirm any.
    Unreachable,
}

impl ReachabilityStatus {
    /// Maps a plain reachable/unreachable boolean into the enum.
    pub fn from_reachable(reachable: bool) -> Self {
        if reachable {
            Self::Reachable
        } else {
            Self::Unreachable
        }
    }

    pub fn is_reachable(self) -> bool {
        matches!(self, Self::Reachable)
    }
}

impl std::fmt::Display for ReachabilityStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Reachable => write!(f, "reachable"),
            Self::Unreachable => write!(f, "unreachable"),
        }
    }
}

/// Coarse classification of the active network transport.
///
/// `Unknown` covers both "not yet determined" and "no connectivity"; callers
/// cannot distinguish the two from this enum alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransportType {
    /// WiFi connection
    Wifi,
    /// Cellular/mobile data connection
    Cellular,
    /// Wired ethernet connection
    Ethernet,
    /// Undetermined transport, or no connectivity
    Unknown,
}

impl std::fmt::Display for TransportType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Wifi => write!(f, "wifi"),
            Self::Cellular => write!(f, "cellular"),
            Self::Ethernet => write!(f, "ethernet"),
            Self::Unknown => write!(f, "unknown"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_reachable() {
        assert_eq!(
            ReachabilityStatus::from_reachable(true),
            ReachabilityStatus::Reachable
        );
        assert_eq!(
            ReachabilityStatus::from_reachable(false),
            ReachabilityStatus::Unreachable
        );
        assert!(ReachabilityStatus::Reachable.is_reachable());
        assert!(!ReachabilityStatus::Unreachable.is_reachable());
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&ReachabilityStatus::Unreachable).unwrap();
        assert_eq!(json, "\"unreachable\"");

        let transport: TransportType = serde_json::from_str("\"wifi\"").unwrap();
        assert_eq!(transport, TransportType::Wifi);
    }

    #[test]
    fn test_display() {
        assert_eq!(TransportType::Cellular.to_string(), "cellular");
        assert_eq!(ReachabilityStatus::Reachable.to_string(), "reachable");
    }
}
