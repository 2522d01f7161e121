//! Host interface enumeration and transport classification.

use std::collections::HashMap;

use tracing::warn;

use reach_traits::status::TransportType;

/// One host network interface, as far as classification cares.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetInterface {
    pub name: String,
    pub is_up: bool,
    pub is_loopback: bool,
}

/// Source of host interfaces, injectable for testing.
pub trait InterfaceSource: Send + Sync {
    fn interfaces(&self) -> Vec<NetInterface>;
}

/// Enumerates interfaces through the OS address tables.
///
/// Only interfaces with at least one assigned address show up here, which is
/// fine: an interface without addresses cannot be the active transport
/// anyway, so everything listed is treated as up.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemInterfaceSource;

impl InterfaceSource for SystemInterfaceSource {
    fn interfaces(&self) -> Vec<NetInterface> {
        let netifas = match local_ip_address::list_afinet_netifas() {
            Ok(netifas) => netifas,
            Err(err) => {
                warn!(error = %err, "interface enumeration failed");
                return Vec::new();
            }
        };

        // One entry per interface name; an interface counts as loopback when
        // any of its addresses is a loopback address.
        let mut seen: HashMap<String, bool> = HashMap::new();
        let mut order: Vec<String> = Vec::new();
        for (name, addr) in netifas {
            let entry = seen.entry(name.clone()).or_insert_with(|| {
                order.push(name.clone());
                false
            });
            *entry |= addr.is_loopback();
        }

        order
            .into_iter()
            .map(|name| {
                let is_loopback = seen[&name];
                NetInterface {
                    name,
                    is_up: true,
                    is_loopback,
                }
            })
            .collect()
    }
}

/// WiFi adapter name fragments, checked first.
const WIFI_HINTS: &[&str] = &["wlan", "wlp", "wifi", "wi-fi", "wireless", "ath", "airport"];

/// Wired adapter name fragments.
const ETHERNET_HINTS: &[&str] = &["eth", "eno", "ens", "enp", "lan", "em"];

/// Cellular modem name fragments.
const CELLULAR_HINTS: &[&str] = &["rmnet", "wwan", "ppp", "cellular", "mobile"];

/// Classifies a single interface name, rules in priority order.
///
/// Returns `None` for names no rule recognizes.
fn classify_name(name: &str) -> Option<TransportType> {
    let lower = name.to_lowercase();
    if WIFI_HINTS.iter().any(|hint| lower.contains(hint)) {
        return Some(TransportType::Wifi);
    }
    if ETHERNET_HINTS.iter().any(|hint| lower.contains(hint)) {
        return Some(TransportType::Ethernet);
    }
    if bare_numeric_suffix(&lower) {
        // Short hint-free adapters like "en0" or "net1"; ambiguous, and on
        // consumer hardware overwhelmingly WiFi.
        return Some(TransportType::Wifi);
    }
    if CELLULAR_HINTS.iter().any(|hint| lower.contains(hint)) {
        return Some(TransportType::Cellular);
    }
    None
}

/// `true` for names of at most three letters followed only by digits.
fn bare_numeric_suffix(name: &str) -> bool {
    let prefix_len = name.chars().take_while(char::is_ascii_alphabetic).count();
    let digits = &name[prefix_len..];
    (1..=3).contains(&prefix_len) && !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit())
}

/// Picks the transport for the host: first non-loopback, up interface that
/// any rule recognizes wins.
pub fn classify_interfaces(interfaces: &[NetInterface]) -> TransportType {
    for iface in interfaces {
        if iface.is_loopback || !iface.is_up {
            continue;
        }
        if let Some(transport) = classify_name(&iface.name) {
            return transport;
        }
    }
    TransportType::Unknown
}

#[cfg(test)]
mod tests {
    use super::*;

    fn up(name: &str) -> NetInterface {
        NetInterface {
            name: name.to_string(),
            is_up: true,
            is_loopback: false,
        }
    }

    #[test]
    fn test_classify_well_known_names() {
        assert_eq!(classify_interfaces(&[up("wlan0")]), TransportType::Wifi);
        assert_eq!(classify_interfaces(&[up("wlp3s0")]), TransportType::Wifi);
        assert_eq!(classify_interfaces(&[up("eth0")]), TransportType::Ethernet);
        assert_eq!(
            classify_interfaces(&[up("enp0s31f6")]),
            TransportType::Ethernet
        );
        assert_eq!(
            classify_interfaces(&[up("rmnet0")]),
            TransportType::Cellular
        );
        assert_eq!(classify_interfaces(&[up("wwan0")]), TransportType::Cellular);
    }

    #[test]
    fn test_bare_numeric_suffix_defaults_to_wifi() {
        assert_eq!(classify_interfaces(&[up("en0")]), TransportType::Wifi);
        assert_eq!(classify_interfaces(&[up("net1")]), TransportType::Wifi);
    }

    #[test]
    fn test_unrecognized_name_is_unknown() {
        assert_eq!(classify_interfaces(&[up("tailscale")]), TransportType::Unknown);
        assert_eq!(classify_interfaces(&[]), TransportType::Unknown);
    }

    #[test]
    fn test_loopback_skipped_even_when_name_matches() {
        let lo = NetInterface {
            name: "ethlo0".to_string(),
            is_up: true,
            is_loopback: true,
        };
        assert_eq!(classify_interfaces(&[lo]), TransportType::Unknown);
    }

    #[test]
    fn test_down_interface_skipped() {
        let down = NetInterface {
            name: "wlan0".to_string(),
            is_up: false,
            is_loopback: false,
        };
        let eth = up("eth0");
        assert_eq!(
            classify_interfaces(&[down, eth]),
            TransportType::Ethernet
        );
    }

    #[test]
    fn test_first_match_wins() {
        assert_eq!(
            classify_interfaces(&[up("eth0"), up("wlan0")]),
            TransportType::Ethernet
        );
    }
}
