//! Workspace placeholder crate.
//!
//! This crate exists to expose shared feature flags that map to the individual
//! platform crates (e.g., `reach-desktop`, `reach-mobile`, `reach-darwin`,
//! `reach-wasm`). Host applications can depend on `netreach-workspace`,
//! enable exactly one platform feature, and get the matching
//! `ConnectivityMonitor` implementation without wiring each crate
//! individually. Platform selection happens here at compile time; there is no
//! runtime branching between detectors.

pub use reach_traits::{
    monitor::{ConnectivityMonitor, ConnectivityStream},
    observe::{reachability_cell, transport_cell, StateCell},
    status::{ReachabilityStatus, TransportType},
};

#[cfg(feature = "desktop")]
pub use reach_desktop::{PollConfig, PollingNetworkMonitor};

#[cfg(feature = "mobile")]
pub use reach_mobile::MobileNetworkMonitor;

#[cfg(feature = "darwin")]
pub use reach_darwin::PathNetworkMonitor;

#[cfg(all(feature = "wasm", target_arch = "wasm32"))]
pub use reach_wasm::BrowserNetworkMonitor;
