//! # Desktop Connectivity Detector
//!
//! Poll-based [`ConnectivityMonitor`](reach_traits::ConnectivityMonitor)
//! implementation for platforms without a reliable native reachability
//! callback (generic Linux/Windows/macOS desktops and servers).
//!
//! ## Overview
//!
//! No OS signal is trusted here; instead, a background task polls every
//! 3 seconds while a subscription is alive:
//!
//! - reachability comes from short-timeout HTTP HEAD probes against an
//!   ordered list of well-known endpoints, short-circuiting on the first 2xx;
//!   a completed probe result is reused for up to 5 seconds, so the poll
//!   cadence and the probe cadence are decoupled
//! - transport type comes from host interface names (only while reachable):
//!   loopback and down interfaces are skipped, the rest are matched against
//!   WiFi, ethernet and cellular name hints in priority order
//!
//! Dropping a stream cancels its polling task; no probe runs after the last
//! subscriber detaches.

mod config;
mod interfaces;
mod monitor;
mod probe;

pub use config::PollConfig;
pub use interfaces::{InterfaceSource, NetInterface, SystemInterfaceSource};
pub use monitor::PollingNetworkMonitor;
pub use probe::{HttpProbe, ReachabilityProbe};
