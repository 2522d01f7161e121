//! # Darwin Path-Monitor Connectivity Detector
//!
//! Event-driven [`ConnectivityMonitor`](reach_traits::ConnectivityMonitor)
//! implementation over the OS's native path-monitor primitive.
//!
//! ## Overview
//!
//! Both live sequences share a single native monitor. The monitor is created
//! lazily when the first subscriber of either stream arrives and destroyed
//! when the last subscriber of either stream detaches; in between, every path
//! update fans out to all registered listeners, each deriving its own value
//! from the same raw snapshot:
//!
//! - status: path satisfied ⇒ `Reachable`
//! - transport: WiFi interface ⇒ `Wifi`, else cellular interface ⇒
//!   `Cellular`, else `Unknown` (and always `Unknown` while unsatisfied)
//!
//! The host injects the native primitive through
//! [`PathMonitorFactory`](path::PathMonitorFactory); this crate owns only the
//! reference-counted lifecycle and derivation rules.

mod monitor;
mod path;

pub use monitor::PathNetworkMonitor;
pub use path::{ActivePathMonitor, PathMonitorFactory, PathSnapshot, PathUpdateHandler};
