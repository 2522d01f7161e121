//! # Connectivity Facade Traits
//!
//! Platform abstraction for live network reachability information.
//!
//! ## Overview
//!
//! This crate defines the contract between application code and the
//! platform-specific connectivity detectors. A detector implements
//! [`ConnectivityMonitor`](monitor::ConnectivityMonitor), which publishes two
//! independent live sequences:
//!
//! - [`ReachabilityStatus`](status::ReachabilityStatus) - whether the device
//!   currently has validated internet access
//! - [`TransportType`](status::TransportType) - the coarse active transport
//!   (WiFi, cellular, ethernet)
//!
//! Each sequence yields the current value immediately on subscribe, then a
//! new value on every detected change, with adjacent duplicates suppressed.
//! The sequences never fail: missing native services fold into
//! `Unreachable` / `Unknown` rather than surfacing as errors.
//!
//! ## Platform Implementations
//!
//! | Platform | Implementation Crate | Signal source |
//! |----------|---------------------|---------------|
//! | Desktop  | `reach-desktop`     | HTTP probe polling + interface names |
//! | Mobile   | `reach-mobile`      | Native network callback registry |
//! | Darwin   | `reach-darwin`      | Native path monitor |
//! | Web      | `reach-wasm`        | `navigator.onLine` + online/offline events |
//!
//! Exactly one implementation is bound per build target through the workspace
//! root crate's feature flags.
//!
//! ## Thread Safety
//!
//! All traits use the [`platform`] marker traits so bounds are `Send + Sync`
//! on native targets and relaxed on single-threaded wasm32 builds.

pub mod error;
pub mod monitor;
pub mod observe;
pub mod platform;
pub mod status;

pub use error::MonitorError;

// Re-export commonly used types
pub use monitor::{BoxedStream, ChannelStream, ConnectivityMonitor, ConnectivityStream};
pub use observe::{reachability_cell, transport_cell, StateCell};
pub use status::{ReachabilityStatus, TransportType};
