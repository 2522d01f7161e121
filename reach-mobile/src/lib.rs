//! # Mobile Connectivity Detector
//!
//! Push-based [`ConnectivityMonitor`](reach_traits::ConnectivityMonitor)
//! implementation over the mobile OS's network-callback registry.
//!
//! ## Overview
//!
//! Mobile platforms deliver connectivity through a native callback object
//! with one override point per event kind (network available, network lost,
//! capabilities changed). This crate models that as the tagged
//! [`NetworkEvent`](events::NetworkEvent) enum plus the
//! [`CallbackRegistry`](registry::CallbackRegistry) trait; the host app
//! constructs the monitor with its concrete registry (a thin FFI shim over
//! the platform's connectivity manager) instead of the detector reaching for
//! process-wide global state.
//!
//! Classification rules:
//! - status requires both the internet capability and the OS "validated" flag
//! - transport checks WiFi, then cellular, then ethernet; first flag wins
//!
//! Each stream subscription owns one callback registration and unregisters it
//! when the stream is dropped.

mod events;
mod monitor;
mod registry;

pub use events::{NetworkCapabilities, NetworkEvent};
pub use monitor::MobileNetworkMonitor;
pub use registry::{CallbackRegistry, EventHandler, RegistrationId};
