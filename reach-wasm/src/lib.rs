//! # Browser Connectivity Detector
//!
//! [`ConnectivityMonitor`](reach_traits::ConnectivityMonitor) implementation
//! for the `wasm32-unknown-unknown` target, backed by the browser's
//! `navigator.onLine` flag and the `online`/`offline` window events.
//!
//! # Platform Support
//!
//! This crate is designed exclusively for the `wasm32-unknown-unknown`
//! target. It will not compile for native targets.
//!
//! # Behaviour
//!
//! - Status is `navigator.onLine` at read time. The `online`/`offline`
//!   events can fire before the browser's own state has settled, so each
//!   event triggers a short delay followed by a fresh read instead of
//!   trusting the event itself.
//! - The browser exposes no interface information, so the transport type is
//!   inferred from the user-agent string: mobile browsers are assumed
//!   cellular, everything else WiFi, and an offline browser reports
//!   `Unknown`.
//!
//! Event listeners are removed when the subscription stream is dropped.

#![cfg(target_arch = "wasm32")]

mod monitor;
mod transport;

pub use monitor::BrowserNetworkMonitor;
pub use transport::transport_from_user_agent;
