//! Time-related abstractions.
//!
//! - On native platforms: Uses `tokio::time`
//! - On WASM: Uses `gloo-timers` (browser `setTimeout`) and standard library
//!   types
//!
//! `Instant`, `interval` and `timeout` are only exported on native targets;
//! the polling detector that consumes them is native-only, and
//! `std::time::Instant` is unusable on `wasm32-unknown-unknown`. The native
//! `Instant` is tokio's, so timestamps follow the runtime clock (including
//! the paused test clock) rather than wall time.

// ============================================================================
// Native Implementation (Tokio)
// ============================================================================

#[cfg(not(target_arch = "wasm32"))]
pub use tokio::time::{interval, sleep, timeout, Instant, Interval};

#[cfg(not(target_arch = "wasm32"))]
pub use std::time::Duration;

#[cfg(not(target_arch = "wasm32"))]
pub use tokio::time::error::Elapsed as TimeoutError;

// ============================================================================
// WASM Implementation
// ============================================================================

#[cfg(target_arch = "wasm32")]
pub use std::time::Duration;

#[cfg(target_arch = "wasm32")]
/// Sleeps for the specified duration using the browser's `setTimeout`.
pub async fn sleep(duration: Duration) {
    gloo_timers::future::sleep(duration).await
}
