//! Synchronization primitives.
//!
//! - On native platforms: `tokio::sync::watch` and
//!   `tokio_util::sync::CancellationToken`
//! - On WASM: Single-threaded reimplementations with the same API subset
//!
//! Only the subset used by the connectivity streams is provided: a watch
//! channel for UI-bound state cells and a cancellation token for scoping
//! background mirror tasks.

// ============================================================================
// Native Implementation (Tokio)
// ============================================================================

#[cfg(not(target_arch = "wasm32"))]
pub use tokio::sync::watch;

#[cfg(not(target_arch = "wasm32"))]
pub use tokio_util::sync::CancellationToken;

// ============================================================================
// WASM Implementation
// ============================================================================

#[cfg(target_arch = "wasm32")]
pub use crate::wasm::watch;

#[cfg(target_arch = "wasm32")]
pub use crate::wasm::cancel::CancellationToken;
