//! Task spawning abstractions.
//!
//! - On native platforms: Uses `tokio::task::spawn`
//! - On WASM: Uses `wasm_bindgen_futures::spawn_local` with an awaitable
//!   `JoinHandle` backed by a oneshot channel
//!
//! Native tasks may run on a different thread and therefore require `Send`
//! futures; WASM tasks run on the single browser thread and only require
//! `'static`.

// ============================================================================
// Native Implementation (Tokio)
// ============================================================================

#[cfg(not(target_arch = "wasm32"))]
pub use tokio::task::{yield_now, JoinError, JoinHandle};

#[cfg(not(target_arch = "wasm32"))]
/// Spawns a new asynchronous task using the Tokio runtime.
///
/// The returned `JoinHandle` can be awaited for the task's result, or simply
/// dropped to let the task run detached.
pub fn spawn<F>(future: F) -> JoinHandle<F::Output>
where
    F: std::future::Future + Send + 'static,
    F::Output: Send + 'static,
{
    tokio::task::spawn(future)
}

// ============================================================================
// WASM Implementation
// ============================================================================

#[cfg(target_arch = "wasm32")]
pub use crate::wasm::task::{spawn, yield_now, JoinError, JoinHandle};
