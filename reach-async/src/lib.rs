//! Runtime-agnostic async abstraction layer for netreach.
//!
//! This crate provides a unified async API that works across different runtime
//! environments:
//! - Native platforms (desktop, mobile hosts): Uses the Tokio runtime
//! - WebAssembly: Uses the browser's event loop with `wasm-bindgen-futures`
//!
//! # Architecture
//!
//! The crate uses conditional compilation (`#[cfg]`) to provide
//! platform-specific implementations while maintaining a consistent API
//! surface. The detector crates depend on this crate instead of directly
//! depending on tokio, so the shared stream and observation code in
//! `reach-traits` compiles unchanged for both targets.
//!
//! # Modules
//!
//! - `task`: Task spawning
//! - `time`: Time-related operations (sleep, interval, timeout)
//! - `sync`: Watch channels and cancellation tokens
//!
//! Channels between detector tasks and streams use `futures::channel::mpsc`
//! on both targets; only the primitives that genuinely differ per platform
//! live here.

pub mod sync;
pub mod task;
pub mod time;

// WASM-specific implementations
#[cfg(target_arch = "wasm32")]
mod wasm;

// Re-export commonly used types at crate root for convenience
pub use task::spawn;
pub use time::{sleep, Duration};
