//! Platform-specific helper abstractions used to keep trait bounds aligned
//! with the threading guarantees of each target.
//!
//! Native targets require `Send + Sync` so monitor implementations can be
//! shared freely across async tasks. WebAssembly builds run entirely on a
//! single thread and cannot satisfy those bounds because browser-provided
//! objects (e.g., `web_sys` types) are not thread-safe. The marker traits
//! below make the required bounds conditional without duplicating every trait
//! definition.

/// Marker trait that applies `Send + Sync` on native targets while becoming a
/// no-op on `wasm32`.
#[cfg(not(target_arch = "wasm32"))]
pub trait PlatformSendSync: Send + Sync {}

#[cfg(not(target_arch = "wasm32"))]
impl<T> PlatformSendSync for T where T: Send + Sync {}

#[cfg(target_arch = "wasm32")]
pub trait PlatformSendSync {}

#[cfg(target_arch = "wasm32")]
impl<T> PlatformSendSync for T {}

/// Marker trait equivalent to `Send` on native targets.
#[cfg(not(target_arch = "wasm32"))]
pub trait PlatformSend: Send {}

#[cfg(not(target_arch = "wasm32"))]
impl<T> PlatformSend for T where T: Send {}

#[cfg(target_arch = "wasm32")]
pub trait PlatformSend {}

#[cfg(target_arch = "wasm32")]
impl<T> PlatformSend for T {}

/// Type-erased guard slot that enforces `Send` when available.
///
/// Streams hold one of these to tie platform resources (callback
/// registrations, polling tasks, event listeners) to the subscription
/// lifetime: dropping the stream drops the guard, which releases the
/// resource.
#[cfg(not(target_arch = "wasm32"))]
pub type DropGuard = Box<dyn std::any::Any + Send>;

#[cfg(target_arch = "wasm32")]
pub type DropGuard = Box<dyn std::any::Any>;
