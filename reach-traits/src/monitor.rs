//! Connectivity monitor facade and stream plumbing.
//!
//! A [`ConnectivityMonitor`] publishes two independent live sequences, one of
//! [`ReachabilityStatus`] and one of [`TransportType`]. Subscribing yields the
//! current value immediately, then a new value on every underlying
//! connectivity change, with adjacent duplicates suppressed, for as long as
//! the stream is held. Dropping a stream synchronously releases the platform
//! resources behind it (callback registration, polling task, event
//! listeners).
//!
//! The sequences have no error channel. A detector that cannot reach its
//! native signal source returns a stream that emits the fallback value
//! (`Unreachable` / `Unknown`) and then stays open without further emissions.

use futures::channel::mpsc;
use futures::StreamExt;

use crate::platform::{DropGuard, PlatformSend, PlatformSendSync};
use crate::status::{ReachabilityStatus, TransportType};

/// A live sequence of connectivity values.
///
/// Returns `None` only when the underlying signal source has shut down;
/// healthy streams stay open indefinitely.
#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
pub trait ConnectivityStream<T>: PlatformSend {
    /// Waits for the next value.
    async fn next(&mut self) -> Option<T>;
}

/// Boxed stream handed out by the facade.
pub type BoxedStream<T> = Box<dyn ConnectivityStream<T>>;

#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
impl<T: PlatformSend + 'static> ConnectivityStream<T> for BoxedStream<T> {
    async fn next(&mut self) -> Option<T> {
        (**self).next().await
    }
}

/// Connectivity monitor facade.
///
/// Exactly one implementation is bound per build target; the workspace root
/// crate maps a platform feature flag to the matching detector crate at
/// compile time.
#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
pub trait ConnectivityMonitor: PlatformSendSync {
    /// Computes the current reachability status without subscribing.
    async fn current_status(&self) -> ReachabilityStatus;

    /// Computes the current transport type without subscribing.
    async fn current_transport(&self) -> TransportType;

    /// Subscribes to reachability changes.
    ///
    /// The first value equals the state current at subscribe time.
    async fn status_changes(&self) -> BoxedStream<ReachabilityStatus>;

    /// Subscribes to transport-type changes.
    ///
    /// The first value equals the state current at subscribe time.
    async fn transport_changes(&self) -> BoxedStream<TransportType>;
}

/// Channel-backed stream with adjacent-duplicate suppression.
///
/// Detectors push raw values into the sending half from their native
/// callback or background task; the stream drops values equal to the last
/// one delivered, which gives every detector the dedup invariant in one
/// place.
pub struct ChannelStream<T> {
    rx: mpsc::UnboundedReceiver<T>,
    last: Option<T>,
    _guard: Option<DropGuard>,
}

impl<T> ChannelStream<T>
where
    T: Clone + PartialEq + PlatformSend + 'static,
{
    /// Creates an unbounded channel and the stream reading from it.
    pub fn channel() -> (mpsc::UnboundedSender<T>, Self) {
        let (tx, rx) = mpsc::unbounded();
        (
            tx,
            Self {
                rx,
                last: None,
                _guard: None,
            },
        )
    }

    /// Ties a platform resource to this stream's lifetime.
    ///
    /// The guard is dropped when the stream is dropped, which is where
    /// unregistration/cancellation of the producing side happens.
    pub fn attach_guard(&mut self, guard: DropGuard) {
        self._guard = Some(guard);
    }

    /// A stream that emits `value` once and then stays open forever.
    ///
    /// Used when a native signal source is missing: the subscriber sees the
    /// fallback value as the sole steady-state emission instead of an error.
    pub fn steady(value: T) -> Self {
        let (tx, mut stream) = Self::channel();
        let _ = tx.unbounded_send(value);
        // Parking the sender in the guard slot keeps the channel open.
        stream.attach_guard(Box::new(tx));
        stream
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
impl<T> ConnectivityStream<T> for ChannelStream<T>
where
    T: Clone + PartialEq + PlatformSend + 'static,
{
    async fn next(&mut self) -> Option<T> {
        loop {
            let value = self.rx.next().await?;
            if self.last.as_ref() == Some(&value) {
                continue;
            }
            self.last = Some(value.clone());
            return Some(value);
        }
    }
}
