//! WASM watch channel.
//!
//! A single-producer, multi-consumer channel where the producer updates a
//! value and consumers observe the latest one, mirroring the
//! `tokio::sync::watch` API subset the state cells use: `channel`, `send`,
//! `borrow` and `changed`. Waker-based; no polling loops.

use std::cell::{Ref as CellRef, RefCell};
use std::rc::Rc;
use std::task::{Context, Poll, Waker};

struct WatchState<T> {
    value: T,
    /// Incremented on each send; receivers track the last version they saw.
    version: u64,
    sender_alive: bool,
    waiters: Vec<Waker>,
}

/// Error returned by [`Receiver::changed`] when the sender is gone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecvError;

impl std::fmt::Display for RecvError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "watch channel closed")
    }
}

impl std::error::Error for RecvError {}

/// Error returned by [`Sender::send`] when all receivers are gone.
#[derive(Debug)]
pub struct SendError<T>(pub T);

impl<T> std::fmt::Display for SendError<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "watch channel closed - no receivers")
    }
}

impl<T: std::fmt::Debug> std::error::Error for SendError<T> {}

/// A read guard over the current value.
pub struct Ref<'a, T> {
    guard: CellRef<'a, WatchState<T>>,
}

impl<'a, T> std::ops::Deref for Ref<'a, T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.guard.value
    }
}

/// The sending half of a watch channel.
pub struct Sender<T> {
    state: Rc<RefCell<WatchState<T>>>,
    receivers: Rc<RefCell<usize>>,
}

impl<T> Sender<T> {
    /// Replaces the current value and wakes all waiting receivers.
    pub fn send(&self, value: T) -> Result<(), SendError<T>> {
        if *self.receivers.borrow() == 0 {
            return Err(SendError(value));
        }
        let waiters = {
            let mut state = self.state.borrow_mut();
            state.value = value;
            state.version += 1;
            std::mem::take(&mut state.waiters)
        };
        for waker in waiters {
            waker.wake();
        }
        Ok(())
    }

    /// Returns a read guard over the most recently sent value.
    pub fn borrow(&self) -> Ref<'_, T> {
        Ref {
            guard: self.state.borrow(),
        }
    }

    /// Creates a new receiver that has already seen the current value.
    pub fn subscribe(&self) -> Receiver<T> {
        *self.receivers.borrow_mut() += 1;
        Receiver {
            state: Rc::clone(&self.state),
            receivers: Rc::clone(&self.receivers),
            seen_version: self.state.borrow().version,
        }
    }
}

impl<T> Drop for Sender<T> {
    fn drop(&mut self) {
        let waiters = {
            let mut state = self.state.borrow_mut();
            state.sender_alive = false;
            std::mem::take(&mut state.waiters)
        };
        for waker in waiters {
            waker.wake();
        }
    }
}

/// The receiving half of a watch channel.
pub struct Receiver<T> {
    state: Rc<RefCell<WatchState<T>>>,
    receivers: Rc<RefCell<usize>>,
    seen_version: u64,
}

impl<T> Receiver<T> {
    /// Returns a read guard over the latest value without marking it seen.
    pub fn borrow(&self) -> Ref<'_, T> {
        Ref {
            guard: self.state.borrow(),
        }
    }

    /// Returns a read guard over the latest value and marks it seen.
    pub fn borrow_and_update(&mut self) -> Ref<'_, T> {
        self.seen_version = self.state.borrow().version;
        Ref {
            guard: self.state.borrow(),
        }
    }

    /// Waits until a value newer than the last seen one is sent.
    ///
    /// Returns `Err(RecvError)` once the sender is dropped and no unseen
    /// value remains.
    pub async fn changed(&mut self) -> Result<(), RecvError> {
        futures::future::poll_fn(|cx| self.poll_changed(cx)).await
    }

    fn poll_changed(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), RecvError>> {
        let mut state = self.state.borrow_mut();
        if state.version != self.seen_version {
            self.seen_version = state.version;
            return Poll::Ready(Ok(()));
        }
        if !state.sender_alive {
            return Poll::Ready(Err(RecvError));
        }
        state.waiters.push(cx.waker().clone());
        Poll::Pending
    }
}

impl<T> Clone for Receiver<T> {
    fn clone(&self) -> Self {
        *self.receivers.borrow_mut() += 1;
        Self {
            state: Rc::clone(&self.state),
            receivers: Rc::clone(&self.receivers),
            seen_version: self.seen_version,
        }
    }
}

impl<T> Drop for Receiver<T> {
    fn drop(&mut self) {
        *self.receivers.borrow_mut() -= 1;
    }
}

/// Creates a new watch channel with an initial value.
///
/// The initial value counts as seen: `changed()` on the returned receiver
/// only resolves once a newer value is sent.
pub fn channel<T>(initial: T) -> (Sender<T>, Receiver<T>) {
    let state = Rc::new(RefCell::new(WatchState {
        value: initial,
        version: 0,
        sender_alive: true,
        waiters: Vec::new(),
    }));
    let receivers = Rc::new(RefCell::new(1));
    let sender = Sender {
        state: Rc::clone(&state),
        receivers: Rc::clone(&receivers),
    };
    let receiver = Receiver {
        state,
        receivers,
        seen_version: 0,
    };
    (sender, receiver)
}
