//! WASM cancellation token.
//!
//! Single-threaded equivalent of `tokio_util::sync::CancellationToken` with
//! the subset of the API the observation helpers use: `clone`, `cancel`,
//! `is_cancelled` and the awaitable `cancelled()` future.

use std::cell::RefCell;
use std::rc::Rc;
use std::task::{Context, Poll, Waker};

struct CancelState {
    cancelled: bool,
    waiters: Vec<Waker>,
}

/// A token that can be cancelled once; clones observe the same state.
#[derive(Clone)]
pub struct CancellationToken {
    state: Rc<RefCell<CancelState>>,
}

impl CancellationToken {
    /// Creates a new, uncancelled token.
    pub fn new() -> Self {
        Self {
            state: Rc::new(RefCell::new(CancelState {
                cancelled: false,
                waiters: Vec::new(),
            })),
        }
    }

    /// Cancels the token, waking every pending `cancelled()` future.
    pub fn cancel(&self) {
        let waiters = {
            let mut state = self.state.borrow_mut();
            state.cancelled = true;
            std::mem::take(&mut state.waiters)
        };
        for waker in waiters {
            waker.wake();
        }
    }

    /// Returns `true` once `cancel` has been called on any clone.
    pub fn is_cancelled(&self) -> bool {
        self.state.borrow().cancelled
    }

    /// Resolves once the token is cancelled.
    pub async fn cancelled(&self) {
        futures::future::poll_fn(|cx| {
            let mut state = self.state.borrow_mut();
            if state.cancelled {
                Poll::Ready(())
            } else {
                state.waiters.push(cx.waker().clone());
                Poll::Pending
            }
        })
        .await;
    }
}

impl Default for CancellationToken {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for CancellationToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CancellationToken")
            .field("is_cancelled", &self.is_cancelled())
            .finish()
    }
}
