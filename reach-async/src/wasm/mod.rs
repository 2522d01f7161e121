//! Browser-specific implementations of the async primitives.
//!
//! Everything in here is single-threaded: the types use `Rc`/`RefCell`
//! internally and are not `Send`, which is fine because wasm32 builds never
//! move futures across threads.

pub mod cancel;
pub mod task;
pub mod watch;
