//! Capacity-bounded stack.
//!
//! The stack is split into three layers:
//!
//! * [`StackStorage`] owns the elements and knows its fixed capacity.
//! * [`StackBackend`] applies the push/pop rules on top of a storage through `&mut self`.
//! * [`SyncStack`] shares a backend behind a [`SyncRwLockLike`](crate::sync::SyncRwLockLike) lock
//!   so that any number of threads may push, pop, and peek concurrently.
//!
//! Push and pop take the lock exclusively, peek takes it shared, and none of them waits for space
//! or content: a full stack rejects the push with [`PushError`] and an empty one reports
//! [`StackError::Empty`].

pub mod backend;
pub mod storage;
mod sync_stack;

pub use backend::{PushError, StackBackend, StackCapacityError, StackError, VecStackBackend};
pub use storage::{StackStorage, VecStackStorage};
pub use sync_stack::SyncStack;

use crate::sync::SpinRwLock;

/// Default shared stack alias backed by [`VecStackBackend`] and a spin reader-writer lock.
pub type SharedVecStack<T> = SyncStack<T, VecStackBackend<T>, SpinRwLock<VecStackBackend<T>>>;
