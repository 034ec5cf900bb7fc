//! std-specific helpers for the bounded stack.

use kitbag_utils_core_rs::collections::stack::{StackCapacityError, SyncStack as CoreSyncStack, VecStackBackend};

use crate::sync::StdSyncRwLock;

#[cfg(test)]
mod tests;

/// Stack type alias backed by [`StdSyncRwLock`] and [`VecStackBackend`].
pub type StdVecSyncStack<T> = CoreSyncStack<T, VecStackBackend<T>, StdSyncRwLock<VecStackBackend<T>>>;

/// Constructs a new [`StdVecSyncStack`] holding at most `capacity` elements.
///
/// # Errors
///
/// Returns [`StackCapacityError::Zero`] when `capacity` is `0`.
pub fn make_std_vec_stack<T>(capacity: usize) -> Result<StdVecSyncStack<T>, StackCapacityError> {
  StdVecSyncStack::with_capacity(capacity)
}
