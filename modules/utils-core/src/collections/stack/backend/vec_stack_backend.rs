use core::num::NonZeroUsize;

use crate::collections::stack::{
  PushError, StackBackend, StackCapacityError, StackError, StackStorage, VecStackStorage,
};

#[cfg(test)]
mod tests;

/// Stack backend backed by [`VecStackStorage`].
#[derive(Debug, Clone)]
pub struct VecStackBackend<T> {
  storage: VecStackStorage<T>,
}

impl<T> VecStackBackend<T> {
  /// Creates a backend from the provided storage.
  #[must_use]
  pub const fn new_with_storage(storage: VecStackStorage<T>) -> Self {
    Self { storage }
  }

  /// Creates an empty backend able to hold `capacity` elements.
  #[must_use]
  pub fn with_capacity(capacity: NonZeroUsize) -> Self {
    Self::new_with_storage(VecStackStorage::with_capacity(capacity))
  }

  /// Creates an empty backend, rejecting a zero capacity.
  ///
  /// # Errors
  ///
  /// Returns [`StackCapacityError::Zero`] when `capacity` is `0`.
  pub fn try_with_capacity(capacity: usize) -> Result<Self, StackCapacityError> {
    VecStackStorage::try_with_capacity(capacity).map(Self::new_with_storage)
  }

  /// Returns the underlying storage.
  #[must_use]
  pub const fn storage(&self) -> &VecStackStorage<T> {
    &self.storage
  }
}

impl<T> StackBackend<T> for VecStackBackend<T> {
  type Storage = VecStackStorage<T>;

  fn new(storage: Self::Storage) -> Self {
    VecStackBackend::new_with_storage(storage)
  }

  fn push(&mut self, item: T) -> Result<(), PushError<T>> {
    if self.is_full() {
      tracing::debug!(target: "kitbag::stack", capacity = self.capacity(), "push rejected: stack is full");
      return Err(PushError(item));
    }
    self.storage.push_top(item);
    Ok(())
  }

  fn pop(&mut self) -> Result<T, StackError> {
    self.storage.pop_top().ok_or(StackError::Empty)
  }

  fn peek(&self) -> Option<&T> {
    self.storage.top()
  }

  fn len(&self) -> usize {
    self.storage.len()
  }

  fn capacity(&self) -> usize {
    self.storage.capacity()
  }
}
