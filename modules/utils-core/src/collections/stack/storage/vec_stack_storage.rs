use alloc::vec::Vec;
use core::num::NonZeroUsize;

use super::StackStorage;
use crate::collections::stack::StackCapacityError;

/// Vector-backed storage with a fixed, positive capacity.
///
/// The whole capacity is reserved up front so pushes within bounds never reallocate.
#[derive(Debug, Clone)]
pub struct VecStackStorage<T> {
  buffer:   Vec<T>,
  capacity: usize,
}

impl<T> VecStackStorage<T> {
  /// Creates empty storage able to hold `capacity` elements.
  #[must_use]
  pub fn with_capacity(capacity: NonZeroUsize) -> Self {
    let capacity = capacity.get();
    Self { buffer: Vec::with_capacity(capacity), capacity }
  }

  /// Creates empty storage, rejecting a zero capacity.
  ///
  /// # Errors
  ///
  /// Returns [`StackCapacityError::Zero`] when `capacity` is `0`.
  pub fn try_with_capacity(capacity: usize) -> Result<Self, StackCapacityError> {
    NonZeroUsize::new(capacity).map(Self::with_capacity).ok_or(StackCapacityError::Zero)
  }

  /// Returns the stored elements from bottom to top.
  #[must_use]
  pub fn as_slice(&self) -> &[T] {
    &self.buffer
  }
}

impl<T> StackStorage<T> for VecStackStorage<T> {
  fn capacity(&self) -> usize {
    self.capacity
  }

  fn len(&self) -> usize {
    self.buffer.len()
  }

  fn push_top(&mut self, item: T) {
    debug_assert!(self.buffer.len() < self.capacity, "push beyond storage capacity");
    self.buffer.push(item);
  }

  fn pop_top(&mut self) -> Option<T> {
    self.buffer.pop()
  }

  fn top(&self) -> Option<&T> {
    self.buffer.last()
  }
}
