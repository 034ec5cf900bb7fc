use crate::collections::stack::{PushError, StackError, StackStorage};

/// Backend trait responsible for stack operations on top of a storage implementation.
///
/// Backends are single-owner (`&mut self`); sharing across threads is the facade's concern.
pub trait StackBackend<T> {
  /// Storage implementation backing the stack.
  type Storage: StackStorage<T>;

  /// Constructs a backend over the provided storage.
  fn new(storage: Self::Storage) -> Self;

  /// Places an element on top of the stack.
  ///
  /// # Errors
  ///
  /// Returns the element inside [`PushError`] when the stack is already full.
  fn push(&mut self, item: T) -> Result<(), PushError<T>>;

  /// Removes and returns the most recently pushed element.
  ///
  /// # Errors
  ///
  /// Returns [`StackError::Empty`] when there is nothing to pop.
  fn pop(&mut self) -> Result<T, StackError>;

  /// Returns a reference to the top element without removing it.
  fn peek(&self) -> Option<&T>;

  /// Returns the number of elements currently stored.
  fn len(&self) -> usize;

  /// Returns the fixed capacity.
  fn capacity(&self) -> usize;

  /// Indicates whether the stack is empty.
  fn is_empty(&self) -> bool {
    self.len() == 0
  }

  /// Indicates whether the stack is full.
  fn is_full(&self) -> bool {
    self.len() >= self.capacity()
  }
}
