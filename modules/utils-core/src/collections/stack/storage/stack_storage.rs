/// Low-level storage used by stack backends.
///
/// Storage does not enforce the capacity; that is the backend's job. It only reports it.
pub trait StackStorage<T> {
  /// Returns the maximum number of elements the storage is meant to hold.
  fn capacity(&self) -> usize;

  /// Returns the number of stored elements.
  fn len(&self) -> usize;

  /// Indicates whether no element is stored.
  fn is_empty(&self) -> bool {
    self.len() == 0
  }

  /// Places an element on top.
  fn push_top(&mut self, item: T);

  /// Removes and returns the top element.
  fn pop_top(&mut self) -> Option<T>;

  /// Returns a reference to the top element.
  fn top(&self) -> Option<&T>;
}
