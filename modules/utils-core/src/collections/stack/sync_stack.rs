use core::marker::PhantomData;

use crate::{
  collections::stack::{PushError, StackBackend, StackCapacityError, StackError, VecStackBackend},
  sync::{ArcShared, SpinRwLock, SyncRwLockLike},
};

/// Thread-safe, capacity-bounded LIFO stack.
///
/// Clones share the same backend. [`push`](Self::push) and [`pop`](Self::pop) take the lock
/// exclusively, [`peek`](Self::peek) takes it shared, so concurrent peeks never block each other.
/// Every successful push and pop is applied atomically with respect to all other operations, which
/// orders them globally; LIFO order is defined relative to that order.
///
/// [`len`](Self::len), [`is_empty`](Self::is_empty) and [`is_full`](Self::is_full) read the backend
/// under the shared lock, so every handle over the same backend agrees with its contents. The answer
/// is advisory: another thread may change the stack before the caller acts on it, so `!is_full()`
/// is not a promise that the next push succeeds.
pub struct SyncStack<T, B, L = SpinRwLock<B>>
where
  B: StackBackend<T>,
  L: SyncRwLockLike<B>, {
  inner: ArcShared<L>,
  _pd:   PhantomData<(T, B)>,
}

impl<T, B, L> SyncStack<T, B, L>
where
  B: StackBackend<T>,
  L: SyncRwLockLike<B>,
{
  /// Creates a new stack from the provided shared backend.
  ///
  /// The backend may already hold elements. Stacks created over the same backend share its state.
  #[must_use]
  pub const fn new(shared_backend: ArcShared<L>) -> Self {
    Self { inner: shared_backend, _pd: PhantomData }
  }

  /// Pushes an item onto the stack.
  ///
  /// # Errors
  ///
  /// Returns the item inside [`PushError`] when the stack is full. Nothing is modified.
  pub fn push(&self, item: T) -> Result<(), PushError<T>> {
    self.inner.write().push(item)
  }

  /// Pops the most recently pushed item.
  ///
  /// # Errors
  ///
  /// Returns [`StackError::Empty`] when the stack holds no element. Nothing is modified.
  pub fn pop(&self) -> Result<T, StackError> {
    self.inner.write().pop()
  }

  /// Returns a clone of the top item without removing it.
  ///
  /// # Errors
  ///
  /// Returns [`StackError::Empty`] when the stack holds no element.
  pub fn peek(&self) -> Result<T, StackError>
  where
    T: Clone, {
    self.peek_with(T::clone)
  }

  /// Runs `f` against the top item while holding shared access.
  ///
  /// Useful for element types that are not `Clone` or are expensive to copy.
  ///
  /// # Errors
  ///
  /// Returns [`StackError::Empty`] when the stack holds no element; `f` is not called.
  pub fn peek_with<R>(&self, f: impl FnOnce(&T) -> R) -> Result<R, StackError> {
    let guard = self.inner.read();
    guard.peek().map(f).ok_or(StackError::Empty)
  }

  /// Returns the number of stored elements. Advisory under concurrency.
  #[must_use]
  pub fn len(&self) -> usize {
    self.inner.read().len()
  }

  /// Returns the fixed capacity.
  #[must_use]
  pub fn capacity(&self) -> usize {
    self.inner.read().capacity()
  }

  /// Indicates whether the stack is empty. Advisory under concurrency.
  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.inner.read().is_empty()
  }

  /// Indicates whether the stack is full. Advisory under concurrency.
  #[must_use]
  pub fn is_full(&self) -> bool {
    self.inner.read().is_full()
  }

  /// Provides access to the underlying shared backend.
  #[must_use]
  pub const fn shared(&self) -> &ArcShared<L> {
    &self.inner
  }
}

impl<T, L> SyncStack<T, VecStackBackend<T>, L>
where
  L: SyncRwLockLike<VecStackBackend<T>>,
{
  /// Creates an empty vector-backed stack holding at most `capacity` elements.
  ///
  /// # Errors
  ///
  /// Returns [`StackCapacityError::Zero`] when `capacity` is `0`.
  pub fn with_capacity(capacity: usize) -> Result<Self, StackCapacityError> {
    let backend = VecStackBackend::try_with_capacity(capacity)?;
    Ok(Self::new(ArcShared::new(L::new(backend))))
  }
}

impl<T, B, L> Clone for SyncStack<T, B, L>
where
  B: StackBackend<T>,
  L: SyncRwLockLike<B>,
{
  fn clone(&self) -> Self {
    Self { inner: self.inner.clone(), _pd: PhantomData }
  }
}

impl<T, B, L> core::fmt::Debug for SyncStack<T, B, L>
where
  B: StackBackend<T>,
  L: SyncRwLockLike<B>,
{
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    let guard = self.inner.read();
    f.debug_struct("SyncStack").field("len", &guard.len()).field("capacity", &guard.capacity()).finish()
  }
}
