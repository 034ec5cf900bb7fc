mod spin_rw_lock;

use core::ops::{Deref, DerefMut};

pub use spin_rw_lock::SpinRwLock;

/// Reader-writer lock abstraction for runtime-agnostic code.
///
/// Many readers may hold [`SyncRwLockLike::read`] guards at once; a [`SyncRwLockLike::write`] guard
/// is exclusive with every other guard. Implementations never fail: a lock left poisoned by a
/// panicking writer is recovered rather than reported.
pub trait SyncRwLockLike<T> {
  /// Guard type returned by [`SyncRwLockLike::read`].
  type ReadGuard<'a>: Deref<Target = T>
  where
    Self: 'a,
    T: 'a;

  /// Guard type returned by [`SyncRwLockLike::write`].
  type WriteGuard<'a>: Deref<Target = T> + DerefMut
  where
    Self: 'a,
    T: 'a;

  /// Creates a new lock wrapping the provided value.
  fn new(value: T) -> Self;

  /// Consumes the lock and returns the inner value.
  fn into_inner(self) -> T;

  /// Acquires shared access.
  fn read(&self) -> Self::ReadGuard<'_>;

  /// Acquires exclusive access.
  fn write(&self) -> Self::WriteGuard<'_>;
}
