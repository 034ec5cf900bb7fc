use crate::sync::rw_lock_like::SyncRwLockLike;


/// Thin wrapper around [`spin::RwLock`] implementing [`SyncRwLockLike`].
///
/// Usable without an operating system; waiting readers and writers spin.
pub struct SpinRwLock<T>(spin::RwLock<T>);

impl<T> SpinRwLock<T> {
  /// Creates a new spinlock-protected value.
  #[must_use]
  pub const fn new(value: T) -> Self {
    Self(spin::RwLock::new(value))
  }

  /// Returns a reference to the inner spin lock.
  #[must_use]
  pub const fn as_inner(&self) -> &spin::RwLock<T> {
    &self.0
  }

  /// Consumes the wrapper and returns the underlying value.
  pub fn into_inner(self) -> T {
    self.0.into_inner()
  }

  /// Acquires shared access.
  pub fn read(&self) -> spin::RwLockReadGuard<'_, T> {
    self.0.read()
  }

  /// Acquires exclusive access.
  pub fn write(&self) -> spin::RwLockWriteGuard<'_, T> {
    self.0.write()
  }
}

impl<T> SyncRwLockLike<T> for SpinRwLock<T> {
  type ReadGuard<'a>
    = spin::RwLockReadGuard<'a, T>
  where
    T: 'a;
  type WriteGuard<'a>
    = spin::RwLockWriteGuard<'a, T>
  where
    T: 'a;

  fn new(value: T) -> Self {
    SpinRwLock::new(value)
  }

  fn into_inner(self) -> T {
    SpinRwLock::into_inner(self)
  }

  fn read(&self) -> Self::ReadGuard<'_> {
    SpinRwLock::read(self)
  }

  fn write(&self) -> Self::WriteGuard<'_> {
    SpinRwLock::write(self)
  }
}
