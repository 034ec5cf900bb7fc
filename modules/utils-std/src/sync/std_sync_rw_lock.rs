//! Wrapper around `std::sync::RwLock` implementing the core `SyncRwLockLike` trait.

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use kitbag_utils_core_rs::sync::SyncRwLockLike;


/// Thin wrapper over [`std::sync::RwLock`] for synchronous std environments.
///
/// Poisoning is not surfaced; guards are recovered from a poisoned lock.
pub struct StdSyncRwLock<T>(RwLock<T>);

impl<T> StdSyncRwLock<T> {
  /// Creates a new lock guarding the provided value.
  #[must_use]
  pub const fn new(value: T) -> Self {
    Self(RwLock::new(value))
  }

  /// Consumes the lock and returns the inner value.
  pub fn into_inner(self) -> T {
    self.0.into_inner().unwrap_or_else(|err| err.into_inner())
  }

  /// Returns a reference to the underlying `std::sync::RwLock`.
  #[must_use]
  pub const fn as_inner(&self) -> &RwLock<T> {
    &self.0
  }

  /// Acquires shared access.
  pub fn read(&self) -> RwLockReadGuard<'_, T> {
    self.0.read().unwrap_or_else(|err| err.into_inner())
  }

  /// Acquires exclusive access.
  pub fn write(&self) -> RwLockWriteGuard<'_, T> {
    self.0.write().unwrap_or_else(|err| err.into_inner())
  }
}

impl<T> SyncRwLockLike<T> for StdSyncRwLock<T> {
  type ReadGuard<'a>
    = RwLockReadGuard<'a, T>
  where
    T: 'a;
  type WriteGuard<'a>
    = RwLockWriteGuard<'a, T>
  where
    T: 'a;

  fn new(value: T) -> Self {
    StdSyncRwLock::new(value)
  }

  fn into_inner(self) -> T {
    StdSyncRwLock::into_inner(self)
  }

  fn read(&self) -> Self::ReadGuard<'_> {
    StdSyncRwLock::read(self)
  }

  fn write(&self) -> Self::WriteGuard<'_> {
    StdSyncRwLock::write(self)
  }
}
