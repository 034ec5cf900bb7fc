
use alloc::sync::Arc;
use core::ops::Deref;

/// Shared ownership wrapper using `Arc`.
///
/// Collection facades hold their lock through this handle so that clones observe the same state.
pub struct ArcShared<T: ?Sized>(Arc<T>);

impl<T: ?Sized> core::fmt::Debug for ArcShared<T> {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.debug_struct("ArcShared").finish()
  }
}

impl<T> ArcShared<T> {
  /// Creates a new `ArcShared` from a value.
  #[must_use]
  pub fn new(value: T) -> Self {
    Self(Arc::new(value))
  }

  /// Attempts to take the value back out when this is the only handle.
  ///
  /// # Errors
  ///
  /// Returns `Err(self)` if there are other owners of the value.
  pub fn try_unwrap(self) -> Result<T, Self> {
    Arc::try_unwrap(self.0).map_err(ArcShared)
  }
}

impl<T: ?Sized> ArcShared<T> {
  /// Creates `ArcShared` from an existing `Arc`.
  #[must_use]
  pub const fn from_arc(inner: Arc<T>) -> Self {
    Self(inner)
  }

  /// Converts `ArcShared` into the internal `Arc`.
  #[must_use]
  pub fn into_arc(self) -> Arc<T> {
    self.0
  }

  /// Returns `true` when both handles point at the same allocation.
  #[must_use]
  pub fn ptr_eq(&self, other: &Self) -> bool {
    Arc::ptr_eq(&self.0, &other.0)
  }

  /// Executes the provided closure with a shared reference to the inner value.
  pub fn with_ref<R>(&self, f: impl FnOnce(&T) -> R) -> R {
    f(&self.0)
  }
}

impl<T: ?Sized> Deref for ArcShared<T> {
  type Target = T;

  fn deref(&self) -> &Self::Target {
    &self.0
  }
}

impl<T: ?Sized> Clone for ArcShared<T> {
  fn clone(&self) -> Self {
    Self(self.0.clone())
  }
}
