use core::fmt;

use super::StackError;

/// Rejected push carrying the element back to the caller.
///
/// Returned when the stack is full; the stack is left unchanged and ownership of the element
/// returns to the caller, who decides whether to retry, drop, or park it elsewhere.
#[derive(Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("stack has reached full capacity")]
pub struct PushError<T>(pub T);

impl<T> PushError<T> {
  /// Returns the rejected element.
  pub fn into_inner(self) -> T {
    self.0
  }

  /// Returns the error kind, always [`StackError::Full`].
  #[must_use]
  pub const fn kind(&self) -> StackError {
    StackError::Full
  }
}

impl<T> fmt::Debug for PushError<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("PushError").finish_non_exhaustive()
  }
}

impl<T> From<PushError<T>> for StackError {
  fn from(_: PushError<T>) -> Self {
    StackError::Full
  }
}
