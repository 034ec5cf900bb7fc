/// Errors reported by stack operations.
///
/// Both conditions are expected and recoverable; the stack state is left untouched.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, thiserror::Error)]
pub enum StackError {
  /// The stack holds `capacity` elements and cannot accept another one.
  #[error("stack has reached full capacity")]
  Full,
  /// The stack holds no element to pop or peek.
  #[error("stack is empty")]
  Empty,
}
