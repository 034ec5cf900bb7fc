/// Error raised when a stack is constructed with an unusable capacity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, thiserror::Error)]
pub enum StackCapacityError {
  /// A stack must be able to hold at least one element.
  #[error("stack capacity must be at least one")]
  Zero,
}
