/// Errors raised by environment lookups.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EnvError {
  /// The variable is unset or holds an empty value.
  #[error("environment variable `{key}` is not set")]
  MissingVariable {
    /// Name of the variable that was looked up.
    key: String,
  },
}

impl EnvError {
  /// Returns the name of the variable the error refers to.
  #[must_use]
  pub fn key(&self) -> &str {
    match self {
      | EnvError::MissingVariable { key } => key,
    }
  }
}
