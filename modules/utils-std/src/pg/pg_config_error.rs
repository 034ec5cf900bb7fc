use kitbag_utils_core_rs::pg::SslModeParseError;

use crate::env::EnvError;

/// Errors raised while loading a Postgres configuration from the environment.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum PgConfigError {
  /// A required variable is missing.
  #[error(transparent)]
  Env(#[from] EnvError),
  /// The port variable is not a valid TCP port.
  #[error("invalid postgres port `{value}`")]
  InvalidPort {
    /// The rejected input.
    value: String,
  },
  /// The sslmode variable is not a libpq value.
  #[error(transparent)]
  InvalidSslMode(#[from] SslModeParseError),
}
