//! Postgres configuration loaded from environment variables.
//!
//! | Variable            | Field      | Required |
//! |---------------------|------------|----------|
//! | `POSTGRES_HOST`     | `host`     | yes      |
//! | `POSTGRES_USER`     | `user`     | yes      |
//! | `POSTGRES_DB`       | `database` | yes      |
//! | `POSTGRES_PASSWORD` | `password` | no       |
//! | `POSTGRES_PORT`     | `port`     | no       |
//! | `POSTGRES_SSLMODE`  | `ssl_mode` | no       |

mod pg_config_error;

use kitbag_utils_core_rs::pg::{ConnectionConfig, SslMode};
pub use pg_config_error::PgConfigError;

use crate::env::{get_env_from, EnvSource, ProcessEnv};

#[cfg(test)]
mod tests;

/// Variable holding the server host.
pub const POSTGRES_HOST: &str = "POSTGRES_HOST";
/// Variable holding the server port.
pub const POSTGRES_PORT: &str = "POSTGRES_PORT";
/// Variable holding the role name.
pub const POSTGRES_USER: &str = "POSTGRES_USER";
/// Variable holding the role password.
pub const POSTGRES_PASSWORD: &str = "POSTGRES_PASSWORD";
/// Variable holding the database name.
pub const POSTGRES_DB: &str = "POSTGRES_DB";
/// Variable holding the `sslmode` value.
pub const POSTGRES_SSLMODE: &str = "POSTGRES_SSLMODE";

/// Builds a [`ConnectionConfig`] from `source`.
///
/// Pool sizing fields are left at their defaults.
///
/// # Errors
///
/// Returns [`PgConfigError::Env`] when a required variable is missing,
/// [`PgConfigError::InvalidPort`] when the port is not a `u16`, and
/// [`PgConfigError::InvalidSslMode`] when the sslmode is not a libpq value.
pub fn connection_config_from_env<E: EnvSource + ?Sized>(source: &E) -> Result<ConnectionConfig, PgConfigError> {
  let host = get_env_from(source, POSTGRES_HOST)?;
  let user = get_env_from(source, POSTGRES_USER)?;
  let database = get_env_from(source, POSTGRES_DB)?;
  let password = optional_var(source, POSTGRES_PASSWORD).unwrap_or_default();

  let mut config = ConnectionConfig::new(host, user, password, database);
  if let Some(value) = optional_var(source, POSTGRES_PORT) {
    let port = value.trim().parse::<u16>().map_err(|_| PgConfigError::InvalidPort { value })?;
    config = config.with_port(port);
  }
  if let Some(value) = optional_var(source, POSTGRES_SSLMODE) {
    config = config.with_ssl_mode(value.trim().parse::<SslMode>()?);
  }
  tracing::debug!(host = %config.host, port = config.effective_port(), "postgres configuration loaded");
  Ok(config)
}

fn optional_var<E: EnvSource + ?Sized>(source: &E, key: &str) -> Option<String> {
  source.var(key).filter(|value| !value.is_empty())
}

/// Builds a [`ConnectionConfig`] from the process environment.
///
/// # Errors
///
/// See [`connection_config_from_env`].
pub fn connection_config_from_process_env() -> Result<ConnectionConfig, PgConfigError> {
  connection_config_from_env(&ProcessEnv)
}
