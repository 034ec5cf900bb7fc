use alloc::string::{String, ToString};
use core::fmt::{self, Write};

use serde::{de, Deserialize, Deserializer, Serialize};

use crate::pg::SslMode;


/// Port used when the configuration leaves `port` at `0`.
pub const DEFAULT_PORT: u16 = 5432;

/// Settings needed to open a Postgres connection, plus pool sizing hints.
///
/// The pool fields are carried for the caller's connection pool; they do not appear in the
/// connection string. Durations are in seconds.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConnectionConfig {
  /// Server host name or address.
  pub host:               String,
  /// Role to connect as.
  pub user:               String,
  /// Password for `user`.
  pub password:           String,
  /// Database name, rendered as `dbname`.
  pub database:           String,
  /// Server port; `0` selects [`DEFAULT_PORT`].
  pub port:               u16,
  /// SSL negotiation mode; `None` leaves the libpq default in place.
  ///
  /// An empty string deserialises as `None`.
  #[serde(rename = "sslmode", skip_serializing_if = "Option::is_none", deserialize_with = "deserialize_ssl_mode")]
  pub ssl_mode:           Option<SslMode>,
  /// Maximum number of open connections in the pool.
  pub max_open_conns:     u32,
  /// Maximum lifetime of a pooled connection, in seconds.
  pub conn_max_lifetime:  u64,
  /// Maximum number of idle connections in the pool.
  pub max_idle_conns:     u32,
  /// Maximum idle time of a pooled connection, in seconds.
  pub conn_max_idle_time: u64,
}

impl ConnectionConfig {
  /// Creates a configuration with the connection essentials; everything else is defaulted.
  #[must_use]
  pub fn new(
    host: impl Into<String>,
    user: impl Into<String>,
    password: impl Into<String>,
    database: impl Into<String>,
  ) -> Self {
    Self {
      host: host.into(),
      user: user.into(),
      password: password.into(),
      database: database.into(),
      ..Self::default()
    }
  }

  /// Sets the server port.
  #[must_use]
  pub fn with_port(mut self, port: u16) -> Self {
    self.port = port;
    self
  }

  /// Sets the SSL mode.
  #[must_use]
  pub fn with_ssl_mode(mut self, ssl_mode: SslMode) -> Self {
    self.ssl_mode = Some(ssl_mode);
    self
  }

  /// Returns the port that will be rendered, substituting [`DEFAULT_PORT`] for `0`.
  #[must_use]
  pub const fn effective_port(&self) -> u16 {
    if self.port == 0 {
      DEFAULT_PORT
    } else {
      self.port
    }
  }

  /// Renders the libpq keyword/value connection string.
  ///
  /// Keys appear in the order `host port user dbname password sslmode`. `sslmode` is left out when
  /// unset or `prefer`. Empty values and values containing whitespace, `'` or `\` are quoted.
  #[must_use]
  pub fn to_keyword_value(&self) -> String {
    self.to_string()
  }
}

impl fmt::Display for ConnectionConfig {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str("host=")?;
    write_value(f, &self.host)?;
    write!(f, " port={}", self.effective_port())?;
    f.write_str(" user=")?;
    write_value(f, &self.user)?;
    f.write_str(" dbname=")?;
    write_value(f, &self.database)?;
    f.write_str(" password=")?;
    write_value(f, &self.password)?;
    match self.ssl_mode {
      | Some(SslMode::Prefer) | None => Ok(()),
      | Some(mode) => write!(f, " sslmode={mode}"),
    }
  }
}

impl fmt::Debug for ConnectionConfig {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("ConnectionConfig")
      .field("host", &self.host)
      .field("user", &self.user)
      .field("password", &"<redacted>")
      .field("database", &self.database)
      .field("port", &self.port)
      .field("ssl_mode", &self.ssl_mode)
      .field("max_open_conns", &self.max_open_conns)
      .field("conn_max_lifetime", &self.conn_max_lifetime)
      .field("max_idle_conns", &self.max_idle_conns)
      .field("conn_max_idle_time", &self.conn_max_idle_time)
      .finish()
  }
}

fn deserialize_ssl_mode<'de, D>(deserializer: D) -> Result<Option<SslMode>, D::Error>
where
  D: Deserializer<'de>, {
  match Option::<String>::deserialize(deserializer)?.as_deref().map(str::trim) {
    | None | Some("") => Ok(None),
    | Some(value) => value.parse().map(Some).map_err(de::Error::custom),
  }
}

fn write_value(f: &mut fmt::Formatter<'_>, value: &str) -> fmt::Result {
  let needs_quotes = value.is_empty() || value.chars().any(|c| c.is_whitespace() || c == '\'' || c == '\\');
  if !needs_quotes {
    return f.write_str(value);
  }
  f.write_char('\'')?;
  for c in value.chars() {
    if c == '\'' || c == '\\' {
      f.write_char('\\')?;
    }
    f.write_char(c)?;
  }
  f.write_char('\'')
}
