//! Postgres connection configuration.
//!
//! [`ConnectionConfig`] deserialises from the usual `host`/`user`/`password`/`database`/`port`/
//! `sslmode` keys (plus connection-pool sizing hints) and renders the libpq keyword/value
//! connection string.

mod connection_config;
mod ssl_mode;

pub use connection_config::{ConnectionConfig, DEFAULT_PORT};
pub use ssl_mode::{SslMode, SslModeParseError};
