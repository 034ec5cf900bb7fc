use std::{
  collections::HashMap,
  io::Write,
  sync::{Arc, Mutex},
};

use kitbag_utils_core_rs::pg::SslMode;
use tracing::subscriber::with_default;
use tracing_subscriber::fmt;

use super::*;
use crate::env::EnvError;

fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
  pairs.iter().map(|(key, value)| ((*key).to_owned(), (*value).to_owned())).collect()
}

fn base() -> Vec<(&'static str, &'static str)> {
  vec![(POSTGRES_HOST, "db.internal"), (POSTGRES_USER, "postgres"), (POSTGRES_DB, "app")]
}

#[test]
fn loads_required_fields_with_defaults() {
  let config = connection_config_from_env(&env(&base())).unwrap();
  assert_eq!(config.host, "db.internal");
  assert_eq!(config.user, "postgres");
  assert_eq!(config.database, "app");
  assert_eq!(config.password, "");
  assert_eq!(config.port, 0);
  assert_eq!(config.ssl_mode, None);
  assert_eq!(config.to_keyword_value(), "host=db.internal port=5432 user=postgres dbname=app password=''");
}

#[test]
fn loads_optional_fields() {
  let mut pairs = base();
  pairs.extend([(POSTGRES_PASSWORD, "secret"), (POSTGRES_PORT, "6432"), (POSTGRES_SSLMODE, "verify-full")]);
  let config = connection_config_from_env(&env(&pairs)).unwrap();
  assert_eq!(config.port, 6432);
  assert_eq!(config.ssl_mode, Some(SslMode::VerifyFull));
  assert_eq!(
    config.to_keyword_value(),
    "host=db.internal port=6432 user=postgres dbname=app password=secret sslmode=verify-full"
  );
}

#[test]
fn missing_required_variable_is_reported() {
  let pairs = [(POSTGRES_HOST, "db.internal"), (POSTGRES_USER, "postgres")];
  let err = connection_config_from_env(&env(&pairs)).unwrap_err();
  assert_eq!(err, PgConfigError::Env(EnvError::MissingVariable { key: POSTGRES_DB.to_owned() }));
}

#[test]
fn malformed_port_is_rejected() {
  let mut pairs = base();
  pairs.push((POSTGRES_PORT, "70000"));
  let err = connection_config_from_env(&env(&pairs)).unwrap_err();
  assert_eq!(err, PgConfigError::InvalidPort { value: "70000".to_owned() });
  assert_eq!(err.to_string(), "invalid postgres port `70000`");
}

#[test]
fn malformed_sslmode_is_rejected() {
  let mut pairs = base();
  pairs.push((POSTGRES_SSLMODE, "sometimes"));
  let err = connection_config_from_env(&env(&pairs)).unwrap_err();
  assert!(matches!(err, PgConfigError::InvalidSslMode(ref inner) if inner.value == "sometimes"));
  assert_eq!(err.to_string(), "unknown sslmode `sometimes`");
}

struct CaptureWriter {
  buffer: Arc<Mutex<Vec<u8>>>,
}

impl Write for CaptureWriter {
  fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
    let mut guard = self.buffer.lock().unwrap();
    guard.extend_from_slice(buf);
    Ok(buf.len())
  }

  fn flush(&mut self) -> std::io::Result<()> {
    Ok(())
  }
}

fn capture_logs(f: impl FnOnce()) -> String {
  let buffer: Arc<Mutex<Vec<u8>>> = Arc::new(Mutex::new(Vec::new()));
  let writer_source = buffer.clone();
  let subscriber = fmt::SubscriberBuilder::default()
    .with_max_level(tracing::Level::DEBUG)
    .with_writer(move || CaptureWriter { buffer: writer_source.clone() })
    .with_ansi(false)
    .finish();
  with_default(subscriber, f);
  let output = buffer.lock().unwrap().clone();
  String::from_utf8(output).unwrap()
}

#[test]
fn absent_optional_variables_are_not_logged_as_missing() {
  let output = capture_logs(|| {
    connection_config_from_env(&env(&base())).unwrap();
  });
  assert!(output.contains("postgres configuration loaded"));
  assert!(!output.contains("environment variable missing"));
}

#[test]
fn absent_required_variable_is_logged_as_missing() {
  let pairs = [(POSTGRES_HOST, "db.internal"), (POSTGRES_DB, "app")];
  let output = capture_logs(|| {
    assert!(connection_config_from_env(&env(&pairs)).is_err());
  });
  assert!(output.contains("environment variable missing"));
  assert!(output.contains("key=\"POSTGRES_USER\""));
}
