//! Environment-variable lookup.
//!
//! Lookups go through [`EnvSource`] so the same code can read the process environment or an
//! in-memory map. A variable that is unset, empty, or not valid unicode counts as missing and is
//! reported as [`EnvError::MissingVariable`].

mod env_error;

use std::{
  collections::{BTreeMap, HashMap},
  hash::BuildHasher,
};

pub use env_error::EnvError;


/// Source of environment-style key/value pairs.
pub trait EnvSource {
  /// Returns the raw value stored under `key`, if any.
  fn var(&self, key: &str) -> Option<String>;
}

/// [`EnvSource`] reading the current process environment.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
  fn var(&self, key: &str) -> Option<String> {
    std::env::var(key).ok()
  }
}

impl<S: BuildHasher> EnvSource for HashMap<String, String, S> {
  fn var(&self, key: &str) -> Option<String> {
    self.get(key).cloned()
  }
}

impl EnvSource for BTreeMap<String, String> {
  fn var(&self, key: &str) -> Option<String> {
    self.get(key).cloned()
  }
}

impl<E: EnvSource + ?Sized> EnvSource for &E {
  fn var(&self, key: &str) -> Option<String> {
    (**self).var(key)
  }
}

/// Reads `key` from the process environment.
///
/// # Errors
///
/// Returns [`EnvError::MissingVariable`] when the variable is unset or empty.
pub fn get_env(key: &str) -> Result<String, EnvError> {
  get_env_from(&ProcessEnv, key)
}

/// Reads `key` from `source`.
///
/// # Errors
///
/// Returns [`EnvError::MissingVariable`] when the variable is unset or empty.
pub fn get_env_from<E: EnvSource + ?Sized>(source: &E, key: &str) -> Result<String, EnvError> {
  match source.var(key) {
    | Some(value) if !value.is_empty() => Ok(value),
    | _ => {
      tracing::debug!(key, "environment variable missing");
      Err(EnvError::MissingVariable { key: key.to_owned() })
    }
  }
}

/// Reads `key` from the process environment, falling back to `fallback` when it is missing.
pub fn get_env_or(key: &str, fallback: impl Into<String>) -> String {
  get_env_or_from(&ProcessEnv, key, fallback)
}

/// Reads `key` from `source`, falling back to `fallback` when it is missing.
pub fn get_env_or_from<E: EnvSource + ?Sized>(source: &E, key: &str, fallback: impl Into<String>) -> String {
  get_env_from(source, key).unwrap_or_else(|_| fallback.into())
}
