use alloc::string::String;
use core::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};


/// Values accepted by the libpq `sslmode` parameter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SslMode {
  /// Only try a non-SSL connection.
  Disable,
  /// Try non-SSL first, then SSL.
  Allow,
  /// Try SSL first, then non-SSL. The libpq default.
  #[default]
  Prefer,
  /// Only try SSL, without verifying the server certificate.
  Require,
  /// Only try SSL and verify the server certificate against a trusted CA.
  VerifyCa,
  /// Like [`SslMode::VerifyCa`] and also check the host name.
  VerifyFull,
}

impl SslMode {
  /// Returns the libpq spelling of the mode.
  #[must_use]
  pub const fn as_str(self) -> &'static str {
    match self {
      | SslMode::Disable => "disable",
      | SslMode::Allow => "allow",
      | SslMode::Prefer => "prefer",
      | SslMode::Require => "require",
      | SslMode::VerifyCa => "verify-ca",
      | SslMode::VerifyFull => "verify-full",
    }
  }
}

impl fmt::Display for SslMode {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

/// Error returned when a string is not a known `sslmode` value.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown sslmode `{value}`")]
pub struct SslModeParseError {
  /// The rejected input.
  pub value: String,
}

impl FromStr for SslMode {
  type Err = SslModeParseError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      | "disable" => Ok(SslMode::Disable),
      | "allow" => Ok(SslMode::Allow),
      | "prefer" => Ok(SslMode::Prefer),
      | "require" => Ok(SslMode::Require),
      | "verify-ca" => Ok(SslMode::VerifyCa),
      | "verify-full" => Ok(SslMode::VerifyFull),
      | other => Err(SslModeParseError { value: other.into() }),
    }
  }
}
