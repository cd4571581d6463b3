//! Centralized configuration (environment variables).

use std::ffi::OsString;

/// Name of the only variable this program reads.
pub const DATABASE_URL_VAR: &str = "DATABASE_URL";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{name} is not set")]
    Missing { name: &'static str },
}

/// Database URL must be provided (no default). Applies the presence rule to
/// an already looked-up value.
///
/// Unset and empty are both "missing". Anything else is accepted verbatim,
/// malformed URLs included; non-UTF-8 bytes are replaced lossily.
pub fn database_url_from(value: Option<OsString>) -> Result<String, ConfigError> {
    match value {
        Some(v) if !v.is_empty() => Ok(v.to_string_lossy().into_owned()),
        _ => Err(ConfigError::Missing {
            name: DATABASE_URL_VAR,
        }),
    }
}
