//! Error types for settings loading and validation.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result alias for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Primary error type for configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Reading the settings file failed.
    #[error("failed to read settings file")]
    Io {
        /// File that could not be read.
        path: PathBuf,
        /// Source IO error.
        source: io::Error,
    },
    /// The settings document was not valid JSON for [`crate::ApiSettings`].
    #[error("settings document is not valid")]
    Parse {
        /// Source serde error.
        source: serde_json::Error,
    },
    /// A field contained an invalid value.
    #[error("invalid settings field '{field}': {reason}")]
    InvalidField {
        /// Field that failed validation.
        field: String,
        /// Offending value when available.
        value: Option<String>,
        /// Machine-readable reason for the failure.
        reason: &'static str,
    },
}

impl ConfigError {
    pub(crate) fn invalid(field: impl Into<String>, value: &str, reason: &'static str) -> Self {
        Self::InvalidField {
            field: field.into(),
            value: Some(value.to_string()),
            reason,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ConfigError;
    use std::error::Error;
    use std::io;
    use std::path::PathBuf;

    #[test]
    fn display_and_source() {
        let io_err = ConfigError::Io {
            path: PathBuf::from("settings.json"),
            source: io::Error::other("io"),
        };
        assert_eq!(io_err.to_string(), "failed to read settings file");
        assert!(io_err.source().is_some());

        let invalid = ConfigError::invalid("corePingUrl", "nope", "must be an absolute URL");
        assert_eq!(
            invalid.to_string(),
            "invalid settings field 'corePingUrl': must be an absolute URL"
        );
        assert!(invalid.source().is_none());
    }
}
