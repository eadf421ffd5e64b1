//! Error types for daemon requests.

use thiserror::Error;

/// Result alias for daemon operations.
pub type CoreResult<T> = Result<T, CoreClientError>;

/// Failures raised by fallible daemon operations.
#[derive(Debug, Error)]
pub enum CoreClientError {
    /// The configured hosted data location has no supported storage driver.
    #[error("only the \"dropbox\" storage driver is supported, not \"{location}\"")]
    UnsupportedStorageDriver {
        /// Configured hosted data location.
        location: &'static str,
    },
    /// The request could not be sent or the body could not be read.
    #[error("request to {url} failed")]
    Transport {
        /// Target URL.
        url: String,
        /// Source transport error.
        source: reqwest::Error,
    },
    /// The daemon answered with an unexpected status.
    #[error("{url} responded with {status} {reason}")]
    Status {
        /// Target URL.
        url: String,
        /// HTTP status code.
        status: u16,
        /// Canonical reason phrase for the status.
        reason: &'static str,
    },
    /// The response body was not the expected JSON document.
    #[error("response from {url} could not be decoded")]
    Decode {
        /// Target URL.
        url: String,
        /// Source serde error.
        source: serde_json::Error,
    },
    /// A name suffix has no registrar configured.
    #[error("no registrar is configured for suffix \"{suffix}\"")]
    UnknownSuffix {
        /// Suffix that could not be resolved.
        suffix: String,
    },
    /// Signing or uploading the profile failed.
    #[error("profile publishing failed: {message}")]
    Publish {
        /// Collaborator-provided detail.
        message: String,
    },
}

impl CoreClientError {
    pub(crate) fn status(url: &str, status: reqwest::StatusCode) -> Self {
        Self::Status {
            url: url.to_string(),
            status: status.as_u16(),
            reason: status.canonical_reason().unwrap_or("Unknown Status"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::CoreClientError;
    use reqwest::StatusCode;

    #[test]
    fn status_error_uses_canonical_reason() {
        let err = CoreClientError::status("http://core/v1/ping", StatusCode::UNAUTHORIZED);
        assert_eq!(
            err.to_string(),
            "http://core/v1/ping responded with 401 Unauthorized"
        );
    }

    #[test]
    fn unsupported_driver_names_the_location() {
        let err = CoreClientError::UnsupportedStorageDriver {
            location: "gaia-hub",
        };
        assert_eq!(
            err.to_string(),
            "only the \"dropbox\" storage driver is supported, not \"gaia-hub\""
        );
    }
}
