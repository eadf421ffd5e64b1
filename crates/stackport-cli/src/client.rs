//! Settings resolution, shared HTTP client, and error types for the CLI.

use std::fmt::{self, Display, Formatter};
use std::time::Duration;

use anyhow::anyhow;
use reqwest::Client;
use reqwest::header::{HeaderMap, HeaderValue};
use stackport_config::{ApiSettings, ConfigError, load_settings, validate_settings};
use stackport_core_client::{CoreClient, CoreClientError};

use crate::cli::Cli;

pub(crate) const HEADER_REQUEST_ID: &str = "x-request-id";

/// CLI-level error type to distinguish validation from operational failures.
#[derive(Debug)]
pub(crate) enum CliError {
    Validation(String),
    Failure(anyhow::Error),
}

/// Convenience alias for functions returning a `CliError`.
pub(crate) type CliResult<T> = Result<T, CliError>;

impl CliError {
    pub(crate) fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub(crate) fn failure(error: impl Into<anyhow::Error>) -> Self {
        Self::Failure(error.into())
    }

    pub(crate) const fn exit_code(&self) -> i32 {
        match self {
            Self::Validation(_) => 2,
            Self::Failure(_) => 3,
        }
    }

    pub(crate) fn display_message(&self) -> String {
        match self {
            Self::Validation(message) => message.clone(),
            Self::Failure(error) => format!("{error:#}"),
        }
    }
}

impl Display for CliError {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str("cli error")
    }
}

impl std::error::Error for CliError {}

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        Self::Validation(format!("{:#}", anyhow::Error::new(err)))
    }
}

impl From<CoreClientError> for CliError {
    fn from(err: CoreClientError) -> Self {
        match err {
            CoreClientError::UnsupportedStorageDriver { .. }
            | CoreClientError::UnknownSuffix { .. } => Self::Validation(err.to_string()),
            other => Self::failure(other),
        }
    }
}

/// Dependencies constructed from CLI options.
#[derive(Clone)]
pub(crate) struct CliDependencies {
    pub(crate) client: Client,
}

impl CliDependencies {
    /// Construct an HTTP client carrying the request timeout and trace id.
    pub(crate) fn from_env(cli: &Cli, trace_id: &str) -> CliResult<Self> {
        let mut default_headers = HeaderMap::new();
        let request_id = HeaderValue::from_str(trace_id).map_err(|_| {
            CliError::failure(anyhow!("trace identifier contains invalid characters"))
        })?;
        default_headers.insert(HEADER_REQUEST_ID, request_id);

        let client = Client::builder()
            .timeout(Duration::from_secs(cli.timeout))
            .default_headers(default_headers)
            .build()
            .map_err(|err| CliError::failure(anyhow!("failed to build HTTP client: {err}")))?;

        Ok(Self { client })
    }
}

/// Application context passed to command handlers.
#[derive(Clone, Debug)]
pub(crate) struct AppContext {
    pub(crate) core: CoreClient,
}

impl AppContext {
    pub(crate) fn new(deps: &CliDependencies, settings: ApiSettings) -> Self {
        Self {
            core: CoreClient::with_http(deps.client.clone(), settings),
        }
    }

    pub(crate) const fn settings(&self) -> &ApiSettings {
        self.core.settings()
    }
}

/// Load settings, then let explicit flags win over the file and environment.
pub(crate) fn resolve_settings(cli: &Cli) -> CliResult<ApiSettings> {
    let mut settings = load_settings(cli.settings.as_deref())?;
    if let Some(core_url) = &cli.core_url {
        settings.rebase_core(core_url.as_str().trim_end_matches('/'));
    }
    if let Some(password) = present(cli.core_api_password.as_deref()) {
        settings.core_api_password = Some(password.to_string());
    }
    if let Some(token) = present(cli.dropbox_token.as_deref()) {
        settings.dropbox_access_token = Some(token.to_string());
    }
    validate_settings(&settings)?;
    Ok(settings)
}

fn present(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    #[test]
    fn exit_codes_separate_validation_from_failure() {
        assert_eq!(CliError::validation("bad").exit_code(), 2);
        assert_eq!(CliError::failure(anyhow!("boom")).exit_code(), 3);
        assert_eq!(CliError::validation("bad").display_message(), "bad");
    }

    #[test]
    fn driver_and_suffix_errors_are_validation() {
        let err = CliError::from(CoreClientError::UnsupportedStorageDriver {
            location: "gaia-hub",
        });
        assert_eq!(err.exit_code(), 2);
        assert!(err.display_message().contains("gaia-hub"));

        let err = CliError::from(CoreClientError::Status {
            url: "http://core/v1/ping".to_string(),
            status: StatusCode::BAD_GATEWAY.as_u16(),
            reason: "Bad Gateway",
        });
        assert_eq!(err.exit_code(), 3);
        assert_eq!(
            err.display_message(),
            "http://core/v1/ping responded with 502 Bad Gateway"
        );
    }
}
