use serde::Serialize;
use stackport_core_client::StorageConfigOutcome;
use tracing::info;

use crate::cli::OutputFormat;
use crate::client::{AppContext, CliError, CliResult};
use crate::output::render_storage;

const MISSING_TOKEN_MESSAGE: &str = concat!(
    "Dropbox access token is required ",
    "(pass --dropbox-token or set STACKPORT_DROPBOX_TOKEN)"
);

/// Summary of a storage driver configuration run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub(crate) struct StorageReport {
    pub(crate) driver: &'static str,
    pub(crate) outcome: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) index_url: Option<String>,
}

/// Configure the daemon's storage driver without replicating a profile.
pub(crate) async fn handle_configure_storage(
    ctx: &AppContext,
    format: OutputFormat,
) -> CliResult<()> {
    let call = ctx.core.prepare_storage_config()?;
    if ctx.settings().dropbox_access_token.is_none() {
        return Err(CliError::validation(MISSING_TOKEN_MESSAGE));
    }
    let index_url = ctx.core.configure_storage_driver(&call).await?;
    info!(driver = call.driver(), index_url = ?index_url, "storage driver configured");
    render_storage(
        &StorageReport {
            driver: call.driver(),
            outcome: StorageConfigOutcome::Configured.to_string(),
            index_url,
        },
        format,
    )
}
