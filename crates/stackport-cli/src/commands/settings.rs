use stackport_config::ApiSettings;

use crate::cli::OutputFormat;
use crate::client::{AppContext, CliResult};
use crate::output::render_settings;

const REDACTED: &str = "<redacted>";

fn redacted(settings: &ApiSettings) -> ApiSettings {
    let mut shown = settings.clone();
    if shown.core_api_password.is_some() {
        shown.core_api_password = Some(REDACTED.to_string());
    }
    if shown.dropbox_access_token.is_some() {
        shown.dropbox_access_token = Some(REDACTED.to_string());
    }
    shown
}

pub(crate) fn handle_settings_show(ctx: &AppContext, format: OutputFormat) -> CliResult<()> {
    render_settings(&redacted(ctx.settings()), format)
}
