use serde::Serialize;
use stackport_core_client::SearchHit;
use stackport_profile::{display_name, from_legacy_format, social_accounts};

use crate::cli::{OutputFormat, SearchArgs};
use crate::client::{AppContext, CliError, CliResult};
use crate::output::render_search;

/// Display data for one search hit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub(crate) struct SearchRow {
    pub(crate) blockchain_id: String,
    pub(crate) name: String,
    pub(crate) accounts: Vec<String>,
}

impl From<&SearchHit> for SearchRow {
    fn from(hit: &SearchHit) -> Self {
        let profile = from_legacy_format(&hit.profile);
        Self {
            blockchain_id: hit.fully_qualified_name.clone(),
            name: display_name(&profile).unwrap_or_default(),
            accounts: social_accounts(&profile)
                .into_iter()
                .map(|account| format!("{} : {}", account.service, account.identifier))
                .collect(),
        }
    }
}

pub(crate) async fn handle_search(
    ctx: &AppContext,
    args: &SearchArgs,
    format: OutputFormat,
) -> CliResult<()> {
    let query = args.query.trim();
    if query.is_empty() {
        return Err(CliError::validation("search query must not be empty"));
    }
    let hits = ctx.core.search_profiles(query).await?;
    let rows: Vec<SearchRow> = hits.iter().map(SearchRow::from).collect();
    render_search(&rows, format)
}
