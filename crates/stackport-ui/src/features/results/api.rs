//! Profile search requests.

use crate::features::results::logic::ResultRow;
use stackport_core_client::{CoreClient, CoreClientError};

/// Search profiles and derive one row per hit.
pub(crate) async fn search_rows(
    client: &CoreClient,
    query: &str,
) -> Result<Vec<ResultRow>, CoreClientError> {
    let hits = client.search_profiles(query).await?;
    Ok(hits
        .iter()
        .map(|hit| ResultRow::from_legacy(&hit.fully_qualified_name, &hit.profile))
        .collect())
}
