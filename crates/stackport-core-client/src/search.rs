//! Profile search.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, instrument};

use crate::client::CoreClient;
use crate::error::CoreResult;

/// One profile returned by the search endpoint.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchHit {
    /// Fully-qualified name of the profile owner.
    pub fully_qualified_name: String,
    /// Profile document in legacy or current format.
    #[serde(default)]
    pub profile: Value,
}

#[derive(Deserialize)]
struct SearchResponse {
    #[serde(default)]
    results: Vec<SearchHit>,
}

impl CoreClient {
    /// Search profiles matching `query`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the status is not a success,
    /// or the body is not a search result document.
    #[instrument(skip(self))]
    pub async fn search_profiles(&self, query: &str) -> CoreResult<Vec<SearchHit>> {
        let url = self.settings.search_url.as_str();
        let request = self.http.get(url).query(&[("query", query)]);
        let response = Self::ensure_success(url, Self::send(url, request).await?)?;
        let body: SearchResponse = Self::decode(url, response).await?;
        debug!(hits = body.results.len(), "profile search finished");
        Ok(body.results)
    }
}

#[cfg(test)]
mod tests {
    use crate::client::CoreClient;
    use crate::error::CoreClientError;
    use httpmock::prelude::*;
    use serde_json::json;
    use stackport_config::ApiSettings;

    #[tokio::test]
    async fn hits_are_returned_in_order() -> anyhow::Result<()> {
        let server = MockServer::start_async().await;
        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/v1/search")
                .query_param("query", "ali ce");
            then.status(200).json_body(json!({
                "results": [
                    {"fullyQualifiedName": "alice.id", "profile": {"name": {"formatted": "Alice"}}},
                    {"fullyQualifiedName": "alicia.id"}
                ]
            }));
        });

        let hits = CoreClient::new(ApiSettings::for_core(&server.base_url()))
            .search_profiles("ali ce")
            .await?;
        mock.assert();
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].fully_qualified_name, "alice.id");
        assert_eq!(hits[0].profile["name"]["formatted"], "Alice");
        assert!(hits[1].profile.is_null());
        Ok(())
    }

    #[tokio::test]
    async fn malformed_body_is_a_decode_error() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(GET).path("/v1/search");
            then.status(200).json_body(json!({"results": "none"}));
        });

        let err = CoreClient::new(ApiSettings::for_core(&server.base_url()))
            .search_profiles("bob")
            .await
            .expect_err("results must be a list");
        assert!(matches!(err, CoreClientError::Decode { .. }));
    }
}
