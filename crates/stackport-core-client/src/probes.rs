//! Best-effort status probes.
//!
//! Probes never fail: every transport, status, or decode problem is logged
//! and collapses to `false` or an empty list.

use serde::Deserialize;
use tracing::{debug, instrument, trace, warn};

use crate::client::CoreClient;
use crate::error::CoreResult;

const ALIVE: &str = "alive";

#[derive(Deserialize)]
struct PingResponse {
    #[serde(default)]
    status: Option<String>,
}

#[derive(Deserialize)]
struct NamesOwnedResponse {
    #[serde(default)]
    names: Vec<String>,
}

impl CoreClient {
    /// Names owned by a bitcoin address; empty on any failure.
    #[instrument(skip(self))]
    pub async fn names_owned(&self, address: &str) -> Vec<String> {
        let url = self.settings.names_owned_url(address);
        match self.fetch_names_owned(&url).await {
            Ok(names) => names,
            Err(err) => {
                warn!(%url, error = %err, "names owned lookup failed");
                Vec::new()
            }
        }
    }

    async fn fetch_names_owned(&self, url: &str) -> CoreResult<Vec<String>> {
        let response = Self::send(url, self.http.get(url)).await?;
        let response = Self::ensure_success(url, response)?;
        let body: NamesOwnedResponse = Self::decode(url, response).await?;
        Ok(body.names)
    }

    /// Whether the daemon answers its ping endpoint with `status: "alive"`.
    #[instrument(skip(self), fields(url = %self.settings.core_ping_url))]
    pub async fn is_core_api_running(&self) -> bool {
        let url = self.settings.core_ping_url.as_str();
        let request = Self::uncached(self.http.get(url));
        let outcome = match Self::send(url, request).await {
            Ok(response) => Self::decode::<PingResponse>(url, response).await,
            Err(err) => Err(err),
        };
        match outcome {
            Ok(ping) if ping.status.as_deref() == Some(ALIVE) => {
                trace!("core API is running");
                true
            }
            Ok(ping) => {
                warn!(status = ?ping.status, "core API is not alive");
                false
            }
            Err(err) => {
                warn!(error = %err, "problem checking core API");
                false
            }
        }
    }

    /// Whether `password` unlocks the daemon's password-protected endpoint.
    ///
    /// An absent or empty password returns `false` without any request.
    #[instrument(
        skip(self, password),
        fields(url = %self.settings.core_password_protected_read_url)
    )]
    pub async fn is_api_password_valid(&self, password: Option<&str>) -> bool {
        let Some(password) = password.filter(|password| !password.is_empty()) else {
            debug!("core API password is missing");
            return false;
        };
        let url = self.settings.core_password_protected_read_url.as_str();
        let request = self.authorize(Self::uncached(self.http.get(url)), Some(password));
        match Self::send(url, request).await {
            Ok(response) if response.status().is_success() => {
                trace!("core API password is valid");
                true
            }
            Ok(response) => {
                warn!(status = %response.status(), "core API password was rejected");
                false
            }
            Err(err) => {
                warn!(error = %err, "problem checking core API password");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::client::CoreClient;
    use httpmock::prelude::*;
    use serde_json::json;
    use stackport_config::ApiSettings;

    fn client_for(server: &MockServer) -> CoreClient {
        CoreClient::new(ApiSettings::for_core(&server.base_url()))
    }

    #[tokio::test]
    async fn running_when_status_is_alive() {
        let server = MockServer::start_async().await;
        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/v1/ping")
                .header("cache-control", "no-store");
            then.status(200).json_body(json!({"status": "alive"}));
        });

        assert!(client_for(&server).is_core_api_running().await);
        mock.assert();
    }

    #[tokio::test]
    async fn not_running_when_status_differs() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(GET).path("/v1/ping");
            then.status(200).json_body(json!({"status": "starting"}));
        });

        assert!(!client_for(&server).is_core_api_running().await);
    }

    #[tokio::test]
    async fn not_running_when_body_is_not_json() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(GET).path("/v1/ping");
            then.status(200).body("<html>proxy error</html>");
        });

        assert!(!client_for(&server).is_core_api_running().await);
    }

    #[tokio::test]
    async fn not_running_when_unreachable() {
        let client = CoreClient::new(ApiSettings::for_core("http://127.0.0.1:1"));
        assert!(!client.is_core_api_running().await);
    }

    #[tokio::test]
    async fn password_check_sends_bearer_header() {
        let server = MockServer::start_async().await;
        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/v1/wallet/payment_address")
                .header("authorization", "bearer hunter2");
            then.status(200).json_body(json!({"address": "1abc"}));
        });

        assert!(
            client_for(&server)
                .is_api_password_valid(Some("hunter2"))
                .await
        );
        mock.assert();
    }

    #[tokio::test]
    async fn password_check_rejects_error_status() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(GET).path("/v1/wallet/payment_address");
            then.status(401);
        });

        assert!(!client_for(&server).is_api_password_valid(Some("wrong")).await);
    }

    #[tokio::test]
    async fn missing_password_makes_no_request() {
        let server = MockServer::start_async().await;
        let mock = server.mock(|when, then| {
            when.method(GET).path("/v1/wallet/payment_address");
            then.status(200);
        });

        let client = client_for(&server);
        assert!(!client.is_api_password_valid(None).await);
        assert!(!client.is_api_password_valid(Some("")).await);
        mock.assert_calls(0);
    }

    #[tokio::test]
    async fn names_owned_parses_names() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(GET).path("/v1/addresses/bitcoin/1Alice");
            then.status(200).json_body(json!({"names": ["alice.id"]}));
        });

        let names = client_for(&server).names_owned("1Alice").await;
        assert_eq!(names, vec!["alice.id".to_string()]);
    }

    #[tokio::test]
    async fn names_owned_is_empty_on_failure() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(GET).path("/v1/addresses/bitcoin/1Bob");
            then.status(200).body("not json");
        });
        server.mock(|when, then| {
            when.method(GET).path("/v1/addresses/bitcoin/1Carol");
            then.status(500);
        });

        let client = client_for(&server);
        assert!(client.names_owned("1Bob").await.is_empty());
        assert!(client.names_owned("1Carol").await.is_empty());
    }
}
