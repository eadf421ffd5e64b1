//! Wallet balance lookup.

use serde::Deserialize;
use tracing::{debug, instrument};

use crate::client::CoreClient;
use crate::error::CoreResult;

#[derive(Deserialize)]
struct BalanceResponse {
    balance: Balance,
}

#[derive(Deserialize)]
struct Balance {
    bitcoin: f64,
}

impl CoreClient {
    /// Zero-confirmation wallet balance in BTC.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the daemon answers with a
    /// non-success status, or the body is not a balance document.
    #[instrument(skip(self), fields(url = %self.settings.zero_conf_balance_url))]
    pub async fn wallet_balance(&self) -> CoreResult<f64> {
        let url = self.settings.zero_conf_balance_url.as_str();
        let request = self.authorize(Self::uncached(self.http.get(url)), None);
        let response = Self::ensure_success(url, Self::send(url, request).await?)?;
        let body: BalanceResponse = Self::decode(url, response).await?;
        debug!(balance = body.balance.bitcoin, "wallet balance refreshed");
        Ok(body.balance.bitcoin)
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
    async fn balance_is_read_with_configured_password() -> anyhow::Result<()> {
        let server = MockServer::start_async().await;
        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/v1/wallet/balance/0")
                .header("authorization", "bearer pw");
            then.status(200)
                .json_body(json!({"balance": {"bitcoin": 0.25, "satoshis": 25_000_000}}));
        });
        let mut settings = ApiSettings::for_core(&server.base_url());
        settings.core_api_password = Some("pw".to_string());

        let balance = CoreClient::new(settings).wallet_balance().await?;
        assert!((balance - 0.25).abs() < f64::EPSILON);
        mock.assert();
        Ok(())
    }

    #[tokio::test]
    async fn balance_surfaces_status_errors() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(GET).path("/v1/wallet/balance/0");
            then.status(403);
        });

        let err = CoreClient::new(ApiSettings::for_core(&server.base_url()))
            .wallet_balance()
            .await
            .expect_err("forbidden must fail");
        assert!(matches!(err, CoreClientError::Status { status: 403, .. }));
    }
}
