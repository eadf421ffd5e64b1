use anyhow::anyhow;
use serde::Serialize;

use crate::cli::{NamesOwnedArgs, OutputFormat};
use crate::client::{AppContext, CliError, CliResult};
use crate::output::{render_balance, render_names_owned, render_probe};

const MISSING_PASSWORD_MESSAGE: &str = concat!(
    "core API password is required ",
    "(pass --core-api-password or set STACKPORT_CORE_API_PASSWORD)"
);

/// Outcome of a daemon probe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub(crate) struct ProbeReport {
    pub(crate) check: &'static str,
    pub(crate) ok: bool,
    pub(crate) url: String,
}

pub(crate) async fn handle_ping(ctx: &AppContext, format: OutputFormat) -> CliResult<()> {
    let url = ctx.settings().core_ping_url.clone();
    if !ctx.core.is_core_api_running().await {
        return Err(CliError::failure(anyhow!("core API at {url} is not running")));
    }
    render_probe(
        &ProbeReport {
            check: "ping",
            ok: true,
            url,
        },
        format,
    )
}

pub(crate) async fn handle_check_password(ctx: &AppContext, format: OutputFormat) -> CliResult<()> {
    let password = ctx
        .settings()
        .core_api_password
        .as_deref()
        .ok_or_else(|| CliError::validation(MISSING_PASSWORD_MESSAGE))?;
    let url = ctx.settings().core_password_protected_read_url.clone();
    if !ctx.core.is_api_password_valid(Some(password)).await {
        return Err(CliError::failure(anyhow!(
            "core API password was rejected by {url}"
        )));
    }
    render_probe(
        &ProbeReport {
            check: "password",
            ok: true,
            url,
        },
        format,
    )
}

pub(crate) async fn handle_balance(ctx: &AppContext, format: OutputFormat) -> CliResult<()> {
    let balance = ctx.core.wallet_balance().await?;
    render_balance(balance, format)
}

pub(crate) async fn handle_names_owned(
    ctx: &AppContext,
    args: &NamesOwnedArgs,
    format: OutputFormat,
) -> CliResult<()> {
    let address = args.address.trim();
    if address.is_empty() {
        return Err(CliError::validation("address must not be empty"));
    }
    let names = ctx.core.names_owned(address).await;
    render_names_owned(address, &names, format)
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;
    use stackport_config::ApiSettings;
    use stackport_core_client::CoreClient;

    fn context_with(server: &MockServer, password: Option<&str>) -> AppContext {
        let mut settings = ApiSettings::for_core(&server.base_url());
        settings.core_api_password = password.map(str::to_string);
        AppContext {
            core: CoreClient::new(settings),
        }
    }

    #[tokio::test]
    async fn ping_succeeds_when_alive() {
        let server = MockServer::start_async().await;
        let mock = server.mock(|when, then| {
            when.method(GET).path("/v1/ping");
            then.status(200).json_body(json!({"status": "alive"}));
        });

        let result = handle_ping(&context_with(&server, None), OutputFormat::Json).await;
        assert!(result.is_ok());
        mock.assert();
    }

    #[tokio::test]
    async fn ping_fails_when_daemon_is_down() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(GET).path("/v1/ping");
            then.status(503);
        });

        let err = handle_ping(&context_with(&server, None), OutputFormat::Table)
            .await
            .expect_err("down daemon must fail");
        assert_eq!(err.exit_code(), 3);
        assert!(err.display_message().contains("is not running"));
    }

    #[tokio::test]
    async fn password_check_requires_a_password() {
        let server = MockServer::start_async().await;
        let mock = server.mock(|when, then| {
            when.method(GET).path("/v1/wallet/payment_address");
            then.status(200);
        });

        let err = handle_check_password(&context_with(&server, None), OutputFormat::Table)
            .await
            .expect_err("missing password must fail");
        assert_eq!(err.exit_code(), 2);
        mock.assert_calls(0);
    }

    #[tokio::test]
    async fn rejected_password_is_a_failure() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(GET)
                .path("/v1/wallet/payment_address")
                .header("authorization", "bearer wrong");
            then.status(401);
        });

        let err = handle_check_password(&context_with(&server, Some("wrong")), OutputFormat::Table)
            .await
            .expect_err("rejected password must fail");
        assert_eq!(err.exit_code(), 3);
    }

    #[tokio::test]
    async fn balance_is_read_with_password() {
        let server = MockServer::start_async().await;
        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/v1/wallet/balance/0")
                .header("authorization", "bearer pw");
            then.status(200).json_body(json!({"balance": {"bitcoin": 1.5}}));
        });

        let result = handle_balance(&context_with(&server, Some("pw")), OutputFormat::Table).await;
        assert!(result.is_ok());
        mock.assert();
    }

    #[tokio::test]
    async fn balance_errors_are_failures() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(GET).path("/v1/wallet/balance/0");
            then.status(500);
        });

        let err = handle_balance(&context_with(&server, None), OutputFormat::Json)
            .await
            .expect_err("server error must fail");
        assert_eq!(err.exit_code(), 3);
    }

    #[tokio::test]
    async fn names_owned_trims_the_address() {
        let server = MockServer::start_async().await;
        let mock = server.mock(|when, then| {
            when.method(GET).path("/v1/addresses/bitcoin/1Alice");
            then.status(200).json_body(json!({"names": ["alice.id"]}));
        });

        let args = NamesOwnedArgs {
            address: " 1Alice ".to_string(),
        };
        let result =
            handle_names_owned(&context_with(&server, None), &args, OutputFormat::Table).await;
        assert!(result.is_ok());
        mock.assert();
    }

    #[tokio::test]
    async fn blank_address_is_rejected() {
        let server = MockServer::start_async().await;
        let args = NamesOwnedArgs {
            address: "  ".to_string(),
        };
        let err = handle_names_owned(&context_with(&server, None), &args, OutputFormat::Table)
            .await
            .expect_err("blank address must fail");
        assert_eq!(err.exit_code(), 2);
    }
}
