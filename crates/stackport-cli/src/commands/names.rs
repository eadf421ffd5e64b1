use anyhow::anyhow;
use futures_util::future::join_all;
use serde::Serialize;
use stackport_core_client::{AvailabilityEvent, CoreClient};
use stackport_profile::{is_valid_name, normalize_username};
use tracing::debug;

use crate::cli::{AvailabilityArgs, OutputFormat};
use crate::client::{AppContext, CliError, CliResult};
use crate::output::render_availability;

/// Where a single name's check ended up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum AvailabilityStatus {
    Checking,
    Available,
    Taken,
    Error,
}

impl AvailabilityStatus {
    pub(crate) const fn as_str(self) -> &'static str {
        match self {
            Self::Checking => "checking",
            Self::Available => "available",
            Self::Taken => "taken",
            Self::Error => "error",
        }
    }
}

/// One row of availability output.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct AvailabilityRow {
    pub(crate) name: String,
    pub(crate) status: AvailabilityStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) error: Option<String>,
}

impl AvailabilityRow {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            status: AvailabilityStatus::Checking,
            price: None,
            error: None,
        }
    }

    fn apply(&mut self, event: &AvailabilityEvent) {
        match event {
            AvailabilityEvent::CheckingAvailability => self.status = AvailabilityStatus::Checking,
            AvailabilityEvent::Available { .. } => self.status = AvailabilityStatus::Available,
            AvailabilityEvent::Taken => self.status = AvailabilityStatus::Taken,
            AvailabilityEvent::CheckingPrice => {}
            AvailabilityEvent::Priced { price } => self.price = Some(*price),
            AvailabilityEvent::Failed { message } => {
                self.status = AvailabilityStatus::Error;
                self.error = Some(message.clone());
            }
        }
    }
}

/// Fully-qualified names for `username`, one per suffix, or a validation
/// error when the top-level candidate is not a valid name.
fn candidate_names(username: &str, suffixes: &[String]) -> CliResult<Vec<String>> {
    let names: Vec<String> = suffixes
        .iter()
        .map(|suffix| format!("{username}.{suffix}"))
        .collect();
    match names.first() {
        Some(candidate) if !is_valid_name(candidate) => Err(CliError::validation(format!(
            "{candidate} is not a valid Blockstack name"
        ))),
        _ => Ok(names),
    }
}

async fn check_name(core: &CoreClient, name: &str) -> AvailabilityRow {
    let mut row = AvailabilityRow::new(name);
    if let Err(err) = core
        .check_name_availability_and_price(name, |event| row.apply(&event))
        .await
    {
        debug!(%name, error = %err, "availability check stopped");
    }
    row
}

pub(crate) async fn handle_availability(
    ctx: &AppContext,
    args: &AvailabilityArgs,
    format: OutputFormat,
) -> CliResult<()> {
    let username = normalize_username(&args.username);
    let names = candidate_names(&username, &ctx.settings().name_suffixes())?;

    let rows = join_all(names.iter().map(|name| check_name(&ctx.core, name))).await;
    render_availability(&rows, format)?;

    let failed = rows
        .iter()
        .filter(|row| row.status == AvailabilityStatus::Error)
        .count();
    if failed > 0 {
        return Err(CliError::failure(anyhow!(
            "{failed} of {} availability checks failed",
            rows.len()
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;
    use stackport_config::{ApiSettings, SubdomainSettings};

    fn context_with(server: &MockServer) -> AppContext {
        let mut settings = ApiSettings::for_core(&server.base_url());
        settings.subdomains.clear();
        settings.subdomains.insert(
            "personal.id".to_string(),
            SubdomainSettings {
                register_url: server.url("/register"),
                api_url: server.base_url(),
            },
        );
        AppContext {
            core: CoreClient::new(settings),
        }
    }

    fn args(username: &str) -> AvailabilityArgs {
        AvailabilityArgs {
            username: username.to_string(),
        }
    }

    #[test]
    fn candidates_follow_suffix_order() -> anyhow::Result<()> {
        let suffixes = vec!["id".to_string(), "personal.id".to_string()];
        let names =
            candidate_names("alice", &suffixes).map_err(|err| anyhow!(err.display_message()))?;
        assert_eq!(names, vec!["alice.id", "alice.personal.id"]);
        Ok(())
    }

    #[test]
    fn empty_username_is_rejected() {
        let suffixes = vec!["id".to_string()];
        let err = candidate_names("", &suffixes).expect_err("empty name must fail");
        assert_eq!(err.display_message(), ".id is not a valid Blockstack name");
    }

    #[test]
    fn failed_event_marks_row_as_error() {
        let mut row = AvailabilityRow::new("alice.id");
        row.apply(&AvailabilityEvent::CheckingAvailability);
        row.apply(&AvailabilityEvent::Failed {
            message: "boom".to_string(),
        });
        assert_eq!(row.status, AvailabilityStatus::Error);
        assert_eq!(row.error.as_deref(), Some("boom"));
    }

    #[tokio::test]
    async fn every_suffix_is_checked() {
        let server = MockServer::start_async().await;
        let top_level = server.mock(|when, then| {
            when.method(GET).path("/v1/names/alice.id");
            then.status(404);
        });
        let price = server.mock(|when, then| {
            when.method(GET).path("/v1/prices/names/alice.id");
            then.status(200).json_body(json!({"name_price": {"satoshis": 250_000}}));
        });
        let subdomain = server.mock(|when, then| {
            when.method(GET).path("/v1/names/alice.personal.id");
            then.status(200).json_body(json!({"status": "registered"}));
        });

        let result =
            handle_availability(&context_with(&server), &args("Alice!"), OutputFormat::Json).await;
        assert!(result.is_ok());
        top_level.assert();
        price.assert();
        subdomain.assert();
    }

    #[tokio::test]
    async fn invalid_username_makes_no_requests() {
        let server = MockServer::start_async().await;
        let lookup = server.mock(|when, then| {
            when.method(GET);
            then.status(404);
        });

        let err = handle_availability(&context_with(&server), &args("!!!"), OutputFormat::Table)
            .await
            .expect_err("invalid username must fail");
        assert_eq!(err.exit_code(), 2);
        lookup.assert_calls(0);
    }

    #[tokio::test]
    async fn failed_checks_set_a_failure_exit_code() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(GET).path("/v1/names/bob.id");
            then.status(500);
        });
        server.mock(|when, then| {
            when.method(GET).path("/v1/names/bob.personal.id");
            then.status(404);
        });

        let err = handle_availability(&context_with(&server), &args("bob"), OutputFormat::Table)
            .await
            .expect_err("server error must fail");
        assert_eq!(err.exit_code(), 3);
        assert_eq!(err.display_message(), "1 of 2 availability checks failed");
    }
}
