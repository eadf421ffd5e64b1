//! Argument parsing and command dispatch.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use reqwest::Url;
use stackport_telemetry::{LogFormat, LoggingConfig, init_logging};
use tracing::{debug, error};
use uuid::Uuid;

use crate::client::{AppContext, CliDependencies, CliResult, resolve_settings};
use crate::commands::names::handle_availability;
use crate::commands::search::handle_search;
use crate::commands::settings::handle_settings_show;
use crate::commands::status::{
    handle_balance, handle_check_password, handle_names_owned, handle_ping,
};
use crate::commands::storage::handle_configure_storage;

const DEFAULT_TIMEOUT_SECS: u64 = 10;
const DEFAULT_CLI_LOG_LEVEL: &str = "warn";

/// Parses CLI arguments, executes the requested command, and reports the
/// outcome. Returns the process exit code.
pub async fn run() -> i32 {
    let cli = Cli::parse();
    let logging = LoggingConfig {
        level: &cli.log_level,
        format: cli.log_format,
        build_sha: env!("CARGO_PKG_VERSION"),
    };
    if let Err(err) = init_logging(&logging) {
        eprintln!("warning: {err}");
    }

    let command_name = command_label(&cli.command);
    let trace_id = Uuid::new_v4().to_string();
    let deps = match CliDependencies::from_env(&cli, &trace_id) {
        Ok(deps) => deps,
        Err(err) => {
            eprintln!("error: {}", err.display_message());
            return err.exit_code();
        }
    };

    match dispatch(cli, &deps).await {
        Ok(()) => {
            debug!(command = command_name, %trace_id, "command finished");
            0
        }
        Err(err) => {
            let exit_code = err.exit_code();
            let message = err.display_message();
            error!(command = command_name, %trace_id, exit_code, %message, "command failed");
            eprintln!("error: {message}");
            exit_code
        }
    }
}

async fn dispatch(cli: Cli, deps: &CliDependencies) -> CliResult<()> {
    let settings = resolve_settings(&cli)?;
    let ctx = AppContext::new(deps, settings);
    let output = cli.output;

    match cli.command {
        Command::Ping => handle_ping(&ctx, output).await,
        Command::CheckPassword => handle_check_password(&ctx, output).await,
        Command::Balance => handle_balance(&ctx, output).await,
        Command::NamesOwned(args) => handle_names_owned(&ctx, &args, output).await,
        Command::Availability(args) => handle_availability(&ctx, &args, output).await,
        Command::Search(args) => handle_search(&ctx, &args, output).await,
        Command::ConfigureStorage => handle_configure_storage(&ctx, output).await,
        Command::Settings(SettingsCommand::Show) => handle_settings_show(&ctx, output),
    }
}

#[derive(Parser)]
#[command(name = "stackport", about = "Command-line client for a local Core daemon")]
pub(crate) struct Cli {
    #[arg(
        long,
        global = true,
        env = "STACKPORT_SETTINGS",
        help = "JSON settings document to load instead of the defaults"
    )]
    pub(crate) settings: Option<PathBuf>,
    #[arg(long, global = true, env = "STACKPORT_CORE_URL", value_parser = parse_url)]
    pub(crate) core_url: Option<Url>,
    #[arg(
        long,
        global = true,
        env = "STACKPORT_CORE_API_PASSWORD",
        hide_env_values = true
    )]
    pub(crate) core_api_password: Option<String>,
    #[arg(
        long,
        global = true,
        env = "STACKPORT_DROPBOX_TOKEN",
        hide_env_values = true
    )]
    pub(crate) dropbox_token: Option<String>,
    #[arg(
        long,
        global = true,
        env = "STACKPORT_HTTP_TIMEOUT_SECS",
        default_value_t = DEFAULT_TIMEOUT_SECS
    )]
    pub(crate) timeout: u64,
    #[arg(
        long = "output",
        alias = "format",
        global = true,
        value_enum,
        default_value_t = OutputFormat::Table,
        help = "Select output format for commands that render structured data"
    )]
    pub(crate) output: OutputFormat,
    #[arg(
        long,
        global = true,
        env = "STACKPORT_LOG_LEVEL",
        default_value = DEFAULT_CLI_LOG_LEVEL
    )]
    pub(crate) log_level: String,
    #[arg(
        long,
        global = true,
        env = "STACKPORT_LOG_FORMAT",
        value_parser = parse_log_format,
        default_value = "pretty"
    )]
    pub(crate) log_format: LogFormat,
    #[command(subcommand)]
    pub(crate) command: Command,
}

#[derive(Subcommand)]
pub(crate) enum Command {
    /// Check that the daemon answers its ping endpoint.
    Ping,
    /// Check the configured daemon password.
    CheckPassword,
    /// Show the zero-confirmation wallet balance.
    Balance,
    /// List names owned by a bitcoin address.
    NamesOwned(NamesOwnedArgs),
    /// Check a username against every configured namespace.
    Availability(AvailabilityArgs),
    /// Search registered profiles.
    Search(SearchArgs),
    /// Point the daemon at the configured storage provider.
    ConfigureStorage,
    /// Inspect the settings this CLI resolves.
    #[command(subcommand)]
    Settings(SettingsCommand),
}

#[derive(Subcommand)]
pub(crate) enum SettingsCommand {
    /// Print the effective settings with secrets redacted.
    Show,
}

#[derive(Args)]
pub(crate) struct NamesOwnedArgs {
    #[arg(help = "Bitcoin address")]
    pub(crate) address: String,
}

#[derive(Args)]
pub(crate) struct AvailabilityArgs {
    #[arg(help = "Username without a namespace suffix")]
    pub(crate) username: String,
}

#[derive(Args)]
pub(crate) struct SearchArgs {
    #[arg(help = "Free-text profile query")]
    pub(crate) query: String,
}

#[derive(Copy, Clone, Debug, Default, ValueEnum)]
pub(crate) enum OutputFormat {
    #[default]
    Table,
    Json,
}

pub(crate) const fn command_label(command: &Command) -> &'static str {
    match command {
        Command::Ping => "ping",
        Command::CheckPassword => "check_password",
        Command::Balance => "balance",
        Command::NamesOwned(_) => "names_owned",
        Command::Availability(_) => "availability",
        Command::Search(_) => "search",
        Command::ConfigureStorage => "configure_storage",
        Command::Settings(SettingsCommand::Show) => "settings_show",
    }
}

pub(crate) fn parse_url(input: &str) -> Result<Url, String> {
    input
        .parse::<Url>()
        .map_err(|err| format!("invalid URL '{input}': {err}"))
}

fn parse_log_format(input: &str) -> Result<LogFormat, String> {
    input.parse::<LogFormat>().map_err(|err| err.to_string())
}
