//! Output renderers and formatting helpers for CLI commands.

use anyhow::anyhow;
use serde::Serialize;
use stackport_config::ApiSettings;

use crate::cli::OutputFormat;
use crate::client::{CliError, CliResult};
use crate::commands::names::{AvailabilityRow, AvailabilityStatus};
use crate::commands::search::SearchRow;
use crate::commands::status::ProbeReport;
use crate::commands::storage::StorageReport;

const BITCOIN_DECIMALS: usize = 8;

fn print_json<T: Serialize + ?Sized>(value: &T) -> CliResult<()> {
    let text = serde_json::to_string_pretty(value)
        .map_err(|err| CliError::failure(anyhow!("failed to format JSON: {err}")))?;
    println!("{text}");
    Ok(())
}

pub(crate) fn render_probe(report: &ProbeReport, format: OutputFormat) -> CliResult<()> {
    match format {
        OutputFormat::Json => print_json(report)?,
        OutputFormat::Table => {
            let state = if report.ok { "ok" } else { "failed" };
            println!("{}: {state} ({})", report.check, report.url);
        }
    }
    Ok(())
}

pub(crate) fn render_balance(bitcoin: f64, format: OutputFormat) -> CliResult<()> {
    match format {
        OutputFormat::Json => print_json(&serde_json::json!({ "bitcoin": bitcoin }))?,
        OutputFormat::Table => println!("balance: {} BTC", format_bitcoin(bitcoin)),
    }
    Ok(())
}

pub(crate) fn render_names_owned(
    address: &str,
    names: &[String],
    format: OutputFormat,
) -> CliResult<()> {
    match format {
        OutputFormat::Json => print_json(&serde_json::json!({
            "address": address,
            "names": names,
        }))?,
        OutputFormat::Table => {
            if names.is_empty() {
                println!("no names owned by {address}");
            }
            for name in names {
                println!("{name}");
            }
        }
    }
    Ok(())
}

pub(crate) fn render_availability(rows: &[AvailabilityRow], format: OutputFormat) -> CliResult<()> {
    match format {
        OutputFormat::Json => print_json(rows)?,
        OutputFormat::Table => {
            println!("{:<37} {:<10} PRICE", "NAME", "STATUS");
            for row in rows {
                println!("{}", availability_line(row));
            }
        }
    }
    Ok(())
}

pub(crate) fn availability_line(row: &AvailabilityRow) -> String {
    let detail = match (&row.status, row.price, &row.error) {
        (AvailabilityStatus::Error, _, Some(message)) => message.clone(),
        (_, Some(price), _) => format!("{} BTC", format_bitcoin(price)),
        _ => "-".to_string(),
    };
    format!("{:<37} {:<10} {detail}", row.name, row.status.as_str())
}

pub(crate) fn render_search(rows: &[SearchRow], format: OutputFormat) -> CliResult<()> {
    match format {
        OutputFormat::Json => print_json(rows)?,
        OutputFormat::Table => {
            if rows.is_empty() {
                println!("no profiles found");
                return Ok(());
            }
            println!("{:<37} {:<24} ACCOUNTS", "ID", "NAME");
            for row in rows {
                println!(
                    "{:<37} {:<24} {}",
                    row.blockchain_id,
                    row.name,
                    row.accounts.join(" / ")
                );
            }
        }
    }
    Ok(())
}

pub(crate) fn render_storage(report: &StorageReport, format: OutputFormat) -> CliResult<()> {
    match format {
        OutputFormat::Json => print_json(report)?,
        OutputFormat::Table => {
            println!("{}", report.outcome);
            if let Some(index_url) = &report.index_url {
                println!("index: {index_url}");
            }
        }
    }
    Ok(())
}

pub(crate) fn render_settings(settings: &ApiSettings, format: OutputFormat) -> CliResult<()> {
    match format {
        OutputFormat::Json => print_json(settings)?,
        OutputFormat::Table => {
            println!("core api: {}", settings.core_api_url);
            println!(
                "password: {}",
                settings.core_api_password.as_deref().unwrap_or("<unset>")
            );
            println!("storage: {}", settings.hosted_data_location.as_str());
            println!(
                "dropbox token: {}",
                settings.dropbox_access_token.as_deref().unwrap_or("<unset>")
            );
            println!("search: {}", settings.search_url);
            for (suffix, subdomain) in &settings.subdomains {
                println!("registrar {suffix}: {}", subdomain.api_url);
            }
        }
    }
    Ok(())
}

pub(crate) fn format_bitcoin(value: f64) -> String {
    let text = format!("{value:.precision$}", precision = BITCOIN_DECIMALS);
    let trimmed = text.trim_end_matches('0').trim_end_matches('.');
    trimmed.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bitcoin_amounts_drop_trailing_zeros() {
        assert_eq!(format_bitcoin(0.01), "0.01");
        assert_eq!(format_bitcoin(1.0), "1");
        assert_eq!(format_bitcoin(0.000_000_01), "0.00000001");
    }

    #[test]
    fn availability_line_shows_price_or_error() {
        let priced = AvailabilityRow {
            name: "alice.id".to_string(),
            status: AvailabilityStatus::Available,
            price: Some(0.0025),
            error: None,
        };
        assert!(availability_line(&priced).ends_with("available  0.0025 BTC"));

        let failed = AvailabilityRow {
            name: "alice.personal.id".to_string(),
            status: AvailabilityStatus::Error,
            price: None,
            error: Some("boom".to_string()),
        };
        assert!(availability_line(&failed).ends_with("error      boom"));

        let taken = AvailabilityRow {
            name: "bob.id".to_string(),
            status: AvailabilityStatus::Taken,
            price: None,
            error: None,
        };
        assert!(availability_line(&taken).ends_with("taken      -"));
    }
}
