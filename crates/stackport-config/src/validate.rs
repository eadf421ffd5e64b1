//! Validation helpers for API settings.
//!
//! # Design
//! - Check every endpoint parses as an absolute URL before any request is built.
//! - Templates must contain their placeholder; a missing placeholder would
//!   silently query the same URL for every input.

use url::Url;

use crate::defaults::{ADDRESS_PLACEHOLDER, NAME_PLACEHOLDER};
use crate::error::{ConfigError, ConfigResult};
use crate::model::ApiSettings;

/// Validate a settings document.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidField`] for the first endpoint that is not an
/// absolute URL, a template missing its placeholder, or a malformed subdomain suffix.
pub fn validate_settings(settings: &ApiSettings) -> ConfigResult<()> {
    validate_url("coreApiUrl", &settings.core_api_url)?;
    validate_url("corePingUrl", &settings.core_ping_url)?;
    validate_url(
        "corePasswordProtectedReadUrl",
        &settings.core_password_protected_read_url,
    )?;
    validate_url("zeroConfBalanceUrl", &settings.zero_conf_balance_url)?;
    validate_url("searchUrl", &settings.search_url)?;
    validate_url("registerUrl", &settings.register_url)?;
    validate_template(
        "bitcoinAddressLookupUrl",
        &settings.bitcoin_address_lookup_url,
        ADDRESS_PLACEHOLDER,
    )?;
    validate_template("nameLookupUrl", &settings.name_lookup_url, NAME_PLACEHOLDER)?;
    validate_template("priceCheckUrl", &settings.price_check_url, NAME_PLACEHOLDER)?;

    for (suffix, subdomain) in &settings.subdomains {
        let labels: Vec<&str> = suffix.split('.').collect();
        if labels.len() < 2 || labels.iter().any(|label| label.is_empty()) {
            return Err(ConfigError::invalid(
                "subdomains",
                suffix,
                "suffix must contain at least two non-empty labels",
            ));
        }
        validate_url(
            format!("subdomains.{suffix}.registerUrl"),
            &subdomain.register_url,
        )?;
        validate_url(format!("subdomains.{suffix}.apiUrl"), &subdomain.api_url)?;
    }
    Ok(())
}

fn validate_url(field: impl Into<String>, value: &str) -> ConfigResult<()> {
    let field = field.into();
    match Url::parse(value) {
        Ok(parsed) if parsed.cannot_be_a_base() => Err(ConfigError::invalid(
            field,
            value,
            "must be a hierarchical URL",
        )),
        Ok(_) => Ok(()),
        Err(_) => Err(ConfigError::invalid(field, value, "must be an absolute URL")),
    }
}

fn validate_template(field: &str, value: &str, placeholder: &str) -> ConfigResult<()> {
    if !value.contains(placeholder) {
        return Err(ConfigError::invalid(
            field,
            value,
            "template is missing its placeholder",
        ));
    }
    validate_url(field, &value.replace(placeholder, "placeholder"))
}
