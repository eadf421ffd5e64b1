//! Settings loading from JSON documents and environment overrides.
//!
//! # Design
//! - Order: defaults or file, then environment overrides, then validation.
//! - Environment access is injected so overrides can be tested without
//!   touching the process environment.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{ConfigError, ConfigResult};
use crate::model::ApiSettings;
use crate::validate::validate_settings;

/// Overrides the daemon base URL (every daemon endpoint is rebased).
pub const ENV_CORE_URL: &str = "STACKPORT_CORE_URL";
/// Overrides the daemon password.
pub const ENV_CORE_API_PASSWORD: &str = "STACKPORT_CORE_API_PASSWORD";
/// Overrides the Dropbox access token.
pub const ENV_DROPBOX_TOKEN: &str = "STACKPORT_DROPBOX_TOKEN";

/// Parse a settings document; missing fields fall back to defaults.
///
/// # Errors
///
/// Returns [`ConfigError::Parse`] when the document is not valid JSON for the settings model.
pub fn parse_settings(document: &str) -> ConfigResult<ApiSettings> {
    serde_json::from_str(document).map_err(|source| ConfigError::Parse { source })
}

/// Apply environment overrides using the supplied lookup.
pub fn apply_env_overrides<F>(settings: &mut ApiSettings, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    let present = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
    if let Some(base) = present(ENV_CORE_URL) {
        debug!(core_api_url = %base, "rebasing daemon endpoints from environment");
        settings.rebase_core(base.trim());
    }
    if let Some(password) = present(ENV_CORE_API_PASSWORD) {
        settings.core_api_password = Some(password);
    }
    if let Some(token) = present(ENV_DROPBOX_TOKEN) {
        settings.dropbox_access_token = Some(token);
    }
}

/// Load settings from an optional file, apply process environment overrides, and validate.
///
/// # Errors
///
/// Returns an error when the file cannot be read or parsed, or when the
/// resulting settings fail validation.
pub fn load_settings(path: Option<&Path>) -> ConfigResult<ApiSettings> {
    let mut settings = match path {
        Some(path) => {
            let document = fs::read_to_string(path).map_err(|source| ConfigError::Io {
                path: path.to_path_buf(),
                source,
            })?;
            debug!(path = %path.display(), "loaded settings document");
            parse_settings(&document)?
        }
        None => ApiSettings::default(),
    };
    apply_env_overrides(&mut settings, |key| std::env::var(key).ok());
    validate_settings(&settings)?;
    Ok(settings)
}
