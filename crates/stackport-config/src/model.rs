//! Typed API settings.
//!
//! # Design
//! - Pure data carrier; IO lives in `loader.rs` and checks in `validate.rs`.
//! - Field names serialize in camelCase to match the settings documents the UI persists.
//! - Settings are read-only input to every client operation.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::defaults::{
    ADDRESS_LOOKUP_PATH, ADDRESS_PLACEHOLDER, DEFAULT_CORE_API_URL, DEFAULT_NAMESPACE,
    DEFAULT_SUBDOMAIN_REGISTRAR_URL, DEFAULT_SUBDOMAIN_SUFFIX, NAME_LOOKUP_PATH, NAME_PLACEHOLDER,
    PASSWORD_PROTECTED_READ_PATH, PING_PATH, PRICE_CHECK_PATH, REGISTER_PATH, SEARCH_PATH,
    ZERO_CONF_BALANCE_PATH,
};

/// Where the user's profile data is hosted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum HostedDataLocation {
    /// Dropbox-backed storage driver.
    #[default]
    #[serde(rename = "dropbox")]
    Dropbox,
    /// Hosted Gaia hub.
    #[serde(rename = "gaia-hub")]
    GaiaHub,
    /// Self-hosted S3 bucket.
    #[serde(rename = "self-hosted-S3")]
    SelfHostedS3,
}

impl HostedDataLocation {
    /// Wire name of the hosted data location.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Dropbox => "dropbox",
            Self::GaiaHub => "gaia-hub",
            Self::SelfHostedS3 => "self-hosted-S3",
        }
    }
}

/// Registration endpoints for a subdomain suffix.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubdomainSettings {
    /// Registrar endpoint that accepts subdomain registrations.
    pub register_url: String,
    /// Registrar API base used for availability lookups.
    pub api_url: String,
}

/// Settings for talking to the Core daemon and the subdomain registrars.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ApiSettings {
    /// Base URL of the Core daemon.
    pub core_api_url: String,
    /// Password presented as a bearer credential to the daemon.
    #[serde(rename = "coreAPIPassword")]
    pub core_api_password: Option<String>,
    /// Liveness endpoint.
    pub core_ping_url: String,
    /// Endpoint that only answers when the password is valid.
    pub core_password_protected_read_url: String,
    /// Zero-confirmation wallet balance endpoint.
    pub zero_conf_balance_url: String,
    /// Address lookup template containing `{address}`.
    pub bitcoin_address_lookup_url: String,
    /// Name lookup template containing `{name}`.
    pub name_lookup_url: String,
    /// Name price template containing `{name}`.
    pub price_check_url: String,
    /// Profile search endpoint.
    pub search_url: String,
    /// Top-level name registration endpoint.
    pub register_url: String,
    /// Subdomain suffixes mapped to their registrar endpoints.
    pub subdomains: BTreeMap<String, SubdomainSettings>,
    /// Selected hosted data location.
    pub hosted_data_location: HostedDataLocation,
    /// Dropbox access token; `None` until storage is connected.
    pub dropbox_access_token: Option<String>,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self::for_core(DEFAULT_CORE_API_URL)
    }
}

impl ApiSettings {
    /// Build settings whose daemon endpoints all live under `core_api_url`.
    #[must_use]
    pub fn for_core(core_api_url: &str) -> Self {
        let base = core_api_url.trim_end_matches('/');
        let mut subdomains = BTreeMap::new();
        subdomains.insert(
            DEFAULT_SUBDOMAIN_SUFFIX.to_string(),
            SubdomainSettings {
                register_url: format!("{DEFAULT_SUBDOMAIN_REGISTRAR_URL}/register"),
                api_url: DEFAULT_SUBDOMAIN_REGISTRAR_URL.to_string(),
            },
        );
        Self {
            core_api_url: base.to_string(),
            core_api_password: None,
            core_ping_url: format!("{base}{PING_PATH}"),
            core_password_protected_read_url: format!("{base}{PASSWORD_PROTECTED_READ_PATH}"),
            zero_conf_balance_url: format!("{base}{ZERO_CONF_BALANCE_PATH}"),
            bitcoin_address_lookup_url: format!("{base}{ADDRESS_LOOKUP_PATH}"),
            name_lookup_url: format!("{base}{NAME_LOOKUP_PATH}"),
            price_check_url: format!("{base}{PRICE_CHECK_PATH}"),
            search_url: format!("{base}{SEARCH_PATH}"),
            register_url: format!("{base}{REGISTER_PATH}"),
            subdomains,
            hosted_data_location: HostedDataLocation::default(),
            dropbox_access_token: None,
        }
    }

    /// Move every daemon endpoint that lives under the current base onto `new_base`.
    pub fn rebase_core(&mut self, new_base: &str) {
        let old = self.core_api_url.clone();
        let new = new_base.trim_end_matches('/').to_string();
        for field in [
            &mut self.core_ping_url,
            &mut self.core_password_protected_read_url,
            &mut self.zero_conf_balance_url,
            &mut self.bitcoin_address_lookup_url,
            &mut self.name_lookup_url,
            &mut self.price_check_url,
            &mut self.search_url,
            &mut self.register_url,
        ] {
            if let Some(rest) = field.strip_prefix(old.as_str()) {
                *field = format!("{new}{rest}");
            }
        }
        self.core_api_url = new;
    }

    /// Whether a storage provider has been connected.
    #[must_use]
    pub const fn storage_connected(&self) -> bool {
        self.dropbox_access_token.is_some()
    }

    /// Suffixes a username is checked against: the top-level namespace first, then subdomains.
    #[must_use]
    pub fn name_suffixes(&self) -> Vec<String> {
        std::iter::once(DEFAULT_NAMESPACE.to_string())
            .chain(
                self.subdomains
                    .keys()
                    .filter(|suffix| suffix.as_str() != DEFAULT_NAMESPACE)
                    .cloned(),
            )
            .collect()
    }

    /// Registration endpoint for a suffix, if the suffix is known.
    #[must_use]
    pub fn register_url_for(&self, suffix: &str) -> Option<&str> {
        if suffix == DEFAULT_NAMESPACE {
            return Some(self.register_url.as_str());
        }
        self.subdomains
            .get(suffix)
            .map(|subdomain| subdomain.register_url.as_str())
    }

    /// Address lookup URL for `address`.
    #[must_use]
    pub fn names_owned_url(&self, address: &str) -> String {
        self.bitcoin_address_lookup_url
            .replace(ADDRESS_PLACEHOLDER, address)
    }

    /// Name lookup URL for a fully-qualified name.
    #[must_use]
    pub fn name_lookup_url_for(&self, name: &str) -> String {
        self.name_lookup_url.replace(NAME_PLACEHOLDER, name)
    }

    /// Price lookup URL for a fully-qualified name.
    #[must_use]
    pub fn price_check_url_for(&self, name: &str) -> String {
        self.price_check_url.replace(NAME_PLACEHOLDER, name)
    }

    /// Driver configuration endpoint for a storage driver.
    #[must_use]
    pub fn storage_driver_url(&self, driver: &str) -> String {
        format!(
            "{}/v1/node/drivers/storage/{driver}?index=1",
            self.core_api_url
        )
    }
}
