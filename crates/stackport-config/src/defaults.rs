//! Default daemon endpoints and URL template placeholders.
//!
//! # Design
//! - Every daemon URL is derived from a single base so rebasing stays consistent.
//! - Placeholders are literal tokens substituted at call time.

/// Base URL of a locally running Core daemon.
pub const DEFAULT_CORE_API_URL: &str = "http://localhost:6270";
/// Placeholder substituted with a bitcoin address in lookup templates.
pub const ADDRESS_PLACEHOLDER: &str = "{address}";
/// Placeholder substituted with a fully-qualified name in lookup templates.
pub const NAME_PLACEHOLDER: &str = "{name}";
/// Top-level namespace every search is validated against.
pub const DEFAULT_NAMESPACE: &str = "id";
/// Subdomain suffix offered by the default registrar.
pub const DEFAULT_SUBDOMAIN_SUFFIX: &str = "personal.id";
/// Base URL of the default subdomain registrar.
pub const DEFAULT_SUBDOMAIN_REGISTRAR_URL: &str = "http://localhost:7103";

pub(crate) const PING_PATH: &str = "/v1/ping";
pub(crate) const PASSWORD_PROTECTED_READ_PATH: &str = "/v1/wallet/payment_address";
pub(crate) const ZERO_CONF_BALANCE_PATH: &str = "/v1/wallet/balance/0";
pub(crate) const ADDRESS_LOOKUP_PATH: &str = "/v1/addresses/bitcoin/{address}";
pub(crate) const NAME_LOOKUP_PATH: &str = "/v1/names/{name}";
pub(crate) const PRICE_CHECK_PATH: &str = "/v1/prices/names/{name}";
pub(crate) const SEARCH_PATH: &str = "/v1/search";
pub(crate) const REGISTER_PATH: &str = "/v1/names";
