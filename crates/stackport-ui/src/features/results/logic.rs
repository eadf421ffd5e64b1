//! Search result row model.

use serde_json::Value;
use stackport_profile::{avatar_url, display_name, from_legacy_format, social_accounts};

/// Image shown when a profile has no avatar.
pub const AVATAR_PLACEHOLDER_URL: &str = "https://s3.amazonaws.com/65m/avatar-placeholder.png";
/// Image to swap in after `failed_src` could not be loaded.
///
/// Returns `None` once the placeholder itself failed, so the swap happens once.
#[must_use]
pub fn avatar_fallback(failed_src: &str) -> Option<&'static str> {
    (failed_src != AVATAR_PLACEHOLDER_URL).then_some(AVATAR_PLACEHOLDER_URL)
}

/// Separator between social accounts in a row.
pub const ACCOUNT_SEPARATOR: &str = " / ";

/// Display data for one search result.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultRow {
    /// Blockchain identifier the row links to.
    pub blockchain_id: String,
    /// Display name, empty when the profile has none.
    pub name: String,
    /// Avatar image, or the placeholder.
    pub avatar_url: String,
    /// Social accounts rendered as `service : identifier`.
    pub accounts: Vec<String>,
}

impl ResultRow {
    /// Derive a row from a legacy-format profile document.
    #[must_use]
    pub fn from_legacy(blockchain_id: &str, profile: &Value) -> Self {
        let profile = from_legacy_format(profile);
        Self {
            blockchain_id: blockchain_id.to_string(),
            name: display_name(&profile).unwrap_or_default(),
            avatar_url: avatar_url(&profile)
                .unwrap_or(AVATAR_PLACEHOLDER_URL)
                .to_string(),
            accounts: social_accounts(&profile)
                .into_iter()
                .map(|account| format!("{} : {}", account.service, account.identifier))
                .collect(),
        }
    }

    /// In-app link to the profile page.
    #[must_use]
    pub fn href(&self) -> String {
        format!("/profile/blockchain/{}", self.blockchain_id)
    }

    /// Accounts joined by the separator, without a trailing separator.
    #[must_use]
    pub fn accounts_line(&self) -> String {
        self.accounts.join(ACCOUNT_SEPARATOR)
    }
}
