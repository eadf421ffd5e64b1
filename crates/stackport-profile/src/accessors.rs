//! Display accessors over [`Profile`] documents.

use crate::model::{Account, Profile};

/// Services rendered as social accounts in search results.
pub const SOCIAL_SERVICES: [&str; 10] = [
    "twitter",
    "facebook",
    "github",
    "instagram",
    "linkedin",
    "hackernews",
    "reddit",
    "youtube",
    "angellist",
    "stackoverflow",
];

/// Display name: `name`, or given and family names joined by a space.
#[must_use]
pub fn display_name(profile: &Profile) -> Option<String> {
    if let Some(name) = profile.name.as_deref().filter(|name| !name.is_empty()) {
        return Some(name.to_string());
    }
    let parts: Vec<&str> = [profile.given_name.as_deref(), profile.family_name.as_deref()]
        .into_iter()
        .flatten()
        .filter(|part| !part.is_empty())
        .collect();
    if parts.is_empty() {
        None
    } else {
        Some(parts.join(" "))
    }
}

/// URL of the image named `avatar`, if any.
#[must_use]
pub fn avatar_url(profile: &Profile) -> Option<&str> {
    profile
        .image
        .iter()
        .find(|image| image.name.as_deref() == Some("avatar"))
        .and_then(|image| image.content_url.as_deref())
}

/// Accounts on known social services that carry an identifier.
#[must_use]
pub fn social_accounts(profile: &Profile) -> Vec<&Account> {
    profile
        .account
        .iter()
        .filter(|account| {
            SOCIAL_SERVICES.contains(&account.service.as_str()) && !account.identifier.is_empty()
        })
        .collect()
}
