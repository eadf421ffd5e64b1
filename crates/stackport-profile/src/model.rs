//! Serde types for profile documents.
//!
//! # Design
//! - Documents are loosely typed: known fields are typed, everything else is
//!   kept in `extra` so a round trip never drops data we do not understand.
//! - Every field is optional on input.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Account identifier reserved for storage routing entries.
pub const STORAGE_IDENTIFIER: &str = "storage";

/// A person profile document.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    /// Schema type, normally `Person`.
    #[serde(rename = "@type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Full display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Given name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub given_name: Option<String>,
    /// Family name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub family_name: Option<String>,
    /// Free-form biography.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Avatar and cover images.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub image: Vec<ImageObject>,
    /// Personal websites.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub website: Vec<WebSite>,
    /// Linked accounts, including storage routing entries.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub account: Vec<Account>,
    /// Fields not modelled above.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// An image attached to a profile.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageObject {
    /// Schema type, normally `ImageObject`.
    #[serde(rename = "@type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Role of the image (`avatar`, `cover`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Image location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_url: Option<String>,
}

/// A website linked from a profile.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebSite {
    /// Schema type, normally `WebSite`.
    #[serde(rename = "@type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Site URL.
    #[serde(default)]
    pub url: String,
}

/// An account entry: a social proof, a payment address, or a storage route.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    /// Schema type, normally `Account`.
    #[serde(rename = "@type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Service name (`twitter`, `bitcoin`, or a storage driver name).
    #[serde(default)]
    pub service: String,
    /// Identifier on the service (`storage` for routing entries).
    #[serde(default)]
    pub identifier: String,
    /// Proof mechanism for social accounts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proof_type: Option<String>,
    /// Location of the proof.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proof_url: Option<String>,
    /// Content location (storage index URL, key URL).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_url: Option<String>,
    /// Role of the account (`payment`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    /// Fields not modelled above.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Account {
    /// Build a storage routing entry for `driver` pointing at `index_url`.
    #[must_use]
    pub fn storage(driver: &str, index_url: &str) -> Self {
        Self {
            identifier: STORAGE_IDENTIFIER.to_string(),
            service: driver.to_string(),
            content_url: Some(index_url.to_string()),
            ..Self::default()
        }
    }

    /// Whether this entry routes storage for `driver`.
    #[must_use]
    pub fn is_storage_for(&self, driver: &str) -> bool {
        self.identifier == STORAGE_IDENTIFIER && self.service == driver
    }
}

#[cfg(test)]
mod tests {
    use super::{Account, Profile};
    use serde_json::json;

    #[test]
    fn unknown_fields_survive_a_round_trip() -> Result<(), serde_json::Error> {
        let document = json!({
            "@type": "Person",
            "name": "Alice",
            "account": [{
                "@type": "Account",
                "service": "twitter",
                "identifier": "alice",
                "proofType": "http",
                "customField": 7
            }],
            "apps": {"chat": "https://example.com"}
        });
        let profile: Profile = serde_json::from_value(document.clone())?;
        assert_eq!(profile.kind.as_deref(), Some("Person"));
        assert_eq!(profile.account[0].proof_type.as_deref(), Some("http"));
        assert_eq!(serde_json::to_value(&profile)?, document);
        Ok(())
    }

    #[test]
    fn storage_entry_serializes_content_url() -> Result<(), serde_json::Error> {
        let entry = Account::storage("dropbox", "https://dl.example/index");
        assert!(entry.is_storage_for("dropbox"));
        assert!(!entry.is_storage_for("s3"));
        assert_eq!(
            serde_json::to_value(&entry)?,
            json!({
                "service": "dropbox",
                "identifier": "storage",
                "contentUrl": "https://dl.example/index"
            })
        );
        Ok(())
    }
}
