//! Adapter from legacy (v2) profile documents to the current person schema.
//!
//! Legacy documents nest values (`name.formatted`, `avatar.url`,
//! `twitter.username`). Documents that already carry `@type` are treated as
//! current-format and only deserialized.

use serde_json::{Value, json};
use tracing::debug;

use crate::model::{Account, ImageObject, Profile, WebSite};

const PERSON_TYPE: &str = "Person";
const ACCOUNT_TYPE: &str = "Account";
const LEGACY_PROOF_SERVICES: [&str; 4] = ["twitter", "facebook", "github", "instagram"];

/// Convert a legacy profile document into a [`Profile`].
///
/// Documents that cannot be read yield an empty person profile.
#[must_use]
pub fn from_legacy_format(legacy: &Value) -> Profile {
    if legacy.get("@type").is_some() {
        return serde_json::from_value(legacy.clone()).unwrap_or_else(|err| {
            debug!(error = %err, "current-format profile did not parse");
            person()
        });
    }

    let mut profile = person();
    profile.name = nested_str(legacy, "name", "formatted");
    profile.description = str_field(legacy, "bio");

    for role in ["avatar", "cover"] {
        if let Some(url) = nested_str(legacy, role, "url") {
            profile.image.push(ImageObject {
                kind: Some("ImageObject".to_string()),
                name: Some(role.to_string()),
                content_url: Some(url),
            });
        }
    }

    if let Some(url) = str_field(legacy, "website") {
        profile.website.push(WebSite {
            kind: Some("WebSite".to_string()),
            url,
        });
    }

    for service in LEGACY_PROOF_SERVICES {
        if let Some(username) = nested_str(legacy, service, "username") {
            profile.account.push(Account {
                kind: Some(ACCOUNT_TYPE.to_string()),
                service: service.to_string(),
                identifier: username,
                proof_type: Some("http".to_string()),
                proof_url: legacy
                    .get(service)
                    .and_then(|entry| entry.get("proof"))
                    .and_then(|proof| proof.get("url"))
                    .and_then(Value::as_str)
                    .map(str::to_string),
                ..Account::default()
            });
        }
    }

    if let Some(address) = nested_str(legacy, "bitcoin", "address") {
        profile.account.push(Account {
            kind: Some(ACCOUNT_TYPE.to_string()),
            service: "bitcoin".to_string(),
            identifier: address,
            role: Some("payment".to_string()),
            ..Account::default()
        });
    }

    if let Some(fingerprint) = nested_str(legacy, "pgp", "fingerprint") {
        profile.account.push(Account {
            kind: Some(ACCOUNT_TYPE.to_string()),
            service: "pgp".to_string(),
            identifier: fingerprint,
            content_url: nested_str(legacy, "pgp", "url"),
            ..Account::default()
        });
    }

    if let Some(locality) = nested_str(legacy, "location", "formatted") {
        profile.extra.insert(
            "address".to_string(),
            json!({ "@type": "PostalAddress", "addressLocality": locality }),
        );
    }

    profile
}

fn person() -> Profile {
    Profile {
        kind: Some(PERSON_TYPE.to_string()),
        ..Profile::default()
    }
}

fn str_field(value: &Value, key: &str) -> Option<String> {
    value
        .get(key)
        .and_then(Value::as_str)
        .filter(|text| !text.is_empty())
        .map(str::to_string)
}

fn nested_str(value: &Value, outer: &str, inner: &str) -> Option<String> {
    value.get(outer).and_then(|entry| str_field(entry, inner))
}
