//! Storage routing entries inside profile documents.
//!
//! # Design
//! - Copy-and-return: the caller's profile is never mutated.
//! - At most one `storage` entry per driver survives a call.

use crate::model::{Account, Profile};

/// Return a copy of `profile` whose storage entry for `driver` points at `index_url`.
///
/// An existing entry keeps its position and only its `contentUrl` changes;
/// later duplicates for the same driver are dropped. When no entry exists a
/// new one is appended.
#[must_use]
pub fn insert_storage_routing_info(profile: &Profile, driver: &str, index_url: &str) -> Profile {
    let mut next = profile.clone();
    let mut patched = false;
    next.account.retain_mut(|account| {
        if !account.is_storage_for(driver) {
            return true;
        }
        if patched {
            return false;
        }
        account.content_url = Some(index_url.to_string());
        patched = true;
        true
    });
    if !patched {
        next.account.push(Account::storage(driver, index_url));
    }
    next
}

#[cfg(test)]
mod tests {
    use super::insert_storage_routing_info;
    use crate::model::{Account, Profile};

    fn twitter() -> Account {
        Account {
            service: "twitter".to_string(),
            identifier: "alice".to_string(),
            ..Account::default()
        }
    }

    fn storage_entries<'a>(profile: &'a Profile, driver: &str) -> Vec<&'a Account> {
        profile
            .account
            .iter()
            .filter(|account| account.is_storage_for(driver))
            .collect()
    }

    #[test]
    fn appends_when_missing() {
        let profile = Profile {
            account: vec![twitter()],
            ..Profile::default()
        };
        let next = insert_storage_routing_info(&profile, "dropbox", "https://a");
        assert_eq!(next.account.len(), profile.account.len() + 1);
        assert_eq!(profile.account.len(), 1);
        assert_eq!(
            next.account[1].content_url.as_deref(),
            Some("https://a")
        );
    }

    #[test]
    fn repeated_application_is_idempotent() {
        let profile = Profile::default();
        let once = insert_storage_routing_info(&profile, "dropbox", "https://a");
        let twice = insert_storage_routing_info(&once, "dropbox", "https://a");
        assert_eq!(once, twice);
        assert_eq!(storage_entries(&twice, "dropbox").len(), 1);
    }

    #[test]
    fn patches_existing_entry_in_place() {
        let profile = Profile {
            account: vec![
                Account::storage("dropbox", "https://old"),
                twitter(),
                Account::storage("s3", "https://bucket"),
            ],
            ..Profile::default()
        };
        let next = insert_storage_routing_info(&profile, "dropbox", "https://new");
        assert_eq!(next.account.len(), 3);
        assert_eq!(next.account[0].content_url.as_deref(), Some("https://new"));
        assert_eq!(next.account[2].content_url.as_deref(), Some("https://bucket"));
    }

    #[test]
    fn collapses_duplicate_entries() {
        let profile = Profile {
            account: vec![
                Account::storage("dropbox", "https://one"),
                twitter(),
                Account::storage("dropbox", "https://two"),
            ],
            ..Profile::default()
        };
        let next = insert_storage_routing_info(&profile, "dropbox", "https://three");
        let entries = storage_entries(&next, "dropbox");
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].content_url.as_deref(), Some("https://three"));
        assert_eq!(next.account.len(), 2);
    }

    #[test]
    fn social_account_named_like_driver_is_not_storage() {
        let profile = Profile {
            account: vec![Account {
                service: "dropbox".to_string(),
                identifier: "alice".to_string(),
                ..Account::default()
            }],
            ..Profile::default()
        };
        let next = insert_storage_routing_info(&profile, "dropbox", "https://a");
        assert_eq!(next.account.len(), 2);
        assert_eq!(next.account[0].identifier, "alice");
    }
}
