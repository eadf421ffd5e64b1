//! Username search page state.
//!
//! # Design
//! - Keep the raw text box value normalized as the user types.
//! - The alert list holds at most one entry; the latest decision wins.
//! - Submitting validates locally and only then names the checks to run.

use stackport_config::ApiSettings;
use stackport_profile::{is_valid_name, normalize_username};

use crate::core::alerts::{Alert, AlertStatus};

/// Page the storage alert links to.
pub const STORAGE_URL: &str = "/account/storage";
/// Message shown while no storage provider is connected.
pub const CONNECT_STORAGE_MESSAGE: &str =
    "Please go to the Storage app and connect a storage provider.";

/// Result of submitting the search form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The candidate failed validation; nothing was dispatched.
    Rejected,
    /// One availability check should run per name.
    Dispatched {
        /// Fully-qualified names to check, in suffix order.
        names: Vec<String>,
    },
}

/// Mutable search page state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchPageState {
    /// Normalized text box value.
    pub username: String,
    /// Username of the last accepted search; empty before the first one.
    pub searching_username: String,
    /// Alerts shown above the form.
    pub alerts: Vec<Alert>,
    /// Whether a storage provider is connected; the form is disabled otherwise.
    pub storage_connected: bool,
    /// Suffixes to check, top-level namespace first.
    pub name_suffixes: Vec<String>,
}

impl SearchPageState {
    /// Build initial state from the active settings.
    #[must_use]
    pub fn new(settings: &ApiSettings) -> Self {
        Self {
            username: String::new(),
            searching_username: String::new(),
            alerts: Vec::new(),
            storage_connected: settings.storage_connected(),
            name_suffixes: settings.name_suffixes(),
        }
    }

    /// Store the text box value after normalization.
    pub fn on_input(&mut self, raw: &str) {
        self.username = normalize_username(raw);
    }

    /// Re-evaluate alerts after the page received new settings.
    pub fn on_settings_updated(&mut self, settings: &ApiSettings) {
        self.alerts.clear();
        self.storage_connected = settings.storage_connected();
        self.name_suffixes = settings.name_suffixes();
        if !self.storage_connected {
            self.update_alert(AlertStatus::Danger, CONNECT_STORAGE_MESSAGE, Some(STORAGE_URL));
        }
    }

    /// Validate the current username and name the checks to dispatch.
    pub fn submit(&mut self) -> SubmitOutcome {
        let first_suffix = self.name_suffixes.first().map_or("", String::as_str);
        let candidate = format!("{}.{first_suffix}", self.username);
        if !is_valid_name(&candidate) {
            self.update_alert(
                AlertStatus::Danger,
                format!("{candidate} is not a valid Blockstack name"),
                None,
            );
            return SubmitOutcome::Rejected;
        }
        self.searching_username.clone_from(&self.username);
        SubmitOutcome::Dispatched {
            names: self.full_names(),
        }
    }

    /// Fully-qualified names for the current search, in suffix order.
    #[must_use]
    pub fn full_names(&self) -> Vec<String> {
        self.name_suffixes
            .iter()
            .map(|suffix| format!("{}.{suffix}", self.searching_username))
            .collect()
    }

    /// Replace every alert with a single new one.
    pub fn update_alert(
        &mut self,
        status: AlertStatus,
        message: impl Into<String>,
        url: Option<&str>,
    ) {
        let alert = Alert::new(status, message);
        self.alerts = vec![match url {
            Some(url) => alert.with_url(url),
            None => alert,
        }];
    }
}

#[cfg(test)]
mod tests {
    use super::{CONNECT_STORAGE_MESSAGE, STORAGE_URL, SearchPageState, SubmitOutcome};
    use crate::core::alerts::AlertStatus;
    use stackport_config::ApiSettings;

    fn connected_settings() -> ApiSettings {
        let mut settings = ApiSettings::default();
        settings.dropbox_access_token = Some("token".to_string());
        settings
    }

    #[test]
    fn input_is_lowercased_and_stripped() {
        let mut state = SearchPageState::new(&connected_settings());
        state.on_input("My Name!");
        assert_eq!(state.username, "myname");
    }

    #[test]
    fn settings_update_shows_single_storage_alert() {
        let settings = ApiSettings::default();
        let mut state = SearchPageState::new(&settings);
        state.update_alert(AlertStatus::Info, "old", None);
        state.on_settings_updated(&settings);
        state.on_settings_updated(&settings);
        assert_eq!(state.alerts.len(), 1);
        assert_eq!(state.alerts[0].message, CONNECT_STORAGE_MESSAGE);
        assert_eq!(state.alerts[0].url.as_deref(), Some(STORAGE_URL));
        assert!(!state.storage_connected);
    }

    #[test]
    fn settings_update_clears_alerts_once_connected() {
        let mut state = SearchPageState::new(&ApiSettings::default());
        state.on_settings_updated(&ApiSettings::default());
        state.on_settings_updated(&connected_settings());
        assert!(state.alerts.is_empty());
        assert!(state.storage_connected);
    }

    #[test]
    fn invalid_username_is_rejected_with_alert() {
        let mut state = SearchPageState::new(&connected_settings());
        state.on_input("");
        assert_eq!(state.submit(), SubmitOutcome::Rejected);
        assert_eq!(state.alerts.len(), 1);
        assert_eq!(state.alerts[0].status, AlertStatus::Danger);
        assert_eq!(state.alerts[0].message, ".id is not a valid Blockstack name");
        assert!(state.searching_username.is_empty());
    }

    #[test]
    fn valid_username_dispatches_every_suffix() {
        let mut state = SearchPageState::new(&connected_settings());
        state.on_input("Alice");
        assert_eq!(
            state.submit(),
            SubmitOutcome::Dispatched {
                names: vec!["alice.id".to_string(), "alice.personal.id".to_string()],
            }
        );
        assert_eq!(state.searching_username, "alice");
        assert!(state.alerts.is_empty());
    }

    #[test]
    fn overlong_username_is_rejected() {
        let mut state = SearchPageState::new(&connected_settings());
        state.on_input(&"a".repeat(40));
        assert_eq!(state.submit(), SubmitOutcome::Rejected);
    }

    #[test]
    fn settings_update_drops_stale_validation_alert() {
        let mut state = SearchPageState::new(&connected_settings());
        state.on_input("");
        assert_eq!(state.submit(), SubmitOutcome::Rejected);
        state.on_settings_updated(&connected_settings());
        assert!(state.alerts.is_empty());
    }
}
