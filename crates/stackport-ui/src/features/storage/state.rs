//! Storage page state.

use stackport_config::ApiSettings;

use crate::core::alerts::{Alert, AlertStatus};
use crate::features::storage::actions::StorageAction;

/// Message shown when the form is submitted without a token.
pub const MISSING_TOKEN_MESSAGE: &str = "Enter a Dropbox access token.";

/// Mutable storage page state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StoragePageState {
    /// Raw token text box value.
    pub token: String,
    /// Alerts shown above the form.
    pub alerts: Vec<Alert>,
    /// A configuration request is in flight.
    pub submitting: bool,
}

impl StoragePageState {
    /// Seed the form from the persisted token, if any.
    #[must_use]
    pub fn new(settings: &ApiSettings) -> Self {
        Self {
            token: settings.dropbox_access_token.clone().unwrap_or_default(),
            alerts: Vec::new(),
            submitting: false,
        }
    }

    /// Settings to configure the daemon with, carrying the entered token.
    ///
    /// # Errors
    ///
    /// Returns the alert text when the token is blank.
    pub fn prepare(&self, settings: &ApiSettings) -> Result<ApiSettings, String> {
        let token = self.token.trim();
        if token.is_empty() {
            return Err(MISSING_TOKEN_MESSAGE.to_string());
        }
        let mut next = settings.clone();
        next.dropbox_access_token = Some(token.to_string());
        Ok(next)
    }

    /// Apply one page transition.
    pub fn apply(&mut self, action: StorageAction) {
        match action {
            StorageAction::Input(raw) => self.token = raw,
            StorageAction::Rejected(message) => {
                self.alerts = vec![Alert::new(AlertStatus::Danger, message)];
            }
            StorageAction::Started => {
                self.alerts.clear();
                self.submitting = true;
            }
            StorageAction::Finished(result) => {
                self.submitting = false;
                self.alerts = vec![match result {
                    Ok(outcome) => Alert::new(
                        AlertStatus::Success,
                        format!("Storage provider connected: {outcome}"),
                    ),
                    Err(message) => Alert::new(AlertStatus::Danger, message),
                }];
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{MISSING_TOKEN_MESSAGE, StorageAction, StoragePageState};
    use crate::core::alerts::AlertStatus;
    use stackport_config::ApiSettings;

    #[test]
    fn blank_token_is_rejected() {
        let settings = ApiSettings::default();
        let mut state = StoragePageState::new(&settings);
        state.apply(StorageAction::Input("   ".to_string()));
        let message = state.prepare(&settings).expect_err("blank token");
        assert_eq!(message, MISSING_TOKEN_MESSAGE);

        state.apply(StorageAction::Rejected(message));
        assert_eq!(state.alerts.len(), 1);
        assert_eq!(state.alerts[0].status, AlertStatus::Danger);
        assert!(!state.submitting);
    }

    #[test]
    fn prepared_settings_carry_trimmed_token() -> Result<(), String> {
        let settings = ApiSettings::default();
        assert!(!settings.storage_connected());
        let mut state = StoragePageState::new(&settings);
        state.apply(StorageAction::Input(" dbx-token ".to_string()));

        let next = state.prepare(&settings)?;
        assert_eq!(next.dropbox_access_token.as_deref(), Some("dbx-token"));
        assert!(next.storage_connected());
        assert!(settings.dropbox_access_token.is_none());
        Ok(())
    }

    #[test]
    fn daemon_rejection_becomes_danger_alert() {
        let mut state = StoragePageState::new(&ApiSettings::default());
        state.apply(StorageAction::Started);
        assert!(state.submitting);
        state.apply(StorageAction::Finished(Err(
            r#"only the "dropbox" storage driver is supported, not "gaia-hub""#.to_string(),
        )));
        assert!(!state.submitting);
        assert_eq!(state.alerts.len(), 1);
        assert_eq!(state.alerts[0].status, AlertStatus::Danger);
        assert!(state.alerts[0].message.contains("gaia-hub"));
    }

    #[test]
    fn success_replaces_previous_alert() {
        let mut state = StoragePageState::new(&ApiSettings::default());
        state.apply(StorageAction::Rejected("old".to_string()));
        state.apply(StorageAction::Started);
        assert!(state.alerts.is_empty());
        state.apply(StorageAction::Finished(Ok("OK".to_string())));
        assert_eq!(state.alerts.len(), 1);
        assert_eq!(state.alerts[0].status, AlertStatus::Success);
        assert_eq!(state.alerts[0].message, "Storage provider connected: OK");
    }

    #[test]
    fn persisted_token_seeds_the_form() {
        let mut settings = ApiSettings::default();
        settings.dropbox_access_token = Some("saved".to_string());
        assert_eq!(StoragePageState::new(&settings).token, "saved");
    }
}
