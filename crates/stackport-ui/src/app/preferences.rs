//! Settings persistence and URL fragment credentials.

use crate::core::fragment::{
    CORE_API_PASSWORD_KEY, FragmentFlag, FragmentMap, FragmentParams, LOG_SERVER_PORT_KEY,
    take_fragment_param,
};
use gloo::console;
use gloo::storage::{LocalStorage, Storage};
use gloo::utils::window;
use stackport_config::{ApiSettings, validate_settings};

pub(crate) const SETTINGS_KEY: &str = "stackport.settings";

/// Fragment parameters of the current browser location.
pub(crate) struct LocationHashFragment {
    params: FragmentMap,
    dirty: bool,
}

impl LocationHashFragment {
    pub(crate) fn read() -> Self {
        let hash = window().location().hash().unwrap_or_default();
        Self {
            params: FragmentMap::parse(&hash),
            dirty: false,
        }
    }

    /// Write consumed keys back to the address bar.
    pub(crate) fn commit(&self) {
        if !self.dirty {
            return;
        }
        if window()
            .location()
            .set_hash(&self.params.render())
            .is_err()
        {
            console::warn!("failed to rewrite location fragment");
        }
    }
}

impl FragmentParams for LocationHashFragment {
    fn get(&self, key: &str) -> Option<String> {
        self.params.get(key)
    }

    fn set(&mut self, key: &str, value: &str) {
        self.dirty = true;
        self.params.set(key, value);
    }
}

/// Load persisted settings, then apply read-once fragment credentials.
pub(crate) fn load_settings() -> ApiSettings {
    let mut settings = LocalStorage::get::<ApiSettings>(SETTINGS_KEY)
        .ok()
        .filter(|settings| match validate_settings(settings) {
            Ok(()) => true,
            Err(err) => {
                console::warn!("ignoring stored settings", err.to_string());
                false
            }
        })
        .unwrap_or_default();

    let mut fragment = LocationHashFragment::read();
    if let FragmentFlag::Set(password) = take_fragment_param(&mut fragment, CORE_API_PASSWORD_KEY) {
        settings.core_api_password = Some(password);
        persist_settings(&settings);
    }
    if let FragmentFlag::Set(port) = take_fragment_param(&mut fragment, LOG_SERVER_PORT_KEY) {
        console::debug!("log server port", port);
    }
    fragment.commit();
    settings
}

pub(crate) fn persist_settings(settings: &ApiSettings) {
    if let Err(err) = LocalStorage::set(SETTINGS_KEY, settings) {
        console::warn!("failed to persist settings", err.to_string());
    }
}
