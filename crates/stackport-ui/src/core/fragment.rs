//! Read-once credentials passed in the URL fragment.
//!
//! # Design
//! - The fragment is a `key=value&key=value` list, form-urlencoded.
//! - A value is handed out once; the key is then overwritten with `off` so
//!   reloads and shared links do not replay it.
//! - Storage is behind [`FragmentParams`] so the browser location and tests
//!   share the same read-once logic.

use url::form_urlencoded;

/// Fragment key carrying the daemon API password.
pub const CORE_API_PASSWORD_KEY: &str = "coreAPIPassword";
/// Fragment key carrying the local log server port.
pub const LOG_SERVER_PORT_KEY: &str = "logServerPort";
/// Value marking a key as already consumed.
pub const CONSUMED_SENTINEL: &str = "off";

/// State of one fragment key.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FragmentFlag {
    /// The key is absent or empty.
    Unset,
    /// The key held a value, which has now been consumed.
    Set(String),
    /// The key was consumed earlier.
    Consumed,
}

impl FragmentFlag {
    /// Value carried by a freshly consumed key.
    #[must_use]
    pub fn value(&self) -> Option<&str> {
        match self {
            Self::Set(value) => Some(value.as_str()),
            Self::Unset | Self::Consumed => None,
        }
    }
}

/// Key-value storage backing the URL fragment.
pub trait FragmentParams {
    /// Current value of `key`.
    fn get(&self, key: &str) -> Option<String>;
    /// Overwrite `key` with `value`.
    fn set(&mut self, key: &str, value: &str);
}

/// Fragment parameters held in memory, in insertion order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FragmentMap {
    entries: Vec<(String, String)>,
}

impl FragmentMap {
    /// Parse a fragment, with or without its leading `#`.
    #[must_use]
    pub fn parse(fragment: &str) -> Self {
        let fragment = fragment.strip_prefix('#').unwrap_or(fragment);
        let entries = form_urlencoded::parse(fragment.as_bytes())
            .map(|(key, value)| (key.into_owned(), value.into_owned()))
            .collect();
        Self { entries }
    }

    /// Render the parameters back into fragment form, without the `#`.
    #[must_use]
    pub fn render(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.entries.iter())
            .finish()
    }
}

impl FragmentParams for FragmentMap {
    fn get(&self, key: &str) -> Option<String> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == key)
            .map(|(_, value)| value.clone())
    }

    fn set(&mut self, key: &str, value: &str) {
        if let Some(entry) = self.entries.iter_mut().find(|(existing, _)| existing == key) {
            entry.1 = value.to_string();
        } else {
            self.entries.push((key.to_string(), value.to_string()));
        }
    }
}

/// Read `key` once, marking it consumed when it carried a value.
pub fn take_fragment_param<P: FragmentParams + ?Sized>(params: &mut P, key: &str) -> FragmentFlag {
    match params.get(key) {
        None => FragmentFlag::Unset,
        Some(value) if value.is_empty() => FragmentFlag::Unset,
        Some(value) if value == CONSUMED_SENTINEL => FragmentFlag::Consumed,
        Some(value) => {
            params.set(key, CONSUMED_SENTINEL);
            FragmentFlag::Set(value)
        }
    }
}
