//! Page-level alert messages.
//!
//! # Design
//! - Alerts are plain data; pages own their list and replace it wholesale.
//! - Status names match the CSS modifiers used by the alert component.

/// Severity of an alert.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AlertStatus {
    /// Blocking problem the user must fix.
    Danger,
    /// Non-blocking warning.
    Warning,
    /// Informational notice.
    Info,
    /// Completed action.
    Success,
}

impl AlertStatus {
    /// Status name used in CSS classes.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Danger => "danger",
            Self::Warning => "warning",
            Self::Info => "info",
            Self::Success => "success",
        }
    }
}

/// A single alert shown above page content.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Alert {
    /// Severity.
    pub status: AlertStatus,
    /// Message text.
    pub message: String,
    /// Optional in-app link the alert points to.
    pub url: Option<String>,
}

impl Alert {
    /// Build an alert without a link.
    #[must_use]
    pub fn new(status: AlertStatus, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
            url: None,
        }
    }

    /// Attach an in-app link.
    #[must_use]
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }
}
