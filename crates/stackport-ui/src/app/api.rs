//! Core client context for sharing one client per settings snapshot.
//!
//! # Design
//! - Rebuild the client only when settings change.
//! - Compare contexts by pointer so consumers re-render only on rebuild.

use stackport_config::ApiSettings;
use stackport_core_client::CoreClient;
use std::rc::Rc;

/// Shared core client context for UI features.
#[derive(Clone)]
pub(crate) struct ApiCtx {
    /// Client bound to the active settings.
    pub client: Rc<CoreClient>,
}

impl ApiCtx {
    /// Create a new context for `settings`.
    pub(crate) fn new(settings: ApiSettings) -> Self {
        Self {
            client: Rc::new(CoreClient::new(settings)),
        }
    }
}

impl PartialEq for ApiCtx {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.client, &other.client)
    }
}
