//! Command handlers grouped by concern.

pub(crate) mod names;
pub(crate) mod search;
pub(crate) mod settings;
pub(crate) mod status;
pub(crate) mod storage;
