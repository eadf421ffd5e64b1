//! Shared presentational components.
pub(crate) mod alert;
