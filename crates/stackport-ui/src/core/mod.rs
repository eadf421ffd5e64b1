//! Core, DOM-free primitives and helpers for the Web UI.
pub mod alerts;
pub mod availability;
pub mod fragment;
pub mod store;
