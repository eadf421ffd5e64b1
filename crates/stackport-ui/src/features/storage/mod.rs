//! Storage provider connection.
//!
//! # Design
//! - Page state is DOM-free and tested natively.
//! - The token is persisted only after the daemon accepted the driver
//!   configuration, so the search page never unlocks on a rejected token.

pub mod actions;
#[cfg(target_arch = "wasm32")]
pub mod api;
pub mod state;
#[cfg(target_arch = "wasm32")]
pub mod view;
