//! Username search feature wiring.
//!
//! # Design
//! - Page state and row decisions are DOM-free and tested natively.
//! - Availability checks run through the shared core client; results land in
//!   the app store, fenced by search generation.

pub mod actions;
#[cfg(target_arch = "wasm32")]
pub mod api;
pub mod logic;
pub mod state;
#[cfg(target_arch = "wasm32")]
pub mod view;
