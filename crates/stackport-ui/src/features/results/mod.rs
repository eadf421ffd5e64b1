//! Profile search results feature wiring.
//!
//! # Design
//! - Row models are derived from legacy-format profiles through the profile
//!   adapter and tested natively.
//! - Rendering never mutates the row model.

#[cfg(target_arch = "wasm32")]
pub mod api;
pub mod logic;
#[cfg(target_arch = "wasm32")]
pub mod view;
