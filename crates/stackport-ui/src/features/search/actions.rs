//! Username search actions.
//!
//! # Design
//! - Capture user intent separate from rendering.
//! - Actions are UI-only and never perform side effects.

/// High-level search page actions from the UI.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchAction {
    /// The username text box changed.
    Input(String),
    /// The search form was submitted.
    Submit,
}
