//! Core confirmation-flow types and logic.
//!
//! This module contains the pure functional core of the flow:
//! - The state record (`FlowState`)
//! - The action sum type (`Action`)
//! - The transition function (`reduce`)
//! - Screen selection and view models (`Screen`, `ScreenView`)
//!
//! All logic in this module is pure (no side effects), following
//! the "pure core, imperative shell" philosophy. The timed validation
//! effect lives in [`crate::effects`].

mod action;
mod reducer;
mod screen;
mod state;

pub use action::Action;
pub use reducer::reduce;
pub use screen::{
    Screen, ScreenView, CONFIRM_QUESTION, ENTRY_PROMPT, ERROR_TEXT, INPUT_PLACEHOLDER,
    LOADING_TEXT,
};
pub use state::FlowState;
