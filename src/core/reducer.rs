//! The pure transition function.
//!
//! `reduce` is a total function of `(state, action)`: every action variant
//! yields a state, and no arm can panic. All side effects (the validation
//! timer) live in the imperative shell; dispatching `Check` only records the
//! intent to validate.

use super::action::Action;
use super::state::FlowState;

/// Apply an action to the current state, producing the next state.
///
/// Pure: no side effects, deterministic, and the input state is never
/// mutated. `Check` while a validation run is already pending is identity,
/// so the state can never claim a validation is wanted without a timer
/// armed for it.
///
/// # Example
///
/// ```rust
/// use deleteguard::core::{reduce, Action, FlowState};
///
/// let state = FlowState::initial();
/// let state = reduce(&state, &Action::Write("paradigma".to_string()));
/// let state = reduce(&state, &Action::Check);
///
/// assert_eq!(state.value, "paradigma");
/// assert!(state.loading);
/// ```
pub fn reduce(state: &FlowState, action: &Action) -> FlowState {
    match action {
        // Re-entrant validation requests are ignored; the watcher is
        // edge-triggered and would not arm a second timer.
        Action::Check if state.loading => state.clone(),
        Action::Check => FlowState {
            loading: true,
            ..state.clone()
        },
        Action::Write(payload) => FlowState {
            value: payload.clone(),
            ..state.clone()
        },
        Action::Error => FlowState {
            error: true,
            loading: false,
            ..state.clone()
        },
        Action::Confirm => FlowState {
            error: false,
            loading: false,
            confirmed: true,
            ..state.clone()
        },
        Action::Delete => FlowState {
            deleted: true,
            ..state.clone()
        },
        // Reset deliberately leaves `error` and `loading` untouched.
        Action::Reset => FlowState {
            value: String::new(),
            confirmed: false,
            deleted: false,
            ..state.clone()
        },
        Action::FinishLoading => FlowState {
            loading: false,
            ..state.clone()
        },
    }
}
