//! The flow's state record.
//!
//! The whole confirmation flow lives in one small record. It is only ever
//! replaced as a whole by the reducer; nothing mutates it in place.

use serde::{Deserialize, Serialize};

/// State of the delete confirmation flow.
///
/// The record starts empty and idle (see [`FlowState::initial`]) and is
/// advanced exclusively through [`reduce`](crate::core::reduce). The three
/// screens of the flow are derived from `(deleted, confirmed)` by
/// [`Screen::select`](crate::core::Screen::select); `value`, `error` and
/// `loading` only influence how the entry screen presents itself.
///
/// # Example
///
/// ```rust
/// use deleteguard::core::FlowState;
///
/// let state = FlowState::initial();
/// assert_eq!(state.value, "");
/// assert!(!state.error);
/// assert!(!state.loading);
/// assert!(!state.deleted);
/// assert!(!state.confirmed);
/// ```
#[derive(Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub struct FlowState {
    /// Text currently entered into the security-code input.
    pub value: String,
    /// True when the last validation run rejected the entered code.
    pub error: bool,
    /// True while a validation run is pending.
    pub loading: bool,
    /// True once the user confirmed the deletion.
    pub deleted: bool,
    /// True once the security code validated successfully.
    pub confirmed: bool,
}

impl FlowState {
    /// The initial state: empty input, no flags set.
    pub fn initial() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_state_is_empty_and_idle() {
        let state = FlowState::initial();

        assert_eq!(state.value, "");
        assert!(!state.error);
        assert!(!state.loading);
        assert!(!state.deleted);
        assert!(!state.confirmed);
    }

    #[test]
    fn initial_matches_default() {
        assert_eq!(FlowState::initial(), FlowState::default());
    }

    #[test]
    fn state_serializes_correctly() {
        let state = FlowState {
            value: "paradigma".to_string(),
            loading: true,
            ..FlowState::initial()
        };

        let json = serde_json::to_string(&state).unwrap();
        let deserialized: FlowState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, deserialized);
    }

    #[test]
    fn state_is_cloneable_and_comparable() {
        let state = FlowState {
            confirmed: true,
            ..FlowState::initial()
        };
        let cloned = state.clone();

        assert_eq!(state, cloned);
        assert_ne!(state, FlowState::initial());
    }
}
