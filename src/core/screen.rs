//! Screen selection and view models.
//!
//! The presentation layer has no state of its own: it reads a [`ScreenView`]
//! derived from the current [`FlowState`] and emits actions back into the
//! store. Which of the three screens is shown is a deterministic function of
//! `(deleted, confirmed)`.

use serde::{Deserialize, Serialize};

use super::state::FlowState;

/// Prompt shown on the entry screen.
pub const ENTRY_PROMPT: &str = "Please, write the security code to probe that you want to delete";
/// Placeholder text for the security-code input.
pub const INPUT_PLACEHOLDER: &str = "Security Code";
/// Error text shown when the last validation run rejected the code.
pub const ERROR_TEXT: &str = "Error: code is incorrect";
/// Indicator text shown while a validation run is pending.
pub const LOADING_TEXT: &str = "Loading...";
/// Question shown on the confirm screen.
pub const CONFIRM_QUESTION: &str = "Are you sure you want to delete it?";

/// One of the three mutually exclusive screens of the flow.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Screen {
    /// Security-code entry.
    Entry,
    /// "Are you sure?" confirmation.
    Confirm,
    /// Deletion done.
    Deleted,
}

impl Screen {
    /// Select the screen for a state.
    ///
    /// `deleted` wins over `confirmed`; a state that is both deleted and
    /// confirmed shows the deleted screen.
    ///
    /// # Example
    ///
    /// ```rust
    /// use deleteguard::core::{FlowState, Screen};
    ///
    /// let state = FlowState {
    ///     confirmed: true,
    ///     ..FlowState::initial()
    /// };
    /// assert_eq!(Screen::select(&state), Screen::Confirm);
    /// ```
    pub fn select(state: &FlowState) -> Self {
        if state.deleted {
            Self::Deleted
        } else if state.confirmed {
            Self::Confirm
        } else {
            Self::Entry
        }
    }

    /// Get the screen's name for display/logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Entry => "Entry",
            Self::Confirm => "Confirm",
            Self::Deleted => "Deleted",
        }
    }
}

/// Everything a renderer needs for the current screen.
///
/// Derived from state plus the display name of the item being deleted;
/// carries no state of its own.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum ScreenView {
    /// Security-code entry screen.
    Entry {
        /// Heading, `Delete {name}`.
        title: String,
        /// Current input text.
        value: String,
        /// The input is disabled while a validation run is pending.
        input_disabled: bool,
        /// Show [`ERROR_TEXT`]. Suppressed while loading even if the
        /// error flag is still set.
        error_visible: bool,
        /// Show [`LOADING_TEXT`].
        loading_visible: bool,
    },
    /// Confirmation screen: offers "Yes, delete" and "No, go back".
    Confirm {
        /// Heading, `Delete {name}`.
        title: String,
    },
    /// Deletion-done screen: offers "Go back, reset".
    Deleted {
        /// Heading, `{name} was deleted`.
        title: String,
    },
}

impl ScreenView {
    /// Derive the view model for a state and a display name.
    pub fn derive(state: &FlowState, name: &str) -> Self {
        match Screen::select(state) {
            Screen::Entry => Self::Entry {
                title: format!("Delete {name}"),
                value: state.value.clone(),
                input_disabled: state.loading,
                error_visible: state.error && !state.loading,
                loading_visible: state.loading,
            },
            Screen::Confirm => Self::Confirm {
                title: format!("Delete {name}"),
            },
            Screen::Deleted => Self::Deleted {
                title: format!("{name} was deleted"),
            },
        }
    }

    /// The screen this view renders.
    pub fn screen(&self) -> Screen {
        match self {
            Self::Entry { .. } => Screen::Entry,
            Self::Confirm { .. } => Screen::Confirm,
            Self::Deleted { .. } => Screen::Deleted,
        }
    }
}
