//! Actions that drive the confirmation flow.

use serde::{Deserialize, Serialize};

/// A discrete named event describing an intended state change.
///
/// Actions are created by user interaction (keystrokes and clicks) or by the
/// validation effect, consumed synchronously by
/// [`reduce`](crate::core::reduce), and never persisted. The serialized form
/// mirrors the dispatch shape of reducer-style stores:
/// `{"type": "CHECK"}`, `{"type": "WRITE", "payload": "..."}`.
///
/// # Example
///
/// ```rust
/// use deleteguard::core::Action;
///
/// let action = Action::Write("secret".to_string());
/// assert_eq!(action.name(), "WRITE");
/// ```
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Action {
    /// Request validation of the entered security code.
    Check,
    /// Replace the entered security code with the payload.
    Write(String),
    /// Validation rejected the entered code.
    Error,
    /// Validation accepted the entered code.
    Confirm,
    /// The user confirmed the deletion.
    Delete,
    /// Return to the entry screen and clear the input.
    Reset,
    /// A validation run finished, successful or not.
    FinishLoading,
}

impl Action {
    /// Get the action's tag for display/logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Check => "CHECK",
            Self::Write(_) => "WRITE",
            Self::Error => "ERROR",
            Self::Confirm => "CONFIRM",
            Self::Delete => "DELETE",
            Self::Reset => "RESET",
            Self::FinishLoading => "FINISH_LOADING",
        }
    }
}
