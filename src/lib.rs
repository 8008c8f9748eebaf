//! Deleteguard: a security-code-gated delete confirmation flow
//!
//! Deleteguard is built on Stillwater's "pure core, imperative shell"
//! philosophy. The flow logic is a pure reducer over a small state record,
//! while the single side effect, the timed security-code validation, is
//! isolated in the store and runs as a Stillwater effect against an
//! injected environment.
//!
//! # Core Concepts
//!
//! - **State**: one record (`FlowState`) holding the input value and the
//!   error/loading/deleted/confirmed flags
//! - **Actions**: a closed sum type (`Action`) applied by the pure
//!   `reduce` function
//! - **Screens**: three mutually exclusive views derived from state,
//!   selected by `Screen::select`
//! - **Store**: the single writer; arms a one-shot validation timer when
//!   `loading` transitions to true and cancels it on reset or drop
//!
//! # Example
//!
//! ```rust
//! use deleteguard::core::{reduce, Action, FlowState, Screen};
//!
//! let state = FlowState::initial();
//! let state = reduce(&state, &Action::Write("paradigma".to_string()));
//! let state = reduce(&state, &Action::Check);
//!
//! assert!(state.loading);
//! assert_eq!(state.value, "paradigma");
//! assert_eq!(Screen::select(&state), Screen::Entry);
//! ```

pub mod builder;
pub mod core;
pub mod effects;

// Re-export commonly used types
pub use crate::builder::{BuildError, StoreBuilder};
pub use crate::core::{reduce, Action, FlowState, Screen, ScreenView};
pub use crate::effects::{Store, ValidationEnv, ValidationOutcome};
