//! Effectful shell around the pure flow core.
//!
//! This module provides the "imperative shell": the store that owns the
//! state, and the timed security-code validation that runs as a
//! Stillwater effect against an injected environment.
//!
//! # Key Concepts
//!
//! - **Store**: single writer of the state; applies actions via the reducer
//! - **Validation**: compares the entered value against the environment's
//!   secret after a fixed delay, then always clears `loading`
//! - **Cancellation**: an in-flight run is aborted on `Reset` and on drop

mod store;
mod validation;

pub use store::Store;
pub use validation::{validate, ValidationEffect, ValidationEnv, ValidationOutcome};
