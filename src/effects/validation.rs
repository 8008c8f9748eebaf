//! Security-code validation as an effect.
//!
//! The comparison itself is pure; it is wrapped in an effect so that the
//! expected secret is read from the environment instead of a hardcoded
//! constant, and so tests can substitute their own configuration.

use std::convert::Infallible;
use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use stillwater::effect::BoxedEffect;
use stillwater::prelude::*;

use crate::core::Action;

/// Environment for validation effects.
///
/// Carries the expected secret and the simulated server delay. Built once
/// when the store is constructed and never mutated afterwards.
#[derive(Clone)]
pub struct ValidationEnv {
    secret: String,
    delay: Duration,
}

impl ValidationEnv {
    /// Delay before a validation run resolves, simulating a round trip
    /// to a server.
    pub const DEFAULT_DELAY: Duration = Duration::from_millis(1000);

    /// Create an environment with the default delay.
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            delay: Self::DEFAULT_DELAY,
        }
    }

    /// Override the validation delay.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// The expected security code.
    pub fn secret(&self) -> &str {
        &self.secret
    }

    /// How long a validation run takes to resolve.
    pub fn delay(&self) -> Duration {
        self.delay
    }
}

// The secret stays out of logs.
impl fmt::Debug for ValidationEnv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidationEnv")
            .field("secret", &"<redacted>")
            .field("delay", &self.delay)
            .finish()
    }
}

/// Result of comparing an entered value against the expected secret.
///
/// A rejected code is an outcome, not an error: the flow recovers by
/// letting the user correct the input and check again.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum ValidationOutcome {
    /// The entered value matched the secret.
    Confirmed,
    /// The entered value did not match the secret.
    Rejected,
}

impl ValidationOutcome {
    /// The action this outcome dispatches back into the store.
    pub fn action(self) -> Action {
        match self {
            Self::Confirmed => Action::Confirm,
            Self::Rejected => Action::Error,
        }
    }
}

/// Type alias for validation effects.
pub type ValidationEffect = BoxedEffect<ValidationOutcome, Infallible, ValidationEnv>;

/// Compare an entered value against the environment's secret.
///
/// Returns `impl Effect` boxed for storage; the comparison cannot fail,
/// only confirm or reject.
pub fn validate(value: &str) -> ValidationEffect {
    let value = value.to_owned();
    from_fn(move |env: &ValidationEnv| {
        if value == env.secret() {
            Ok(ValidationOutcome::Confirmed)
        } else {
            Ok(ValidationOutcome::Rejected)
        }
    })
    .boxed()
}
