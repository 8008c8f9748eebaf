//! Builder API for constructing stores.
//!
//! The security code is injected here rather than baked in as a constant,
//! so tests and embedders can supply their own.

pub mod error;

pub use error::BuildError;

use std::time::Duration;

use crate::effects::{Store, ValidationEnv};

/// Builder for constructing a [`Store`] with a fluent API.
///
/// # Example
///
/// ```rust
/// use deleteguard::effects::Store;
///
/// let store = Store::builder()
///     .secret("paradigma")
///     .item_name("the repository")
///     .build()
///     .unwrap();
///
/// assert_eq!(store.state().value, "");
/// ```
pub struct StoreBuilder {
    secret: Option<String>,
    delay: Duration,
    item_name: String,
}

impl StoreBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            secret: None,
            delay: ValidationEnv::DEFAULT_DELAY,
            item_name: "item".to_string(),
        }
    }

    /// Set the expected security code (required).
    pub fn secret(mut self, secret: impl Into<String>) -> Self {
        self.secret = Some(secret.into());
        self
    }

    /// Override the validation delay. Defaults to
    /// [`ValidationEnv::DEFAULT_DELAY`].
    pub fn delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Set the display name of the item being deleted. Defaults to `"item"`.
    pub fn item_name(mut self, name: impl Into<String>) -> Self {
        self.item_name = name.into();
        self
    }

    /// Build the store.
    /// Returns an error if the security code is missing or empty.
    pub fn build(self) -> Result<Store, BuildError> {
        let secret = self.secret.ok_or(BuildError::MissingSecret)?;
        if secret.is_empty() {
            return Err(BuildError::EmptySecret);
        }

        let env = ValidationEnv::new(secret).with_delay(self.delay);
        Ok(Store::new(env, self.item_name))
    }
}

impl Default for StoreBuilder {
    fn default() -> Self {
        Self::new()
    }
}
