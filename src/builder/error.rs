//! Build errors for the store builder.

use thiserror::Error;

/// Errors that can occur when building a store.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Security code not specified. Call .secret(code) before .build()")]
    MissingSecret,

    #[error("Security code must not be empty")]
    EmptySecret,
}
