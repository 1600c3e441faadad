//! Error types for the price_forecast crate

use std::time::Duration;

use thiserror::Error;

/// Request validation failures.
///
/// The display strings are the exact error messages returned to clients,
/// so they must not be reworded.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// One or more required identity fields are absent or blank
    #[error("Missing required parameters: {}", .0.join(", "))]
    MissingFields(Vec<String>),

    /// `horizon_window` could not be read as an integer
    #[error("horizon_window must be a valid integer")]
    HorizonNotInteger,

    /// `horizon_window` parsed but falls outside the supported range
    #[error("horizon_window must be between 1 and 24 months")]
    HorizonOutOfRange,
}

/// Failure surfaced by an external model backend.
///
/// Backends are opaque collaborators, so this carries only their message.
#[derive(Debug, Error)]
#[error("{0}")]
pub struct ModelError(String);

impl ModelError {
    pub fn new(message: impl Into<String>) -> Self {
        ModelError(message.into())
    }
}

/// Per-period forecast failure raised by a provider
#[derive(Debug, Error)]
pub enum ProviderError {
    /// The model backend reported an error or panicked
    #[error("model backend failure: {0}")]
    Backend(#[from] ModelError),

    /// The model backend completed but produced no price
    #[error("model backend returned no prediction")]
    EmptyPrediction,

    /// The model backend produced a price that is NaN, infinite, or too
    /// large to round to two decimals
    #[error("model backend returned a non-finite price")]
    NonFinitePrice,

    /// The model backend did not answer within the configured deadline
    #[error("model call exceeded the {0:?} deadline")]
    DeadlineExceeded(Duration),
}
