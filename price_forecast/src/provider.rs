//! Pluggable per-period price sources
//!
//! A provider answers one question: the predicted price for one product
//! identity in one calendar month. Two implementations exist, a
//! deterministic simulation and a wrapper around an external model backend.
//! Callers choose one at startup and inject it; nothing in this crate
//! selects a provider behind the caller's back.

pub mod model;
pub mod simulation;

pub use model::{ModelBackend, ModelProvider};
pub use simulation::SimulationProvider;

use std::fmt::Debug;

use crate::error::ProviderError;
use crate::request::ProductIdentity;

/// Which family of provider produced a report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderKind {
    /// Prices come from an external trained model
    Model,
    /// Prices come from the built-in deterministic formula
    Simulation,
}

/// A per-period price source.
///
/// `forecast` is called once per period by the orchestrator. Failures are
/// reported through the typed error; implementations must not panic for
/// ordinary backend trouble.
pub trait ForecastProvider: Debug + Send + Sync {
    /// Name recorded as `model_used` in assembled reports
    fn label(&self) -> &str;

    /// Provider family, used for report notes and health reporting
    fn kind(&self) -> ProviderKind;

    /// Predicted price for one identity in one calendar month
    fn forecast(
        &self,
        identity: &ProductIdentity,
        year: i32,
        month: u32,
    ) -> Result<f64, ProviderError>;
}
