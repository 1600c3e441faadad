//! # Price Forecast
//!
//! A Rust library for monthly product price forecasting behind a stable
//! request/report contract.
//!
//! ## Features
//!
//! - Request validation with aggregated missing-field reporting
//! - Calendar sequencing from a fixed anchor month (no clock involved)
//! - Pluggable price providers: a deterministic simulation and a wrapper
//!   for external model backends
//! - Per-period failure isolation: one bad month never aborts a batch
//! - Price statistics (min/max/avg and trend) over successful periods
//!
//! ## Providers
//!
//! Providers implement the `ForecastProvider` trait and are injected into
//! the service at construction time:
//!
//! - `SimulationProvider`: a linear price ramp, never fails
//! - `ModelProvider`: delegates to a deployment-supplied `ModelBackend`,
//!   converting backend errors, panics, empty answers and missed deadlines
//!   into per-period failures
//!
//! ## Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use price_forecast::{PredictionPayload, PredictionService, SimulationProvider};
//!
//! let service = PredictionService::new(Arc::new(SimulationProvider::default()));
//!
//! let payload = PredictionPayload::new("AL99", "TG-1001", "EMEA", "Germany", "automotive")
//!     .with_horizon(3.into());
//!
//! let report = service.predict(&payload).unwrap();
//! assert_eq!(report.predictions.len(), 3);
//! assert_eq!(report.model_used, "simulation");
//! assert_eq!(report.predictions[0].predicted_price, Some(20.0));
//! ```

pub mod calendar;
pub mod error;
pub mod forecast;
pub mod provider;
pub mod report;
pub mod request;
pub mod service;
pub mod statistics;
pub mod utils;

// Re-export commonly used types
pub use crate::error::{ModelError, ProviderError, ValidationError};
pub use crate::forecast::{run_forecast, PeriodPrediction};
pub use crate::provider::{
    ForecastProvider, ModelBackend, ModelProvider, ProviderKind, SimulationProvider,
};
pub use crate::report::PredictionReport;
pub use crate::request::{PredictionPayload, PredictionRequest, ProductIdentity};
pub use crate::service::PredictionService;
pub use crate::statistics::{summarize, PriceStatistics, PriceTrend};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
