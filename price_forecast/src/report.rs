//! Assembled prediction reports

use serde::Serialize;

use crate::forecast::PeriodPrediction;
use crate::provider::{ForecastProvider, ProviderKind};
use crate::request::{PredictionRequest, ProductIdentity};
use crate::statistics::PriceStatistics;
use crate::utils::rfc3339_now;

/// Advisory attached to reports produced by the simulation provider
pub const SIMULATION_NOTE: &str =
    "Using simulated data. Deploy with model files for real predictions.";

/// Full response for one prediction request.
///
/// `success` is true whenever validation passed and the batch ran, even if
/// every single period failed; per-period trouble is visible in the counts
/// and outcomes instead.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PredictionReport {
    pub success: bool,
    /// Label of the provider that produced the prices
    pub model_used: String,
    pub horizon_window: u32,
    pub total_predictions: usize,
    pub successful_predictions: usize,
    pub failed_predictions: usize,
    /// Normalized identity echoed back to the caller
    pub input_parameters: ProductIdentity,
    pub price_statistics: PriceStatistics,
    /// One outcome per period, ascending
    pub predictions: Vec<PeriodPrediction>,
    /// RFC 3339 assembly time
    pub timestamp: String,
    /// Present only for simulated reports
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<&'static str>,
}

impl PredictionReport {
    /// Assemble the response for a completed batch
    pub fn assemble(
        request: &PredictionRequest,
        provider: &dyn ForecastProvider,
        statistics: PriceStatistics,
        predictions: Vec<PeriodPrediction>,
    ) -> Self {
        let successful = predictions.iter().filter(|p| p.is_success()).count();

        PredictionReport {
            success: true,
            model_used: provider.label().to_string(),
            horizon_window: request.horizon_window,
            total_predictions: predictions.len(),
            successful_predictions: successful,
            failed_predictions: predictions.len() - successful,
            input_parameters: request.identity.clone(),
            price_statistics: statistics,
            predictions,
            timestamp: rfc3339_now(),
            note: (provider.kind() == ProviderKind::Simulation).then_some(SIMULATION_NOTE),
        }
    }
}
