//! Prediction service facade

use std::sync::Arc;

use tracing::debug;

use crate::error::ValidationError;
use crate::forecast::run_forecast;
use crate::provider::ForecastProvider;
use crate::report::PredictionReport;
use crate::request::PredictionPayload;
use crate::statistics::summarize;

/// Runs the full pipeline: validate, forecast each period, aggregate,
/// assemble.
///
/// The provider is chosen by the caller once and injected here; the service
/// itself never switches providers. Cloning is cheap and shares the
/// provider.
#[derive(Debug, Clone)]
pub struct PredictionService {
    provider: Arc<dyn ForecastProvider>,
}

impl PredictionService {
    pub fn new(provider: Arc<dyn ForecastProvider>) -> Self {
        PredictionService { provider }
    }

    /// The injected provider, for health and info reporting
    pub fn provider(&self) -> &dyn ForecastProvider {
        self.provider.as_ref()
    }

    /// Run one prediction request end to end.
    ///
    /// Validation failures return early; the provider is never called for an
    /// invalid payload. Once validation passes the result is always a full
    /// report, however many periods failed.
    pub fn predict(&self, payload: &PredictionPayload) -> Result<PredictionReport, ValidationError> {
        let request = payload.validate()?;
        debug!(
            "forecasting {} months for product {}",
            request.horizon_window, request.identity.product_type
        );

        let predictions = run_forecast(self.provider.as_ref(), &request);
        let statistics = summarize(&predictions);

        Ok(PredictionReport::assemble(
            &request,
            self.provider.as_ref(),
            statistics,
            predictions,
        ))
    }
}
