//! Per-period forecast orchestration
//!
//! Runs the provider once for every period in the horizon, in ascending
//! order. A failed period is recorded and logged, and the loop moves on;
//! the output always holds exactly one outcome per requested period.

use serde::Serialize;
use tracing::warn;

use crate::calendar::{month_sequence, ForecastPeriod};
use crate::provider::ForecastProvider;
use crate::request::PredictionRequest;
use crate::utils::round2;

/// Error text attached to a failed period
pub const PERIOD_FAILURE_MESSAGE: &str = "Prediction failed for this period";

/// Currency every price is quoted in
pub const CURRENCY: &str = "USD";

/// Outcome of forecasting one period.
///
/// Exactly one of `predicted_price` and `error` is populated; the
/// constructors are the only way to build one.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PeriodPrediction {
    /// 1-based period index within the horizon
    pub period: u32,
    pub year: i32,
    pub month: u32,
    /// `YYYY-MM` label for the period's calendar month
    pub date: String,
    /// Price rounded to two decimals; `null` on the wire when failed
    pub predicted_price: Option<f64>,
    pub currency: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<&'static str>,
}

impl PeriodPrediction {
    /// Successful outcome carrying a rounded price
    pub fn success(period: &ForecastPeriod, price: f64) -> Self {
        PeriodPrediction {
            period: period.index,
            year: period.year,
            month: period.month,
            date: period.date_label(),
            predicted_price: Some(round2(price)),
            currency: CURRENCY,
            error: None,
        }
    }

    /// Failed outcome carrying the fixed per-period error text
    pub fn failure(period: &ForecastPeriod) -> Self {
        PeriodPrediction {
            period: period.index,
            year: period.year,
            month: period.month,
            date: period.date_label(),
            predicted_price: None,
            currency: CURRENCY,
            error: Some(PERIOD_FAILURE_MESSAGE),
        }
    }

    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }
}

/// Forecast every period of the request's horizon.
///
/// One provider failure never aborts the batch: the period is marked failed
/// and the remaining periods still run. The result length always equals the
/// horizon.
pub fn run_forecast(
    provider: &dyn ForecastProvider,
    request: &PredictionRequest,
) -> Vec<PeriodPrediction> {
    month_sequence(request.horizon_window)
        .iter()
        .map(|period| {
            match provider.forecast(&request.identity, period.year, period.month) {
                Ok(price) => PeriodPrediction::success(period, price),
                Err(err) => {
                    warn!(
                        "period {} ({}) forecast failed: {}",
                        period.index,
                        period.date_label(),
                        err
                    );
                    PeriodPrediction::failure(period)
                }
            }
        })
        .collect()
}
