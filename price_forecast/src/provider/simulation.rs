//! Deterministic simulated price source

use crate::calendar::months_from_anchor;
use crate::error::ProviderError;
use crate::provider::{ForecastProvider, ProviderKind};
use crate::request::ProductIdentity;
use crate::utils::round2;

/// Simulated price for the anchor month
pub const BASE_PRICE: f64 = 20.0;

/// Simulated price increase per month after the anchor
pub const MONTHLY_STEP: f64 = 0.5;

/// `model_used` label for simulated reports
pub const SIMULATION_LABEL: &str = "simulation";

/// Linear price ramp anchored at the forecast calendar's first month.
///
/// The simulation ignores the product identity entirely: the same month
/// always yields the same price. It stands in for the real model when no
/// backend is deployed and never fails.
#[derive(Debug, Clone)]
pub struct SimulationProvider {
    base_price: f64,
    monthly_step: f64,
}

impl SimulationProvider {
    pub fn new(base_price: f64, monthly_step: f64) -> Self {
        SimulationProvider {
            base_price,
            monthly_step,
        }
    }
}

impl Default for SimulationProvider {
    fn default() -> Self {
        SimulationProvider::new(BASE_PRICE, MONTHLY_STEP)
    }
}

impl ForecastProvider for SimulationProvider {
    fn label(&self) -> &str {
        SIMULATION_LABEL
    }

    fn kind(&self) -> ProviderKind {
        ProviderKind::Simulation
    }

    fn forecast(
        &self,
        _identity: &ProductIdentity,
        year: i32,
        month: u32,
    ) -> Result<f64, ProviderError> {
        let offset = months_from_anchor(year, month);
        Ok(round2(self.base_price + offset as f64 * self.monthly_step))
    }
}
