//! Shared state for all handlers

use price_forecast::service::PredictionService;

/// State handed to every handler.
///
/// Cloning shares the underlying provider; nothing here is mutable after
/// startup.
#[derive(Debug, Clone)]
pub struct AppState {
    pub service: PredictionService,
}

impl AppState {
    pub fn new(service: PredictionService) -> Self {
        AppState { service }
    }
}
