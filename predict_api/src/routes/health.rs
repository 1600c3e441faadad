//! Health check and API information endpoint
//!
//! `GET /` answers with service status, whether a model-backed provider is
//! active, and the request field contract, so a client can discover the API
//! without documentation.

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use price_forecast::provider::{ForecastProvider, ProviderKind};
use price_forecast::utils::rfc3339_now;

use crate::state::AppState;

/// Service name reported by the info endpoint
pub const SERVICE_NAME: &str = "MPI Price Predictor API";

/// Info endpoint response.
#[derive(Debug, Serialize)]
pub struct ServiceInfo {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
    /// True when a model-backed provider is active
    pub model_loaded: bool,
    pub timestamp: String,
    pub endpoints: EndpointsInfo,
    pub usage: UsageInfo,
}

/// Endpoint descriptions keyed by method and path.
#[derive(Debug, Serialize)]
pub struct EndpointsInfo {
    #[serde(rename = "GET /")]
    pub info: &'static str,
    #[serde(rename = "POST /")]
    pub predict: &'static str,
    #[serde(rename = "OPTIONS /")]
    pub preflight: &'static str,
}

/// Request contract summary.
#[derive(Debug, Serialize)]
pub struct UsageInfo {
    pub method: &'static str,
    pub content_type: &'static str,
    pub required_fields: [&'static str; 5],
    pub optional_fields: OptionalFieldsInfo,
}

#[derive(Debug, Serialize)]
pub struct OptionalFieldsInfo {
    pub horizon_window: &'static str,
}

/// `GET /`
pub async fn service_info(State(state): State<AppState>) -> Json<ServiceInfo> {
    let provider = state.service.provider();

    Json(ServiceInfo {
        status: "healthy",
        service: SERVICE_NAME,
        version: env!("CARGO_PKG_VERSION"),
        model_loaded: provider.kind() == ProviderKind::Model,
        timestamp: rfc3339_now(),
        endpoints: EndpointsInfo {
            info: "Health check and API information",
            predict: "Make price predictions",
            preflight: "CORS preflight",
        },
        usage: UsageInfo {
            method: "POST",
            content_type: "application/json",
            required_fields: [
                "product_type",
                "tg_code",
                "country_region",
                "country",
                "industry",
            ],
            optional_fields: OptionalFieldsInfo {
                horizon_window: "Number of months to predict (default: 1)",
            },
        },
    })
}
