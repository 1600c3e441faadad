//! Prediction endpoint

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use tracing::info;

use price_forecast::report::PredictionReport;
use price_forecast::request::PredictionPayload;

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// `POST /`: validate the payload and run the forecast batch.
///
/// The extractor result is taken directly so an unparseable body maps to
/// the 400 failure payload instead of axum's default rejection.
pub async fn predict(
    State(state): State<AppState>,
    payload: Result<Json<PredictionPayload>, JsonRejection>,
) -> ApiResult<Json<PredictionReport>> {
    let Json(payload) =
        payload.map_err(|rejection| ApiError::MalformedJson(rejection.body_text()))?;

    info!("prediction request received");

    let report = state.service.predict(&payload)?;
    Ok(Json(report))
}
