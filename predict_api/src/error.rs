//! HTTP error mapping and failure payloads
//!
//! Every failure leaving this service, rejected bodies, validation
//! problems, and panics caught at the boundary, shares one JSON body shape:
//! `{"success": false, "error": <message>, "timestamp": <RFC 3339>}`.

use std::any::Any;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use tracing::{error, warn};

use price_forecast::error::ValidationError;
use price_forecast::utils::rfc3339_now;

/// Request failures with an HTTP response mapping.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Request body was not parseable JSON (400)
    #[error("Invalid JSON: {0}")]
    MalformedJson(String),

    /// Request parsed but failed validation (400)
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::MalformedJson(_) => StatusCode::BAD_REQUEST,
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
        };

        warn!("request rejected: {}", self);

        (status, axum::Json(failure_body(self.to_string()))).into_response()
    }
}

/// Result type alias for handlers.
pub type ApiResult<T> = Result<T, ApiError>;

/// The shared failure body
pub fn failure_body(error: impl Into<String>) -> serde_json::Value {
    json!({
        "success": false,
        "error": error.into(),
        "timestamp": rfc3339_now(),
    })
}

/// Responder for panics caught at the boundary.
///
/// Keeps the failure body shape so clients see one error schema no matter
/// where a request died.
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(message) = err.downcast_ref::<String>() {
        message.clone()
    } else if let Some(message) = err.downcast_ref::<&str>() {
        (*message).to_string()
    } else {
        "unknown panic".to_string()
    };

    error!("unhandled fault: {}", detail);

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        axum::Json(failure_body(format!("Prediction processing error: {}", detail))),
    )
        .into_response()
}
