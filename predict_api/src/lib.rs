//! # Predict API
//!
//! Axum HTTP boundary for the `price_forecast` service.
//!
//! # Endpoints
//!
//! - `GET /` - Health check and API information
//! - `POST /` - Run one prediction request
//!
//! The forecast provider is chosen once at startup and injected into the
//! shared state; handlers never select providers themselves. Validation
//! failures come back as 400 with the `{"success": false, "error",
//! "timestamp"}` body, unparseable JSON as 400, and any panic inside the
//! pipeline as 500 with the same body shape.
//!
//! # Modules
//!
//! - [`app`]: Router setup, server configuration, provider selection
//! - [`state`]: Shared handler state
//! - [`error`]: HTTP error mapping and failure payloads
//! - [`routes`]: Request handlers

pub mod app;
pub mod error;
pub mod routes;
pub mod state;

// Re-exports for convenience
pub use app::{create_app, model_provider, select_provider, ServerConfig};
pub use error::{ApiError, ApiResult};
pub use state::AppState;
