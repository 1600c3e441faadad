//! Axum application builder, server configuration and provider selection

use std::sync::Arc;
use std::time::Duration;

use axum::routing::get;
use axum::Router;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use price_forecast::provider::{ForecastProvider, ModelBackend, ModelProvider, SimulationProvider};

use crate::error::handle_panic;
use crate::routes::{health, predict};
use crate::state::AppState;

/// Create the Axum application with all routes.
pub fn create_app(state: AppState) -> Router {
    // CORS open to any caller, matching the original service
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
        .max_age(Duration::from_secs(3600));

    Router::new()
        .route("/", get(health::service_info).post(predict::predict))
        // Middleware
        .layer(TraceLayer::new_for_http())
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(cors)
        // State
        .with_state(state)
}

/// Server configuration.
pub struct ServerConfig {
    /// Host to bind to.
    pub host: String,
    /// Port to listen on.
    pub port: u16,
    /// Model asset path for deployments that link a backend.
    pub model_path: Option<String>,
    /// Per-call deadline applied to model backends.
    pub model_deadline: Option<Duration>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".into(),
            port: 3000,
            model_path: None,
            model_deadline: None,
        }
    }
}

impl ServerConfig {
    /// Create config from environment variables.
    pub fn from_env() -> Self {
        let host = std::env::var("PREDICT_HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port = std::env::var("PREDICT_PORT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(3000);

        let model_path = std::env::var("PREDICT_MODEL_PATH").ok();

        let model_deadline = std::env::var("PREDICT_MODEL_DEADLINE_MS")
            .ok()
            .and_then(|s| s.parse().ok())
            .map(Duration::from_millis);

        Self {
            host,
            port,
            model_path,
            model_deadline,
        }
    }

    /// Get bind address.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Choose the forecast provider once at startup.
///
/// This binary links no inference runtime, so a configured model path can
/// only log the fallback. Deployments that do link a backend wrap it with
/// [`model_provider`] and build their own [`AppState`].
pub fn select_provider(config: &ServerConfig) -> Arc<dyn ForecastProvider> {
    match &config.model_path {
        Some(path) => {
            warn!(
                "model path {} is configured but no model backend is linked; using the simulation provider",
                path
            );
        }
        None => {
            info!("no model backend configured; using the simulation provider");
        }
    }

    Arc::new(SimulationProvider::default())
}

/// Wrap a deployment-supplied backend with the configured deadline.
pub fn model_provider(backend: Arc<dyn ModelBackend>, config: &ServerConfig) -> ModelProvider {
    let provider = ModelProvider::new(backend);
    match config.model_deadline {
        Some(deadline) => provider.with_deadline(deadline),
        None => provider,
    }
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use price_forecast::error::{ModelError, ProviderError};
    use price_forecast::provider::ProviderKind;
    use price_forecast::request::ProductIdentity;
    use price_forecast::service::PredictionService;

    use super::*;

    #[derive(Debug)]
    struct StubBackend;

    impl ModelBackend for StubBackend {
        fn name(&self) -> &str {
            "onnx"
        }

        fn predict_price(
            &self,
            _identity: &ProductIdentity,
            _year: i32,
            _month: u32,
        ) -> Result<Option<f64>, ModelError> {
            Ok(Some(25.0))
        }
    }

    #[test]
    fn test_server_config_default() {
        let config = ServerConfig::default();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 3000);
        assert_eq!(config.bind_addr(), "0.0.0.0:3000");
        assert!(config.model_path.is_none());
        assert!(config.model_deadline.is_none());
    }

    #[test]
    fn test_select_provider_falls_back_to_simulation() {
        let provider = select_provider(&ServerConfig::default());
        assert_eq!(provider.label(), "simulation");

        let configured = ServerConfig {
            model_path: Some("/models/mpi.onnx".into()),
            ..ServerConfig::default()
        };
        let provider = select_provider(&configured);
        assert_eq!(provider.label(), "simulation");
    }

    #[test]
    fn test_model_provider_honors_the_deadline_config() {
        let config = ServerConfig {
            model_deadline: Some(Duration::from_millis(250)),
            ..ServerConfig::default()
        };

        let provider = model_provider(Arc::new(StubBackend), &config);

        assert_eq!(provider.label(), "onnx");
        let identity = ProductIdentity {
            product_type: "Aluminum Sheet".to_string(),
            tg_code: "TG-1001".to_string(),
            country_region: "EMEA".to_string(),
            country: "Germany".to_string(),
            industry: "automotive".to_string(),
        };
        assert_eq!(provider.forecast(&identity, 2024, 1).unwrap(), 25.0);
    }

    /// Panics inside the pipeline, past the typed provider error handling
    #[derive(Debug)]
    struct PanickyProvider;

    impl ForecastProvider for PanickyProvider {
        fn label(&self) -> &str {
            "onnx"
        }

        fn kind(&self) -> ProviderKind {
            ProviderKind::Model
        }

        fn forecast(
            &self,
            _identity: &ProductIdentity,
            _year: i32,
            _month: u32,
        ) -> Result<f64, ProviderError> {
            panic!("feature store offline")
        }
    }

    fn simulated_app() -> Router {
        create_app(AppState::new(PredictionService::new(Arc::new(
            SimulationProvider::default(),
        ))))
    }

    #[tokio::test]
    async fn test_router_responses_allow_any_origin() {
        let request = Request::builder()
            .uri("/")
            .header(header::ORIGIN, "http://example.com")
            .body(Body::empty())
            .unwrap();

        let response = simulated_app().oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response
                .headers()
                .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
                .map(|value| value.to_str().unwrap()),
            Some("*")
        );
    }

    #[tokio::test]
    async fn test_router_answers_preflight_requests() {
        let request = Request::builder()
            .method("OPTIONS")
            .uri("/")
            .header(header::ORIGIN, "http://example.com")
            .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
            .body(Body::empty())
            .unwrap();

        let response = simulated_app().oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response
                .headers()
                .get(header::ACCESS_CONTROL_ALLOW_METHODS)
                .map(|value| value.to_str().unwrap()),
            Some("*")
        );
    }

    #[tokio::test]
    async fn test_panicking_pipeline_yields_the_failure_body() {
        let state = AppState::new(PredictionService::new(Arc::new(PanickyProvider)));
        let app = create_app(state);

        let request = Request::builder()
            .method("POST")
            .uri("/")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(
                serde_json::json!({
                    "product_type": "Aluminum Sheet",
                    "tg_code": "TG-1001",
                    "country_region": "EMEA",
                    "country": "Germany",
                    "industry": "automotive"
                })
                .to_string(),
            ))
            .unwrap();

        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let value: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(value["success"], serde_json::json!(false));
        assert_eq!(
            value["error"],
            serde_json::json!("Prediction processing error: feature store offline")
        );
        assert!(value["timestamp"].is_string());
    }
}
