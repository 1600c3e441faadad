//! HTTP entry point for the price prediction service

use predict_api::{create_app, select_provider, AppState, ServerConfig};
use price_forecast::provider::ForecastProvider;
use price_forecast::service::PredictionService;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = ServerConfig::from_env();
    let provider = select_provider(&config);
    info!(
        "starting {} v{} with the '{}' provider",
        predict_api::routes::health::SERVICE_NAME,
        env!("CARGO_PKG_VERSION"),
        provider.label()
    );

    let state = AppState::new(PredictionService::new(provider));
    let app = create_app(state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;
    info!("listening on {}", config.bind_addr());
    axum::serve(listener, app).await?;

    Ok(())
}
