use std::sync::Arc;

use price_forecast::{PredictionPayload, PredictionService, SimulationProvider};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Build the service with the deterministic simulation provider
    let service = PredictionService::new(Arc::new(SimulationProvider::default()));

    // Forecast six months for one product identity
    let payload = PredictionPayload::new("Aluminum Sheet", "TG-1001", "EMEA", "Germany", "automotive")
        .with_horizon(6.into());

    let report = service.predict(&payload)?;

    println!(
        "Forecast for {} ({} months, provider: {}):",
        report.input_parameters.product_type, report.horizon_window, report.model_used
    );
    for prediction in &report.predictions {
        match prediction.predicted_price {
            Some(price) => println!("  {}  {:.2} {}", prediction.date, price, prediction.currency),
            None => println!("  {}  failed", prediction.date),
        }
    }

    let stats = &report.price_statistics;
    if let (Some(min), Some(max), Some(avg)) = (stats.min_price, stats.max_price, stats.avg_price) {
        println!("Min {:.2}  Max {:.2}  Avg {:.2}", min, max, avg);
    }
    if let Some(note) = report.note {
        println!("Note: {}", note);
    }

    Ok(())
}
