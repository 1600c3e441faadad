use std::sync::Arc;
use std::time::Duration;

use price_forecast::{
    ModelBackend, ModelError, ModelProvider, PredictionPayload, PredictionService, ProductIdentity,
};

/// Toy backend with a fixed seasonal price table.
///
/// A real deployment would wrap its inference runtime here; the trait only
/// asks for one price per calendar month.
#[derive(Debug)]
struct SeasonalTableBackend;

impl ModelBackend for SeasonalTableBackend {
    fn name(&self) -> &str {
        "seasonal-table"
    }

    fn predict_price(
        &self,
        _identity: &ProductIdentity,
        _year: i32,
        month: u32,
    ) -> Result<Option<f64>, ModelError> {
        // No data for December: the period fails, the batch continues
        if month == 12 {
            return Ok(None);
        }
        Ok(Some(18.0 + month as f64 * 0.75))
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let provider =
        ModelProvider::new(Arc::new(SeasonalTableBackend)).with_deadline(Duration::from_secs(2));
    let service = PredictionService::new(Arc::new(provider));

    let payload = PredictionPayload::new("Copper Wire", "TG-2040", "APAC", "Japan", "electronics")
        .with_horizon(14.into());

    let report = service.predict(&payload)?;

    println!(
        "Provider: {}  successful: {}/{}",
        report.model_used, report.successful_predictions, report.total_predictions
    );
    for prediction in &report.predictions {
        match prediction.predicted_price {
            Some(price) => println!("  {}  {:.2}", prediction.date, price),
            None => println!("  {}  (no prediction)", prediction.date),
        }
    }

    Ok(())
}
