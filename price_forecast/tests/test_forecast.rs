use std::sync::Arc;

use assert_approx_eq::assert_approx_eq;
use price_forecast::error::ModelError;
use price_forecast::forecast::{run_forecast, PERIOD_FAILURE_MESSAGE};
use price_forecast::provider::{ModelBackend, ModelProvider, SimulationProvider};
use price_forecast::request::{PredictionRequest, ProductIdentity};
use rstest::rstest;

fn test_request(horizon: u32) -> PredictionRequest {
    PredictionRequest {
        identity: ProductIdentity {
            product_type: "Aluminum Sheet".to_string(),
            tg_code: "TG-1001".to_string(),
            country_region: "EMEA".to_string(),
            country: "Germany".to_string(),
            industry: "automotive".to_string(),
        },
        horizon_window: horizon,
    }
}

/// Fails exactly one calendar month, succeeds everywhere else
#[derive(Debug)]
struct FlakyBackend {
    failing_month: u32,
}

impl ModelBackend for FlakyBackend {
    fn name(&self) -> &str {
        "onnx"
    }

    fn predict_price(
        &self,
        _identity: &ProductIdentity,
        _year: i32,
        month: u32,
    ) -> Result<Option<f64>, ModelError> {
        if month == self.failing_month {
            Err(ModelError::new("no features for this month"))
        } else {
            Ok(Some(30.0 + month as f64))
        }
    }
}

#[derive(Debug)]
struct FailingBackend;

impl ModelBackend for FailingBackend {
    fn name(&self) -> &str {
        "onnx"
    }

    fn predict_price(
        &self,
        _identity: &ProductIdentity,
        _year: i32,
        _month: u32,
    ) -> Result<Option<f64>, ModelError> {
        Err(ModelError::new("weights not loaded"))
    }
}

#[derive(Debug)]
struct UnroundedBackend;

impl ModelBackend for UnroundedBackend {
    fn name(&self) -> &str {
        "onnx"
    }

    fn predict_price(
        &self,
        _identity: &ProductIdentity,
        _year: i32,
        _month: u32,
    ) -> Result<Option<f64>, ModelError> {
        Ok(Some(12.3456))
    }
}

#[rstest]
#[case(1)]
#[case(12)]
#[case(24)]
fn test_output_length_matches_horizon(#[case] horizon: u32) {
    let provider = SimulationProvider::default();

    let outcomes = run_forecast(&provider, &test_request(horizon));

    assert_eq!(outcomes.len(), horizon as usize);
    for (position, outcome) in outcomes.iter().enumerate() {
        assert_eq!(outcome.period, position as u32 + 1);
    }
}

#[test]
fn test_simulated_three_month_forecast() {
    let provider = SimulationProvider::default();

    let outcomes = run_forecast(&provider, &test_request(3));

    let prices: Vec<f64> = outcomes.iter().filter_map(|o| o.predicted_price).collect();
    assert_eq!(prices, vec![20.0, 20.5, 21.0]);

    let dates: Vec<&str> = outcomes.iter().map(|o| o.date.as_str()).collect();
    assert_eq!(dates, vec!["2024-01", "2024-02", "2024-03"]);

    for outcome in &outcomes {
        assert_eq!(outcome.currency, "USD");
        assert_eq!(outcome.error, None);
        assert!(outcome.is_success());
    }
}

#[test]
fn test_forecast_rolls_into_the_next_year() {
    let provider = SimulationProvider::default();

    let outcomes = run_forecast(&provider, &test_request(13));

    let last = outcomes.last().unwrap();
    assert_eq!(last.period, 13);
    assert_eq!(last.year, 2025);
    assert_eq!(last.month, 1);
    assert_eq!(last.date, "2025-01");
    assert_approx_eq!(last.predicted_price.unwrap(), 26.0);
}

#[test]
fn test_one_failed_period_does_not_abort_the_batch() {
    let provider = ModelProvider::new(Arc::new(FlakyBackend { failing_month: 2 }));

    let outcomes = run_forecast(&provider, &test_request(3));

    assert_eq!(outcomes.len(), 3);
    assert!(outcomes[0].is_success());
    assert!(!outcomes[1].is_success());
    assert!(outcomes[2].is_success());

    let failed = &outcomes[1];
    assert_eq!(failed.predicted_price, None);
    assert_eq!(failed.error, Some(PERIOD_FAILURE_MESSAGE));
    assert_eq!(failed.date, "2024-02");
}

#[test]
fn test_every_period_failing_keeps_the_length() {
    let provider = ModelProvider::new(Arc::new(FailingBackend));

    let outcomes = run_forecast(&provider, &test_request(4));

    assert_eq!(outcomes.len(), 4);
    for outcome in &outcomes {
        assert_eq!(outcome.predicted_price, None);
        assert_eq!(outcome.error, Some(PERIOD_FAILURE_MESSAGE));
    }
}

#[test]
fn test_model_prices_are_rounded_to_two_decimals() {
    let provider = ModelProvider::new(Arc::new(UnroundedBackend));

    let outcomes = run_forecast(&provider, &test_request(1));

    assert_eq!(outcomes[0].predicted_price, Some(12.35));
}

#[test]
fn test_success_entries_serialize_without_an_error_key() {
    let provider = SimulationProvider::default();
    let outcomes = run_forecast(&provider, &test_request(1));

    let value = serde_json::to_value(&outcomes[0]).unwrap();

    assert!(value.get("error").is_none());
    assert_eq!(value["predicted_price"], serde_json::json!(20.0));
    assert_eq!(value["currency"], serde_json::json!("USD"));
}

#[test]
fn test_failed_entries_serialize_with_a_null_price() {
    let provider = ModelProvider::new(Arc::new(FailingBackend));
    let outcomes = run_forecast(&provider, &test_request(1));

    let value = serde_json::to_value(&outcomes[0]).unwrap();

    assert!(value["predicted_price"].is_null());
    assert_eq!(
        value["error"],
        serde_json::json!("Prediction failed for this period")
    );
}
