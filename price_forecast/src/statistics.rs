//! Price statistics over forecast outcomes

use serde::{Deserialize, Serialize};

use crate::forecast::PeriodPrediction;
use crate::utils::round2;

/// Direction of prices across the horizon.
///
/// The trend compares the last successful price against the first, strictly.
/// Fewer than two successful prices can show no direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriceTrend {
    Increasing,
    Decreasing,
    Stable,
    Unknown,
}

/// Aggregate price figures for a batch of outcomes.
///
/// All three values are absent (and the trend `unknown`) when no period
/// succeeded. Failed periods never contribute.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceStatistics {
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    /// Mean of the successful prices, rounded to two decimals
    pub avg_price: Option<f64>,
    pub price_trend: PriceTrend,
}

impl PriceStatistics {
    /// Statistics for a batch with no successful periods
    pub fn empty() -> Self {
        PriceStatistics {
            min_price: None,
            max_price: None,
            avg_price: None,
            price_trend: PriceTrend::Unknown,
        }
    }
}

/// Summarize the successful prices in a batch of outcomes
pub fn summarize(outcomes: &[PeriodPrediction]) -> PriceStatistics {
    let prices: Vec<f64> = outcomes
        .iter()
        .filter_map(|outcome| outcome.predicted_price)
        .collect();

    if prices.is_empty() {
        return PriceStatistics::empty();
    }

    let min = prices.iter().copied().fold(f64::INFINITY, f64::min);
    let max = prices.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let avg = round2(prices.iter().sum::<f64>() / prices.len() as f64);

    PriceStatistics {
        min_price: Some(min),
        max_price: Some(max),
        avg_price: Some(avg),
        price_trend: trend_of(&prices),
    }
}

/// Trend of a price series, first to last
pub fn trend_of(prices: &[f64]) -> PriceTrend {
    match (prices.first(), prices.last()) {
        (Some(first), Some(last)) if prices.len() > 1 && last > first => PriceTrend::Increasing,
        (Some(first), Some(last)) if prices.len() > 1 && last < first => PriceTrend::Decreasing,
        (Some(_), Some(_)) => PriceTrend::Stable,
        _ => PriceTrend::Unknown,
    }
}
