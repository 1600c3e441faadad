//! Prediction request payloads and validation

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ValidationError;

/// Horizon used when the payload does not supply one
pub const DEFAULT_HORIZON: u32 = 1;

/// Smallest accepted horizon, in months
pub const MIN_HORIZON: u32 = 1;

/// Largest accepted horizon, in months
pub const MAX_HORIZON: u32 = 24;

/// Raw request body as received from a client.
///
/// Every field is optional here so that incomplete payloads reach the
/// validator and produce aggregated error messages instead of failing at
/// deserialization. `horizon_window` stays a raw JSON value for the same
/// reason: clients send integers, quoted integers, or garbage, and the
/// validator decides which is which.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PredictionPayload {
    pub product_type: Option<String>,
    pub tg_code: Option<String>,
    pub country_region: Option<String>,
    pub country: Option<String>,
    pub industry: Option<String>,
    pub horizon_window: Option<Value>,
}

/// Product and market identity a forecast is requested for.
///
/// Fields are trimmed and non-empty once validation has run. The serialized
/// form is echoed back in reports as `input_parameters`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductIdentity {
    pub product_type: String,
    pub tg_code: String,
    pub country_region: String,
    pub country: String,
    pub industry: String,
}

/// A validated, normalized prediction request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PredictionRequest {
    pub identity: ProductIdentity,
    /// Number of months to forecast, 1 through 24
    pub horizon_window: u32,
}

impl PredictionPayload {
    /// Payload with the five identity fields set and no horizon
    pub fn new(
        product_type: &str,
        tg_code: &str,
        country_region: &str,
        country: &str,
        industry: &str,
    ) -> Self {
        PredictionPayload {
            product_type: Some(product_type.to_string()),
            tg_code: Some(tg_code.to_string()),
            country_region: Some(country_region.to_string()),
            country: Some(country.to_string()),
            industry: Some(industry.to_string()),
            horizon_window: None,
        }
    }

    /// Attach a raw `horizon_window` value
    pub fn with_horizon(mut self, horizon: Value) -> Self {
        self.horizon_window = Some(horizon);
        self
    }

    /// Validate and normalize the payload.
    ///
    /// Identity fields are checked first: every absent or blank field is
    /// collected so one response names all of them. Only when the identity is
    /// complete is `horizon_window` examined.
    pub fn validate(&self) -> Result<PredictionRequest, ValidationError> {
        let mut missing = Vec::new();
        let product_type = required_field("product_type", &self.product_type, &mut missing);
        let tg_code = required_field("tg_code", &self.tg_code, &mut missing);
        let country_region = required_field("country_region", &self.country_region, &mut missing);
        let country = required_field("country", &self.country, &mut missing);
        let industry = required_field("industry", &self.industry, &mut missing);

        if !missing.is_empty() {
            return Err(ValidationError::MissingFields(missing));
        }

        let horizon_window = parse_horizon(self.horizon_window.as_ref())?;

        Ok(PredictionRequest {
            identity: ProductIdentity {
                product_type,
                tg_code,
                country_region,
                country,
                industry,
            },
            horizon_window,
        })
    }
}

/// Trimmed field value, or an entry in `missing` when absent or blank
fn required_field(name: &str, value: &Option<String>, missing: &mut Vec<String>) -> String {
    match value.as_deref().map(str::trim) {
        Some(trimmed) if !trimmed.is_empty() => trimmed.to_string(),
        _ => {
            missing.push(name.to_string());
            String::new()
        }
    }
}

/// Resolve the raw `horizon_window` value.
///
/// Absent (or JSON null) falls back to the default. Integers and quoted
/// integers are accepted; anything else is a type error. Range is checked
/// after the parse so `0` and `25` report the range message, not the type
/// message.
fn parse_horizon(value: Option<&Value>) -> Result<u32, ValidationError> {
    let months = match value {
        None | Some(Value::Null) => return Ok(DEFAULT_HORIZON),
        Some(Value::Number(number)) => number
            .as_i64()
            .ok_or(ValidationError::HorizonNotInteger)?,
        Some(Value::String(text)) => text
            .trim()
            .parse::<i64>()
            .map_err(|_| ValidationError::HorizonNotInteger)?,
        Some(_) => return Err(ValidationError::HorizonNotInteger),
    };

    if !(MIN_HORIZON as i64..=MAX_HORIZON as i64).contains(&months) {
        return Err(ValidationError::HorizonOutOfRange);
    }
    Ok(months as u32)
}
