//! Shared numeric and timestamp helpers

use chrono::Utc;

/// Round a price to two decimal places
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Current UTC time as an RFC 3339 string, used for response timestamps
pub fn rfc3339_now() -> String {
    Utc::now().to_rfc3339()
}
