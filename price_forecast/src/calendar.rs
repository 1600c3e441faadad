//! Forecast calendar sequencing
//!
//! Periods are numbered from 1 and mapped onto calendar months starting at a
//! fixed anchor month. The mapping is pure integer arithmetic; it never
//! consults the clock, so a given period index always lands on the same
//! calendar month.

/// First calendar year covered by period 1
pub const ANCHOR_YEAR: i32 = 2024;

/// First calendar month covered by period 1 (January)
pub const ANCHOR_MONTH: u32 = 1;

/// One forecast period resolved to a calendar month
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ForecastPeriod {
    /// 1-based position within the horizon
    pub index: u32,
    pub year: i32,
    /// Calendar month, 1 through 12
    pub month: u32,
}

impl ForecastPeriod {
    /// Resolve a 1-based period index to its calendar month.
    ///
    /// Period 1 is the anchor month; each later period advances one month,
    /// rolling the year over every 12 periods.
    pub fn from_index(index: u32) -> Self {
        let offset = index.saturating_sub(1);
        ForecastPeriod {
            index,
            year: ANCHOR_YEAR + (offset / 12) as i32,
            month: offset % 12 + 1,
        }
    }

    /// `YYYY-MM` label with a zero-padded month
    pub fn date_label(&self) -> String {
        format!("{:04}-{:02}", self.year, self.month)
    }
}

/// Periods 1 through `horizon`, in ascending order
pub fn month_sequence(horizon: u32) -> Vec<ForecastPeriod> {
    (1..=horizon).map(ForecastPeriod::from_index).collect()
}

/// Whole months between the anchor month and the given calendar month.
///
/// Zero for the anchor itself, negative for months before it.
pub fn months_from_anchor(year: i32, month: u32) -> i64 {
    (year - ANCHOR_YEAR) as i64 * 12 + (month as i64 - ANCHOR_MONTH as i64)
}
