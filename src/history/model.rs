use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

/// One bar of historical prices. Rows with any missing field are never emitted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceRow {
    pub date: DateTime<Utc>,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub adjclose: f64,
    pub volume: u64,
    pub ticker: String,
}

impl PriceRow {
    /// Calendar day of the bar (UTC).
    pub fn day(&self) -> NaiveDate {
        self.date.date_naive()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dividend {
    pub date: NaiveDate,
    pub amount: f64,
    pub ticker: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Split {
    pub date: NaiveDate,
    pub numerator: u64,
    pub denominator: u64,
    /// Ratio as published, e.g. `4:1`.
    pub ratio: String,
    pub ticker: String,
}
