//! Data types for FMP API responses.

use chrono::NaiveDate;
use crossings_traits::{PricePoint, PriceSeries};
use serde::{Deserialize, Serialize};

/// One end-of-day row from FMP.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoricalPrice {
    /// Ticker symbol.
    #[serde(default)]
    pub symbol: String,
    /// Date.
    pub date: String,
    /// Open price.
    #[serde(default)]
    pub open: f64,
    /// High price.
    #[serde(default)]
    pub high: f64,
    /// Low price.
    #[serde(default)]
    pub low: f64,
    /// Close price.
    pub close: f64,
    /// Volume.
    #[serde(default)]
    pub volume: f64,
    /// Absolute change from previous close.
    #[serde(default)]
    pub change: f64,
    /// Percent change from previous close.
    #[serde(default)]
    pub change_percent: f64,
}

impl HistoricalPrice {
    /// Parse the date string into a NaiveDate.
    #[must_use]
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.date, "%Y-%m-%d").ok()
    }

    /// Convert to a price point, if the date parses.
    #[must_use]
    pub fn to_point(&self) -> Option<PricePoint> {
        self.parsed_date().map(|d| PricePoint::new(d, self.close))
    }
}

/// Build an oldest-first close series from rows in any order.
///
/// Rows with an unparsable date are dropped.
pub fn to_series(rows: &[HistoricalPrice]) -> PriceSeries {
    PriceSeries::new(rows.iter().filter_map(HistoricalPrice::to_point).collect())
}
