//! Common types used throughout Crossings.
//!
//! A [`PriceSeries`] is the date-ordered daily close history of one symbol.
//! Every derived quantity (moving averages, events, forward returns) is indexed
//! by position in this series, so positions are trading days, not calendar days.

use crate::{CrossingsError, Result};
use polars::prelude::*;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::path::Path;

// Re-export date type from chrono
pub use chrono::NaiveDate as Date;

/// One trading day of a price history.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    /// Trading date.
    pub date: Date,
    /// Closing price.
    pub close: f64,
}

impl PricePoint {
    /// Create a new price point.
    #[must_use]
    pub const fn new(date: Date, close: f64) -> Self {
        Self { date, close }
    }
}

/// Date-ordered daily closes for a single symbol.
///
/// Construction sorts by date and keeps the last point seen for a duplicated
/// date, so downstream code can rely on strictly increasing dates.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PriceSeries {
    points: Vec<PricePoint>,
}

impl PriceSeries {
    /// Build a series from points in any order.
    pub fn new(mut points: Vec<PricePoint>) -> Self {
        points.sort_by_key(|p| p.date);
        // dedup_by keeps the first of a run; reverse so the last write wins
        points.reverse();
        points.dedup_by_key(|p| p.date);
        points.reverse();
        Self { points }
    }

    /// Build a series from parallel date and close slices.
    ///
    /// # Errors
    ///
    /// Returns an error if the slices have different lengths.
    pub fn from_parts(dates: &[Date], closes: &[f64]) -> Result<Self> {
        if dates.len() != closes.len() {
            return Err(CrossingsError::InvalidData(format!(
                "{} dates but {} closes",
                dates.len(),
                closes.len()
            )));
        }
        Ok(Self::new(
            dates
                .iter()
                .zip(closes)
                .map(|(&date, &close)| PricePoint::new(date, close))
                .collect(),
        ))
    }

    /// All points, oldest first.
    pub fn points(&self) -> &[PricePoint] {
        &self.points
    }

    /// Closing prices, oldest first.
    pub fn closes(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.close).collect()
    }

    /// Dates, oldest first.
    pub fn dates(&self) -> Vec<Date> {
        self.points.iter().map(|p| p.date).collect()
    }

    /// Date at a position, if in range.
    pub fn date_at(&self, index: usize) -> Option<Date> {
        self.points.get(index).map(|p| p.date)
    }

    /// Close at a position, if in range.
    pub fn close_at(&self, index: usize) -> Option<f64> {
        self.points.get(index).map(|p| p.close)
    }

    /// Most recent point.
    pub fn last(&self) -> Option<&PricePoint> {
        self.points.last()
    }

    /// Number of trading days in the series.
    pub const fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the series has no points.
    pub const fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Build a DataFrame with `date`, `close` and one column per overlay.
    ///
    /// Overlay values that are not finite (undefined moving-average warm-up)
    /// become nulls.
    ///
    /// # Errors
    ///
    /// Returns an error if an overlay length differs from the series length.
    pub fn to_frame(&self, overlays: &[(String, Vec<f64>)]) -> Result<DataFrame> {
        let mut columns: Vec<Column> = vec![
            Series::new("date".into(), self.dates()).into(),
            Series::new("close".into(), self.closes()).into(),
        ];

        for (name, values) in overlays {
            if values.len() != self.len() {
                return Err(CrossingsError::InvalidData(format!(
                    "overlay {name} has {} values for {} rows",
                    values.len(),
                    self.len()
                )));
            }
            let values: Vec<Option<f64>> = values
                .iter()
                .map(|v| v.is_finite().then_some(*v))
                .collect();
            columns.push(Series::new(name.as_str().into(), values).into());
        }

        Ok(DataFrame::new(columns)?)
    }

    /// Read a series from a DataFrame holding `date` and `close` columns.
    ///
    /// Rows whose date does not parse as `YYYY-MM-DD` or whose close is null
    /// are skipped.
    ///
    /// # Errors
    ///
    /// Returns an error if either column is missing or cannot be cast.
    pub fn from_frame(df: &DataFrame) -> Result<Self> {
        let date_col = df
            .column("date")
            .map_err(|_| CrossingsError::MissingColumn("date".to_string()))?
            .cast(&DataType::String)?;
        let close_col = df
            .column("close")
            .map_err(|_| CrossingsError::MissingColumn("close".to_string()))?
            .cast(&DataType::Float64)?;

        let dates = date_col.as_materialized_series().str()?;
        let closes = close_col.as_materialized_series().f64()?;

        let points = dates
            .into_iter()
            .zip(closes)
            .filter_map(|(date, close)| {
                let date = Date::parse_from_str(date?, "%Y-%m-%d").ok()?;
                Some(PricePoint::new(date, close?))
            })
            .collect();

        Ok(Self::new(points))
    }

    /// Read a `date,close` CSV file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or lacks the columns.
    pub fn read_csv(path: &Path) -> Result<Self> {
        let df = CsvReadOptions::default()
            .with_has_header(true)
            .try_into_reader_with_file_path(Some(path.to_path_buf()))?
            .finish()?;
        Self::from_frame(&df)
    }

    /// Write the series and overlays to a CSV file.
    ///
    /// # Errors
    ///
    /// Returns an error if the frame cannot be built or the file written.
    pub fn write_csv(&self, path: &Path, overlays: &[(String, Vec<f64>)]) -> Result<()> {
        let mut df = self.to_frame(overlays)?;
        let mut file = File::create(path)?;
        CsvWriter::new(&mut file)
            .include_header(true)
            .finish(&mut df)?;
        Ok(())
    }
}

impl From<Vec<PricePoint>> for PriceSeries {
    fn from(points: Vec<PricePoint>) -> Self {
        Self::new(points)
    }
}
