//! # crossings-chart
//!
//! The three PNG charts produced for every study:
//!
//! - the price history with the fast and slow lines and a dashed marker at
//!   each historical crossunder,
//! - the mean forward return per horizon, annotated to two decimals,
//! - stacked positive/negative outcome counts per horizon, annotated with the
//!   share of positive outcomes.
//!
//! Rendering is pure rasterization into an [`image::RgbImage`], with titles,
//! legends and labels drawn in a built-in bitmap font.

mod bars;
mod canvas;
mod counts;
mod error;
mod glyphs;
mod timeseries;

pub use error::ChartError;

use crossings_eval::ReturnSummary;
use crossings_signals::{CrossingPair, CrossunderEvent};
use crossings_traits::PriceSeries;
use image::RgbImage;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Result type for chart operations.
pub type Result<T> = std::result::Result<T, ChartError>;

/// Everything a study has computed that the charts draw from.
#[derive(Debug, Clone, Copy)]
pub struct ChartRequest<'a> {
    /// Symbol the study ran on.
    pub symbol: &'a str,
    /// Lines being compared.
    pub pair: CrossingPair,
    /// Price history.
    pub series: &'a PriceSeries,
    /// Fast line, aligned to `series`.
    pub fast: &'a [f64],
    /// Slow line, aligned to `series`.
    pub slow: &'a [f64],
    /// Historical crossunders.
    pub events: &'a [CrossunderEvent],
    /// Forward-return statistics.
    pub summary: &'a ReturnSummary,
}

/// Output paths of the three charts of one study.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct ChartSet {
    /// Time-series chart.
    pub timeseries: PathBuf,
    /// Average-returns chart.
    pub average_returns: PathBuf,
    /// Positive/negative counts chart.
    pub sign_counts: PathBuf,
}

impl ChartSet {
    /// Standard file names for `symbol` and `pair` under `dir`.
    pub fn for_study(dir: &Path, symbol: &str, pair: &CrossingPair) -> Self {
        let stem = pair.file_stem(symbol);
        Self {
            timeseries: dir.join(format!("{stem}_plot.png")),
            average_returns: dir.join(format!("{stem}_average_returns.png")),
            sign_counts: dir.join(format!("{stem}_number_pos_neg_returns.png")),
        }
    }

    /// The three paths in sending order.
    pub fn paths(&self) -> [&Path; 3] {
        [&self.timeseries, &self.average_returns, &self.sign_counts]
    }
}

/// Turns a study into chart files.
pub trait Renderer {
    /// Render all three charts of `request` to the paths in `charts`.
    ///
    /// # Errors
    ///
    /// Returns an error if a chart cannot be written.
    fn render(&self, request: &ChartRequest<'_>, charts: &ChartSet) -> Result<()>;
}

/// Writes the charts as PNG files.
#[derive(Debug, Clone, Copy, Default)]
pub struct PngRenderer;

impl PngRenderer {
    fn save(img: &RgbImage, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        img.save(path).map_err(|source| ChartError::Save {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "chart saved");
        Ok(())
    }
}

impl Renderer for PngRenderer {
    fn render(&self, request: &ChartRequest<'_>, charts: &ChartSet) -> Result<()> {
        Self::save(&timeseries::render(request), &charts.timeseries)?;
        Self::save(&bars::render(request), &charts.average_returns)?;
        Self::save(&counts::render(request), &charts.sign_counts)
    }
}
