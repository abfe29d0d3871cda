//! The two line pairs a study can compare.

use crate::moving_average::simple_moving_average;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Which fast line is tested against which slow line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CrossingPair {
    /// Closing price against one moving average.
    PriceVsMa {
        /// Moving-average window in trading days.
        window: usize,
    },
    /// A faster moving average against a slower one.
    ///
    /// `fast` is expected to be the shorter window, but nothing enforces it;
    /// a reversed pair simply detects the opposite kind of crossing.
    MaVsMa {
        /// Window of the line expected to drop below.
        fast: usize,
        /// Window of the line being crossed.
        slow: usize,
    },
}

impl CrossingPair {
    /// The line expected to drop below, aligned to `closes`.
    pub fn fast_line(&self, closes: &[f64]) -> Vec<f64> {
        match *self {
            Self::PriceVsMa { .. } => closes.to_vec(),
            Self::MaVsMa { fast, .. } => simple_moving_average(closes, fast),
        }
    }

    /// The line being crossed, aligned to `closes`.
    pub fn slow_line(&self, closes: &[f64]) -> Vec<f64> {
        match *self {
            Self::PriceVsMa { window } => simple_moving_average(closes, window),
            Self::MaVsMa { slow, .. } => simple_moving_average(closes, slow),
        }
    }

    /// Legend label of the fast line.
    pub fn fast_label(&self) -> String {
        match *self {
            Self::PriceVsMa { .. } => "Close".to_string(),
            Self::MaVsMa { fast, .. } => format!("{fast}-day MA"),
        }
    }

    /// Legend label of the slow line.
    pub fn slow_label(&self) -> String {
        match *self {
            Self::PriceVsMa { window } => format!("{window}-day MA"),
            Self::MaVsMa { slow, .. } => format!("{slow}-day MA"),
        }
    }

    /// Moving-average columns for export, named `{window}_day_MA`.
    pub fn moving_averages(&self, closes: &[f64]) -> Vec<(String, Vec<f64>)> {
        let windows = match *self {
            Self::PriceVsMa { window } => vec![window],
            Self::MaVsMa { fast, slow } => vec![fast, slow],
        };
        windows
            .into_iter()
            .map(|w| (format!("{w}_day_MA"), simple_moving_average(closes, w)))
            .collect()
    }

    /// Stem shared by the three chart files of a study.
    pub fn file_stem(&self, symbol: &str) -> String {
        match *self {
            Self::PriceVsMa { window } => format!("{symbol}_close_{window}dma"),
            Self::MaVsMa { fast, slow } => format!("{symbol}_{fast}_{slow}dma"),
        }
    }

    /// Whether the windows are in the conventional order.
    ///
    /// Always true for price pairs; for MA pairs, the fast window must be
    /// strictly shorter than the slow one.
    pub const fn is_conventional(&self) -> bool {
        match *self {
            Self::PriceVsMa { .. } => true,
            Self::MaVsMa { fast, slow } => fast < slow,
        }
    }
}

impl fmt::Display for CrossingPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PriceVsMa { window } => write!(f, "close/{window}D"),
            Self::MaVsMa { fast, slow } => write!(f, "{fast}D/{slow}D"),
        }
    }
}

/// Error parsing a pair from `"W"` or `"FAST:SLOW"`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid window spec '{0}', expected WINDOW or FAST:SLOW")]
pub struct ParsePairError(pub String);

impl FromStr for CrossingPair {
    type Err = ParsePairError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParsePairError(s.to_string());
        let parts: Vec<&str> = s.split(':').map(str::trim).collect();
        match parts.as_slice() {
            [w] => Ok(Self::PriceVsMa {
                window: w.parse().map_err(|_| err())?,
            }),
            [a, b] => Ok(Self::MaVsMa {
                fast: a.parse().map_err(|_| err())?,
                slow: b.parse().map_err(|_| err())?,
            }),
            _ => Err(err()),
        }
    }
}
