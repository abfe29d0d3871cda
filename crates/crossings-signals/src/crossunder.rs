//! Historical crossunder detection.
//!
//! A crossunder is recorded on the first bar where the fast line is strictly
//! below the slow line after a bar where it was strictly above. To filter out
//! one-bar noise, the fast line must then stay strictly below for the whole
//! persistence window, counting the crossing bar itself. Any equality or
//! reversal inside the window discards the event, and a crossing too close to
//! the end of the data to fill the window is never reported.

use crossings_traits::{Date, PriceSeries};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Number of bars a crossing must hold to count as a historical event.
pub const DEFAULT_PERSISTENCE: usize = 15;

/// A confirmed crossunder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrossunderEvent {
    /// Position of the crossing bar in the price series.
    pub index: usize,
    /// Date of the crossing bar.
    pub date: Date,
}

/// Finds persistent crossunders of a fast line through a slow line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CrossunderDetector {
    persistence: usize,
}

impl CrossunderDetector {
    /// Create a detector requiring `persistence` bars below, starting at the crossing bar.
    #[must_use]
    pub const fn new(persistence: usize) -> Self {
        Self { persistence }
    }

    /// Get the persistence window length.
    #[must_use]
    pub const fn persistence(&self) -> usize {
        self.persistence
    }

    /// Positions of confirmed crossunders, ascending.
    ///
    /// Only the common prefix of `fast` and `slow` is inspected. NaN on either
    /// side fails every comparison, so undefined warm-up values never produce
    /// or confirm an event.
    pub fn detect_indices(&self, fast: &[f64], slow: &[f64]) -> Vec<usize> {
        let n = fast.len().min(slow.len());
        // The crossing bar needs a predecessor, and the window must fit.
        let span = self.persistence.max(1);
        if n <= span {
            return Vec::new();
        }

        (0..n - span)
            .filter(|&i| fast[i] > slow[i])
            .filter(|&i| (i + 1..i + 1 + span).all(|j| fast[j] < slow[j]))
            .map(|i| i + 1)
            .collect()
    }

    /// Confirmed crossunders with their dates in `series`.
    pub fn detect(&self, series: &PriceSeries, fast: &[f64], slow: &[f64]) -> Vec<CrossunderEvent> {
        self.detect_indices(fast, slow)
            .into_iter()
            .filter_map(|index| {
                let date = series.date_at(index)?;
                debug!(%date, index, "crossunder confirmed");
                Some(CrossunderEvent { index, date })
            })
            .collect()
    }
}

impl Default for CrossunderDetector {
    fn default() -> Self {
        Self::new(DEFAULT_PERSISTENCE)
    }
}
