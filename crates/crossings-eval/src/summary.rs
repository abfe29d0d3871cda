//! Aggregate statistics over qualifying events.

use crate::forward::{EventReturns, HORIZONS};
use crossings_signals::CrossunderEvent;
use crossings_traits::stats::{count_signs, mean, percentage};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

/// Mean forward return per horizon.
///
/// A horizon with no qualifying events holds NaN.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AverageReturns(BTreeMap<usize, f64>);

impl AverageReturns {
    /// Mean at `horizon`, if the horizon was evaluated.
    pub fn get(&self, horizon: usize) -> Option<f64> {
        self.0.get(&horizon).copied()
    }

    /// `(horizon, mean)` pairs in ascending horizon order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.0.iter().map(|(&h, &m)| (h, m))
    }

    /// Means in ascending horizon order.
    pub fn values(&self) -> Vec<f64> {
        self.0.values().copied().collect()
    }
}

/// Number of positive and negative returns at one horizon.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignCounts {
    /// Returns strictly above zero.
    pub positive: usize,
    /// Returns strictly below zero.
    pub negative: usize,
}

impl SignCounts {
    /// Positive plus negative. Flat returns are in neither.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.positive + self.negative
    }

    /// Share of positive returns in percent, if any were counted.
    #[must_use]
    pub fn positive_pct(&self) -> Option<f64> {
        percentage(self.positive, self.total())
    }
}

/// Sign counts per horizon.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PositiveNegativeCounts(BTreeMap<usize, SignCounts>);

impl PositiveNegativeCounts {
    /// Counts at `horizon`, if the horizon was evaluated.
    pub fn get(&self, horizon: usize) -> Option<SignCounts> {
        self.0.get(&horizon).copied()
    }

    /// `(horizon, counts)` pairs in ascending horizon order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, SignCounts)> + '_ {
        self.0.iter().map(|(&h, &c)| (h, c))
    }
}

/// Forward-return statistics of one study.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReturnSummary {
    /// Horizons evaluated, ascending.
    pub horizons: Vec<usize>,
    /// Per-event returns of the qualifying events.
    pub events: Vec<EventReturns>,
    /// Events left out for lack of trailing history.
    pub excluded: usize,
    /// Mean return per horizon.
    pub average: AverageReturns,
    /// Positive and negative counts per horizon.
    pub counts: PositiveNegativeCounts,
}

impl ReturnSummary {
    /// Summarize `events` at the standard [`HORIZONS`].
    pub fn standard(closes: &[f64], events: &[CrossunderEvent]) -> Self {
        Self::compute(closes, events, &HORIZONS)
    }

    /// Summarize `events` at the given horizons.
    pub fn compute(closes: &[f64], events: &[CrossunderEvent], horizons: &[usize]) -> Self {
        let mut horizons = horizons.to_vec();
        horizons.sort_unstable();
        horizons.dedup();

        let measured: Vec<EventReturns> = events
            .iter()
            .filter_map(|&event| EventReturns::measure(closes, event, &horizons))
            .collect();
        let excluded = events.len() - measured.len();
        debug!(
            qualifying = measured.len(),
            excluded, "forward returns measured"
        );

        let mut average = BTreeMap::new();
        let mut counts = BTreeMap::new();
        for &h in &horizons {
            let column: Vec<f64> = measured.iter().filter_map(|e| e.at(h)).collect();
            let (positive, negative) = count_signs(&column);
            average.insert(h, mean(&column));
            counts.insert(h, SignCounts { positive, negative });
        }

        Self {
            horizons,
            events: measured,
            excluded,
            average: AverageReturns(average),
            counts: PositiveNegativeCounts(counts),
        }
    }

    /// Number of events that contributed to the statistics.
    pub fn qualifying(&self) -> usize {
        self.events.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use crossings_traits::Date;

    fn event(index: usize) -> CrossunderEvent {
        CrossunderEvent {
            index,
            date: Date::from_ymd_opt(2015, 6, 1).unwrap(),
        }
    }

    #[test]
    fn test_no_events_gives_nan_averages() {
        let summary = ReturnSummary::standard(&[100.0; 10], &[]);
        assert_eq!(summary.qualifying(), 0);
        assert_eq!(summary.excluded, 0);
        assert_eq!(summary.horizons, HORIZONS.to_vec());
        assert!(summary.average.values().iter().all(|v| v.is_nan()));
        for (_, c) in summary.counts.iter() {
            assert_eq!(c, SignCounts::default());
            assert_eq!(c.positive_pct(), None);
        }
    }

    #[test]
    fn test_late_events_excluded_entirely() {
        let closes: Vec<f64> = (0..400).map(|i| 100.0 + i as f64).collect();
        let summary = ReturnSummary::standard(&closes, &[event(10), event(200)]);

        assert_eq!(summary.qualifying(), 1);
        assert_eq!(summary.excluded, 1);
        // Only the early event contributes, even at horizons the late one could reach.
        let expected = (closes[40] - closes[10]) / closes[10];
        assert_relative_eq!(summary.average.get(30).unwrap(), expected, epsilon = 1e-12);
        assert_eq!(summary.counts.get(30).unwrap().total(), 1);
    }

    #[test]
    fn test_average_and_counts() {
        let mut closes = vec![100.0; 800];
        // Event at 0: +10% at 30 days. Event at 400: -20% at 30 days.
        closes[30] = 110.0;
        closes[430] = 80.0;
        let summary = ReturnSummary::standard(&closes, &[event(0), event(400)]);

        assert_eq!(summary.qualifying(), 2);
        assert_relative_eq!(summary.average.get(30).unwrap(), -0.05, epsilon = 1e-12);
        assert_eq!(
            summary.counts.get(30).unwrap(),
            SignCounts { positive: 1, negative: 1 }
        );
        assert_relative_eq!(summary.counts.get(30).unwrap().positive_pct().unwrap(), 50.0);

        // Flat everywhere else: zero returns are neither positive nor negative.
        assert_relative_eq!(summary.average.get(45).unwrap(), 0.0);
        assert_eq!(summary.counts.get(45).unwrap().total(), 0);
    }

    #[test]
    fn test_custom_horizons_sorted() {
        let closes: Vec<f64> = (0..20).map(|i| 10.0 + i as f64).collect();
        let summary = ReturnSummary::compute(&closes, &[event(0)], &[5, 1, 5]);
        assert_eq!(summary.horizons, vec![1, 5]);
        assert_eq!(summary.average.iter().map(|(h, _)| h).collect::<Vec<_>>(), vec![1, 5]);
        assert_relative_eq!(summary.average.get(1).unwrap(), 0.1, epsilon = 1e-12);
    }

    #[test]
    fn test_summary_serializes_nan_as_null() {
        let summary = ReturnSummary::standard(&[], &[]);
        let json = serde_json::to_value(&summary).unwrap();
        assert!(json["average"]["30"].is_null());
    }
}
