//! Forward returns after an event.

use crossings_signals::CrossunderEvent;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Holding periods, in trading days, evaluated after every event.
pub const HORIZONS: [usize; 9] = [30, 45, 60, 75, 90, 120, 150, 180, 365];

/// Simple return from `closes[index]` to `closes[index + horizon]`.
///
/// Returns `None` when the later bar is past the end of the data.
///
/// # Examples
///
/// ```
/// use crossings_eval::forward_return;
///
/// let mut closes = vec![100.0; 31];
/// closes[30] = 110.0;
/// let r = forward_return(&closes, 0, 30).unwrap();
/// assert!((r - 0.10).abs() < 1e-12);
/// ```
pub fn forward_return(closes: &[f64], index: usize, horizon: usize) -> Option<f64> {
    let entry = *closes.get(index)?;
    let exit = *closes.get(index.checked_add(horizon)?)?;
    Some((exit - entry) / entry)
}

/// Forward returns of one event at every horizon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventReturns {
    /// The event measured from.
    pub event: CrossunderEvent,
    /// Return keyed by horizon in trading days.
    pub returns: BTreeMap<usize, f64>,
}

impl EventReturns {
    /// Measure `event` at each of `horizons`.
    ///
    /// All or nothing: the event qualifies only if strictly more than the
    /// longest horizon of bars follows it, and then every horizon is filled.
    pub fn measure(closes: &[f64], event: CrossunderEvent, horizons: &[usize]) -> Option<Self> {
        let longest = horizons.iter().copied().max().unwrap_or(0);
        if event.index.checked_add(longest)? >= closes.len() {
            return None;
        }

        let returns = horizons
            .iter()
            .map(|&h| forward_return(closes, event.index, h).map(|r| (h, r)))
            .collect::<Option<BTreeMap<_, _>>>()?;

        Some(Self { event, returns })
    }

    /// Return at `horizon`, if measured.
    pub fn at(&self, horizon: usize) -> Option<f64> {
        self.returns.get(&horizon).copied()
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
            date: Date::from_ymd_opt(2020, 1, 1).unwrap(),
        }
    }

    #[test]
    fn test_forward_return_literal() {
        let mut closes = vec![100.0; 400];
        closes[30] = 110.0;
        assert_relative_eq!(forward_return(&closes, 0, 30).unwrap(), 0.10, epsilon = 1e-12);
        assert_relative_eq!(forward_return(&closes, 0, 45).unwrap(), 0.0);
    }

    #[test]
    fn test_forward_return_negative() {
        let closes = [200.0, 150.0];
        assert_relative_eq!(forward_return(&closes, 0, 1).unwrap(), -0.25);
    }

    #[test]
    fn test_forward_return_out_of_range() {
        assert_eq!(forward_return(&[1.0, 2.0], 1, 1), None);
        assert_eq!(forward_return(&[1.0, 2.0], 5, 0), None);
        assert_eq!(forward_return(&[1.0], 0, usize::MAX), None);
    }

    #[test]
    fn test_measure_all_horizons() {
        let closes: Vec<f64> = (0..500).map(|i| 100.0 + i as f64).collect();
        let measured = EventReturns::measure(&closes, event(10), &HORIZONS).unwrap();

        assert_eq!(measured.returns.len(), HORIZONS.len());
        for &h in &HORIZONS {
            let expected = (closes[10 + h] - closes[10]) / closes[10];
            assert_relative_eq!(measured.at(h).unwrap(), expected, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_measure_requires_strictly_more_than_longest_horizon() {
        let closes = vec![100.0; 400];
        // 34 + 365 = 399 < 400 qualifies, 35 + 365 = 400 does not.
        assert!(EventReturns::measure(&closes, event(34), &HORIZONS).is_some());
        assert!(EventReturns::measure(&closes, event(35), &HORIZONS).is_none());
    }

    #[test]
    fn test_measure_is_all_or_nothing() {
        // Enough for 30..=180 but not 365: nothing is measured.
        let closes = vec![100.0; 300];
        assert!(EventReturns::measure(&closes, event(0), &HORIZONS).is_none());
    }
}
