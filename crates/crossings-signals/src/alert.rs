//! Live alert decision.
//!
//! The live check looks only at the last two bars. It fires on a fresh
//! crossunder without waiting for the persistence window, which would delay
//! every alert by weeks.

use crossings_traits::{Date, PriceSeries};

/// Whether the fast line crossed under the slow line on the final bar.
///
/// True iff `fast > slow` on the second-to-last bar and `fast < slow` on the
/// last bar. Fewer than two common bars never fire.
pub fn is_live_crossunder(fast: &[f64], slow: &[f64]) -> bool {
    let n = fast.len().min(slow.len());
    n >= 2 && fast[n - 2] > slow[n - 2] && fast[n - 1] < slow[n - 1]
}

/// Date of the final bar when a live crossunder fired on it.
pub fn live_crossunder(series: &PriceSeries, fast: &[f64], slow: &[f64]) -> Option<Date> {
    if is_live_crossunder(fast, slow) {
        series.last().map(|p| p.date)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CrossunderDetector;

    #[test]
    fn test_fires_on_last_bar_cross() {
        let fast = [12.0, 11.0, 9.0];
        let slow = [10.0, 10.0, 10.0];
        assert!(is_live_crossunder(&fast, &slow));
    }

    #[test]
    fn test_fires_without_persistence() {
        let mut fast = vec![11.0; 40];
        fast[39] = 9.0;
        let slow = vec![10.0; 40];

        assert!(is_live_crossunder(&fast, &slow));
        assert!(CrossunderDetector::default().detect_indices(&fast, &slow).is_empty());
    }

    #[test]
    fn test_no_fire_when_already_below() {
        assert!(!is_live_crossunder(&[9.0, 8.0], &[10.0, 10.0]));
    }

    #[test]
    fn test_no_fire_on_equality() {
        assert!(!is_live_crossunder(&[10.0, 9.0], &[10.0, 10.0]));
        assert!(!is_live_crossunder(&[11.0, 10.0], &[10.0, 10.0]));
    }

    #[test]
    fn test_no_fire_on_crossover() {
        assert!(!is_live_crossunder(&[9.0, 11.0], &[10.0, 10.0]));
    }

    #[test]
    fn test_short_input() {
        assert!(!is_live_crossunder(&[], &[]));
        assert!(!is_live_crossunder(&[11.0], &[10.0]));
    }

    #[test]
    fn test_undefined_average_never_fires() {
        assert!(!is_live_crossunder(&[11.0, 9.0], &[f64::NAN, f64::NAN]));
    }

    #[test]
    fn test_live_crossunder_date() {
        let d1 = Date::from_ymd_opt(2024, 3, 1).unwrap();
        let d2 = Date::from_ymd_opt(2024, 3, 4).unwrap();
        let series = PriceSeries::from_parts(&[d1, d2], &[11.0, 9.0]).unwrap();

        assert_eq!(live_crossunder(&series, &[11.0, 9.0], &[10.0, 10.0]), Some(d2));
        assert_eq!(live_crossunder(&series, &[11.0, 11.0], &[10.0, 10.0]), None);
    }
}
