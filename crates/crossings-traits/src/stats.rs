//! Statistical helpers shared by the evaluation and rendering crates.

/// Arithmetic mean of the non-NaN values.
///
/// Follows the usual DataFrame convention: missing values are skipped, and an
/// input with nothing left to average yields NaN rather than an error.
///
/// # Examples
///
/// ```
/// use crossings_traits::stats::mean;
///
/// assert_eq!(mean(&[1.0, 2.0, f64::NAN, 3.0]), 2.0);
/// assert!(mean(&[]).is_nan());
/// ```
pub fn mean(values: &[f64]) -> f64 {
    let (sum, n) = values
        .iter()
        .filter(|v| !v.is_nan())
        .fold((0.0, 0usize), |(sum, n), v| (sum + v, n + 1));

    if n == 0 { f64::NAN } else { sum / n as f64 }
}

/// Count strictly positive and strictly negative values.
///
/// Zero and NaN are counted in neither bucket.
pub fn count_signs(values: &[f64]) -> (usize, usize) {
    values.iter().fold((0, 0), |(pos, neg), &v| {
        if v > 0.0 {
            (pos + 1, neg)
        } else if v < 0.0 {
            (pos, neg + 1)
        } else {
            (pos, neg)
        }
    })
}

/// `part` as a percentage of `total`, or `None` when `total` is zero.
pub fn percentage(part: usize, total: usize) -> Option<f64> {
    (total > 0).then(|| part as f64 * 100.0 / total as f64)
}
