//! Trailing simple moving averages.

/// Trailing arithmetic mean over `window` values, aligned to the input.
///
/// Position `i` holds the mean of `values[i + 1 - window..=i]`. The first
/// `window - 1` positions are undefined and hold NaN, as does every position
/// when `window` is zero or longer than the input. Each window is summed
/// directly, without a running total.
pub fn simple_moving_average(values: &[f64], window: usize) -> Vec<f64> {
    let mut out = vec![f64::NAN; values.len()];
    if window == 0 || window > values.len() {
        return out;
    }

    for (offset, chunk) in values.windows(window).enumerate() {
        out[offset + window - 1] = chunk.iter().sum::<f64>() / window as f64;
    }
    out
}
