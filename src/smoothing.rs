//! Rolling statistics for daily metric series
//!
//! Contains the smoothing primitives used to enrich historical series:
//! - Simple moving average (end-aligned rolling mean)
//! - Exponential smoothing (seeded left-to-right recurrence)

/// Default smoothing factor for exponential smoothing
pub const DEFAULT_ALPHA: f64 = 0.3;

/// Compute the end-aligned simple moving average of `values`
///
/// Output index 0 corresponds to input index `window - 1`, so the result is
/// `window - 1` elements shorter than the input. Returns an empty vector when
/// the window is zero or longer than the input.
pub fn moving_average(values: &[f64], window: usize) -> Vec<f64> {
    if window == 0 || values.len() < window {
        return Vec::new();
    }

    values
        .windows(window)
        .map(|slice| slice.iter().sum::<f64>() / window as f64)
        .collect()
}

/// Exponentially smooth `values` with the given smoothing factor
///
/// The first output is seeded to the first input; each subsequent output is
/// `alpha * value + (1 - alpha) * previous`. Every step depends on the prior
/// one, so the recurrence runs strictly left to right. The output has the
/// same length as the input.
pub fn exponential_smoothing(values: &[f64], alpha: f64) -> Vec<f64> {
    if values.is_empty() {
        return Vec::new();
    }

    let mut smoothed = Vec::with_capacity(values.len());
    let mut level = values[0];
    smoothed.push(level);

    for &value in &values[1..] {
        level = alpha * value + (1.0 - alpha) * level;
        smoothed.push(level);
    }

    smoothed
}
