//! Utility functions for the standup_forecast crate

use chrono::{Days, NaiveDate};

/// Consecutive calendar dates following `last`
///
/// Dates advance by calendar days, not fixed millisecond offsets.
pub fn future_dates(last: NaiveDate, horizon: usize) -> Vec<NaiveDate> {
    (1..=horizon)
        .map(|step| last + Days::new(step as u64))
        .collect()
}

/// Split a value series into training and test sets
pub fn train_test_split(values: &[f64], test_ratio: f64) -> (Vec<f64>, Vec<f64>) {
    if values.is_empty() || test_ratio <= 0.0 || test_ratio >= 1.0 {
        return (values.to_vec(), Vec::new());
    }

    let test_size = (values.len() as f64 * test_ratio).round() as usize;
    let train_size = values.len() - test_size;

    let train = values[..train_size].to_vec();
    let test = values[train_size..].to_vec();

    (train, test)
}
