//! Daily metric series handling for forecasting

use crate::error::{ForecastError, Result};
use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A single daily observation of a team metric
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricPoint {
    /// Calendar date of the observation
    pub date: NaiveDate,
    /// Observed value (tasks completed, story points, active blockers, ...)
    pub value: f64,
}

/// Ordered daily series of a team metric
///
/// Dates are strictly ascending; a point's position in the series doubles as
/// the independent variable for trend fitting.
#[derive(Debug, Clone)]
pub struct MetricSeries {
    points: Vec<MetricPoint>,
}

/// Data loader for metric series
#[derive(Debug)]
pub struct DataLoader;

impl DataLoader {
    /// Load a metric series from a CSV file
    ///
    /// The date and value columns are detected from the header row. Rows are
    /// sorted by date before the series is built, so exports that arrive
    /// unordered still load.
    pub fn from_csv<P: AsRef<Path>>(path: P) -> Result<MetricSeries> {
        let mut reader = csv::Reader::from_path(path)?;

        let headers = reader.headers()?.clone();
        let date_idx = Self::detect_date_column(&headers)?;
        let value_idx = Self::detect_value_column(&headers, date_idx)?;

        let mut points = Vec::new();
        for (row, record) in reader.records().enumerate() {
            let record = record?;

            let date_field = record.get(date_idx).ok_or_else(|| {
                ForecastError::DataError(format!("Row {} is missing its date field", row + 1))
            })?;
            let date = NaiveDate::parse_from_str(date_field.trim(), "%Y-%m-%d").map_err(|e| {
                ForecastError::DataError(format!("Invalid date '{}': {}", date_field, e))
            })?;

            let value_field = record.get(value_idx).ok_or_else(|| {
                ForecastError::DataError(format!("Row {} is missing its value field", row + 1))
            })?;
            let value = value_field.trim().parse::<f64>().map_err(|e| {
                ForecastError::DataError(format!("Invalid value '{}': {}", value_field, e))
            })?;

            points.push(MetricPoint { date, value });
        }

        points.sort_by_key(|point| point.date);
        MetricSeries::new(points)
    }

    /// Detect the date column in the header row
    fn detect_date_column(headers: &csv::StringRecord) -> Result<usize> {
        headers
            .iter()
            .position(|name| {
                let name = name.to_lowercase();
                name.contains("date") || name.contains("day") || name.contains("time")
            })
            .ok_or_else(|| ForecastError::DataError("No date column found in data".to_string()))
    }

    /// Detect the value column, falling back to the first non-date column
    fn detect_value_column(headers: &csv::StringRecord, date_idx: usize) -> Result<usize> {
        let by_name = headers.iter().position(|name| {
            let name = name.to_lowercase();
            name.contains("value")
                || name.contains("count")
                || name.contains("total")
                || name.contains("points")
        });

        by_name
            .or_else(|| (0..headers.len()).find(|&idx| idx != date_idx))
            .ok_or_else(|| ForecastError::DataError("No value column found in data".to_string()))
    }
}

impl MetricSeries {
    /// Create a series from points, enforcing strictly ascending dates
    pub fn new(points: Vec<MetricPoint>) -> Result<Self> {
        for pair in points.windows(2) {
            if pair[1].date <= pair[0].date {
                return Err(ForecastError::DataError(format!(
                    "Series dates must be strictly ascending: {} follows {}",
                    pair[1].date, pair[0].date
                )));
            }
        }

        Ok(Self { points })
    }

    /// Build a series of consecutive daily points starting at `start`
    pub fn from_values(start: NaiveDate, values: &[f64]) -> Self {
        let points = values
            .iter()
            .enumerate()
            .map(|(offset, &value)| MetricPoint {
                date: start + Days::new(offset as u64),
                value,
            })
            .collect();

        Self { points }
    }

    /// Get the points in date order
    pub fn points(&self) -> &[MetricPoint] {
        &self.points
    }

    /// Get the observed values in date order
    pub fn values(&self) -> Vec<f64> {
        self.points.iter().map(|point| point.value).collect()
    }

    /// Get the most recent point
    pub fn last(&self) -> Option<&MetricPoint> {
        self.points.last()
    }

    /// Check if the series is empty
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Get the length of the series
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Calculate the mean of the observed values
    pub fn mean(&self) -> Result<f64> {
        if self.points.is_empty() {
            return Err(ForecastError::DataError(
                "No observations available".to_string(),
            ));
        }

        let sum: f64 = self.points.iter().map(|point| point.value).sum();
        Ok(sum / self.points.len() as f64)
    }

    /// Calculate the standard deviation of the observed values
    pub fn std_dev(&self) -> Result<f64> {
        let mean = self.mean()?;
        let variance: f64 = self
            .points
            .iter()
            .map(|point| (point.value - mean).powi(2))
            .sum::<f64>()
            / self.points.len() as f64;

        Ok(variance.sqrt())
    }
}
