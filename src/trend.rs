//! Linear trend fitting for metric series

use serde::Serialize;

/// Direction of a fitted trend line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    Increasing,
    Decreasing,
    Stable,
}

impl TrendDirection {
    fn from_slope(slope: f64) -> TrendDirection {
        if slope > 0.0 {
            TrendDirection::Increasing
        } else if slope < 0.0 {
            TrendDirection::Decreasing
        } else {
            TrendDirection::Stable
        }
    }
}

/// Linear trend fitted over a metric series by ordinary least squares
///
/// The independent variable is the point's position in the series (0-based),
/// so `slope` reads as change per day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendModel {
    /// Rate of change per day
    pub slope: f64,
    /// Value of the fitted line at index 0
    pub intercept: f64,
    /// Categorical direction derived from the slope sign
    pub direction: TrendDirection,
}

impl TrendModel {
    /// Fit a trend line over `values` using the closed-form OLS sums
    ///
    /// The x values are the dense range `0..n`, so `Σx` and `Σx²` follow from
    /// the arithmetic-series identities. A zero denominator cannot occur for
    /// two or more points with this index scheme, but is guarded by falling
    /// back to a flat line at the mean rather than dividing by zero.
    pub fn fit(values: &[f64]) -> TrendModel {
        if values.is_empty() {
            return TrendModel::flat(0.0);
        }

        let n = values.len() as f64;
        let sum_y: f64 = values.iter().sum();
        let mean_y = sum_y / n;

        // Σx = n(n-1)/2 and Σx² = n(n-1)(2n-1)/6 for x = 0..n-1
        let sum_x = n * (n - 1.0) / 2.0;
        let sum_x2 = n * (n - 1.0) * (2.0 * n - 1.0) / 6.0;
        let sum_xy: f64 = values
            .iter()
            .enumerate()
            .map(|(idx, &value)| idx as f64 * value)
            .sum();

        let denominator = n * sum_x2 - sum_x * sum_x;
        if denominator.abs() < 1e-10 {
            return TrendModel::flat(mean_y);
        }

        let slope = (n * sum_xy - sum_x * sum_y) / denominator;
        let intercept = (sum_y - slope * sum_x) / n;

        TrendModel {
            slope,
            intercept,
            direction: TrendDirection::from_slope(slope),
        }
    }

    /// Evaluate the fitted line at a series index
    pub fn project(&self, index: usize) -> f64 {
        self.slope * index as f64 + self.intercept
    }

    fn flat(level: f64) -> TrendModel {
        TrendModel {
            slope: 0.0,
            intercept: level,
            direction: TrendDirection::Stable,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_perfect_line() {
        // y = 2x + 5 over x = 0..9
        let values: Vec<f64> = (0..10).map(|x| 2.0 * x as f64 + 5.0).collect();
        let trend = TrendModel::fit(&values);

        assert!((trend.slope - 2.0).abs() < 1e-9);
        assert!((trend.intercept - 5.0).abs() < 1e-9);
        assert_eq!(trend.direction, TrendDirection::Increasing);
    }

    #[test]
    fn test_fit_flat_series_is_stable() {
        let trend = TrendModel::fit(&[5.0, 5.0, 5.0, 5.0]);

        assert_eq!(trend.slope, 0.0);
        assert_eq!(trend.direction, TrendDirection::Stable);
    }

    #[test]
    fn test_degenerate_fit_falls_back_to_mean() {
        // One point zeroes the denominator; the fit must not divide by zero
        let trend = TrendModel::fit(&[42.0]);

        assert_eq!(trend.slope, 0.0);
        assert_eq!(trend.intercept, 42.0);
        assert_eq!(trend.direction, TrendDirection::Stable);
    }

    #[test]
    fn test_project_continues_the_index_scheme() {
        let values: Vec<f64> = (0..5).map(|x| 3.0 * x as f64 + 1.0).collect();
        let trend = TrendModel::fit(&values);

        assert!((trend.project(5) - 16.0).abs() < 1e-9);
    }
}
