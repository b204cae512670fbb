//! The forecasting engine for daily standup metrics

use crate::data::MetricSeries;
use crate::error::{ForecastError, Result};
use crate::insights::{derive_insights, Insight};
use crate::smoothing::{exponential_smoothing, moving_average, DEFAULT_ALPHA};
use crate::trend::TrendModel;
use crate::utils::future_dates;
use chrono::NaiveDate;
use serde::Serialize;

/// Minimum number of observations before forecasting is attempted
pub const MIN_OBSERVATIONS: usize = 3;

/// Default number of days forecast ahead
pub const DEFAULT_HORIZON: usize = 7;

/// Rolling window of the weekly average
const WEEKLY_WINDOW: usize = 7;
/// Rolling window of the biweekly average
const BIWEEKLY_WINDOW: usize = 14;

/// Confidence lost per forecast step
const CONFIDENCE_DECAY: f64 = 0.1;
/// Confidence floor for far-out steps
const MIN_CONFIDENCE: f64 = 0.1;

/// A historical point annotated with rolling statistics
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrichedPoint {
    /// Calendar date of the observation
    pub date: NaiveDate,
    /// Raw observed value
    pub value: f64,
    /// Mean of the trailing 7 days; absent until a full week of history
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weekly_avg: Option<f64>,
    /// Mean of the trailing 14 days; absent until two full weeks of history
    #[serde(skip_serializing_if = "Option::is_none")]
    pub biweekly_avg: Option<f64>,
    /// Exponentially smoothed value, seeded at the first observation
    pub smoothed: f64,
}

/// A single projected future day
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastPoint {
    /// Calendar date of the projection
    pub date: NaiveDate,
    /// Trend projection, floored at zero
    pub predicted: f64,
    /// Decays with the forecast step, clamped to [0.1, 1.0]
    pub confidence: f64,
}

/// Full output of a forecast computation
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Forecast {
    /// Historical points with rolling statistics attached
    pub history: Vec<EnrichedPoint>,
    /// Projected future days, one per horizon step
    pub horizon: Vec<ForecastPoint>,
    /// Fitted linear trend
    pub trend: TrendModel,
    /// Qualitative takeaways for the consumer
    pub insights: Vec<Insight>,
}

impl Forecast {
    /// Serialize the forecast for the dashboard layer
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Forecasting engine for daily metric series
///
/// Stateless: every call to [`compute`](ForecastEngine::compute) derives a
/// fresh result from its input, so a single engine can serve concurrent
/// callers.
#[derive(Debug, Clone)]
pub struct ForecastEngine {
    alpha: f64,
    horizon: usize,
}

impl Default for ForecastEngine {
    fn default() -> Self {
        Self {
            alpha: DEFAULT_ALPHA,
            horizon: DEFAULT_HORIZON,
        }
    }
}

impl ForecastEngine {
    /// Create an engine with a custom smoothing factor and horizon
    pub fn new(alpha: f64, horizon: usize) -> Result<Self> {
        if alpha <= 0.0 || alpha >= 1.0 {
            return Err(ForecastError::InvalidParameter(
                "Alpha must be between 0 and 1".to_string(),
            ));
        }
        if horizon == 0 {
            return Err(ForecastError::InvalidParameter(
                "Horizon must be at least one day".to_string(),
            ));
        }

        Ok(Self { alpha, horizon })
    }

    /// Get the smoothing factor
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Get the horizon length in days
    pub fn horizon(&self) -> usize {
        self.horizon
    }

    /// Compute a forecast over the series
    ///
    /// Returns `None` when the series holds fewer than [`MIN_OBSERVATIONS`]
    /// points; sparse history is a normal outcome, not an error.
    pub fn compute(&self, series: &MetricSeries) -> Option<Forecast> {
        if series.len() < MIN_OBSERVATIONS {
            return None;
        }

        let values = series.values();
        let trend = TrendModel::fit(&values);
        let history = self.enrich(series, &values);
        let horizon = self.project_horizon(series, &trend)?;

        let last = series.last()?;
        let projected = horizon.last()?.predicted;
        let insights = derive_insights(&trend, last.value, projected, self.horizon);

        Some(Forecast {
            history,
            horizon,
            trend,
            insights,
        })
    }

    /// Annotate each historical point with its rolling statistics
    fn enrich(&self, series: &MetricSeries, values: &[f64]) -> Vec<EnrichedPoint> {
        let weekly = moving_average(values, WEEKLY_WINDOW);
        let biweekly = moving_average(values, BIWEEKLY_WINDOW);
        let smoothed = exponential_smoothing(values, self.alpha);

        series
            .points()
            .iter()
            .enumerate()
            .map(|(idx, point)| EnrichedPoint {
                date: point.date,
                value: point.value,
                weekly_avg: idx
                    .checked_sub(WEEKLY_WINDOW - 1)
                    .and_then(|offset| weekly.get(offset).copied()),
                biweekly_avg: idx
                    .checked_sub(BIWEEKLY_WINDOW - 1)
                    .and_then(|offset| biweekly.get(offset).copied()),
                smoothed: smoothed[idx],
            })
            .collect()
    }

    /// Project the trend line over the future horizon
    fn project_horizon(&self, series: &MetricSeries, trend: &TrendModel) -> Option<Vec<ForecastPoint>> {
        let n = series.len();
        let last_date = series.last()?.date;

        let points = future_dates(last_date, self.horizon)
            .into_iter()
            .enumerate()
            .map(|(offset, date)| {
                let step = offset + 1;
                ForecastPoint {
                    date,
                    // The trend continues the historical 0-based index scheme
                    predicted: trend.project(n + step - 1).max(0.0),
                    confidence: (1.0 - step as f64 * CONFIDENCE_DECAY)
                        .clamp(MIN_CONFIDENCE, 1.0),
                }
            })
            .collect();

        Some(points)
    }
}
