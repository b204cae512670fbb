use assert_approx_eq::assert_approx_eq;
use chrono::{Days, NaiveDate};
use rstest::rstest;
use standup_forecast::{ForecastEngine, MetricSeries, TrendDirection};

fn start_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 4).unwrap()
}

fn series(values: &[f64]) -> MetricSeries {
    MetricSeries::from_values(start_date(), values)
}

#[rstest]
#[case(&[])]
#[case(&[5.0])]
#[case(&[5.0, 6.0])]
fn test_short_series_is_unavailable(#[case] values: &[f64]) {
    let engine = ForecastEngine::default();
    assert!(engine.compute(&series(values)).is_none());
}

#[test]
fn test_minimum_length_series_forecasts() {
    let engine = ForecastEngine::default();
    assert!(engine.compute(&series(&[5.0, 6.0, 7.0])).is_some());
}

#[rstest]
#[case(0.0, 7)]
#[case(1.0, 7)]
#[case(-0.1, 7)]
#[case(1.5, 7)]
#[case(0.3, 0)]
fn test_invalid_engine_parameters(#[case] alpha: f64, #[case] horizon: usize) {
    assert!(ForecastEngine::new(alpha, horizon).is_err());
}

#[test]
fn test_horizon_has_consecutive_daily_dates() {
    let engine = ForecastEngine::default();
    let forecast = engine.compute(&series(&[5.0, 6.0, 7.0])).unwrap();

    assert_eq!(forecast.horizon.len(), 7);

    let last_date = start_date() + Days::new(2);
    for (offset, point) in forecast.horizon.iter().enumerate() {
        assert_eq!(point.date, last_date + Days::new(offset as u64 + 1));
    }
}

#[test]
fn test_confidence_decays_within_bounds() {
    let engine = ForecastEngine::default();
    let forecast = engine.compute(&series(&[5.0, 6.0, 7.0])).unwrap();

    let confidences: Vec<f64> = forecast.horizon.iter().map(|p| p.confidence).collect();
    assert_approx_eq!(confidences[0], 0.9);
    assert_approx_eq!(confidences[6], 0.3);

    for pair in confidences.windows(2) {
        assert!(pair[1] <= pair[0]);
    }
    for confidence in confidences {
        assert!((0.1..=1.0).contains(&confidence));
    }
}

#[test]
fn test_confidence_floor_holds_on_long_horizons() {
    let engine = ForecastEngine::new(0.3, 15).unwrap();
    let forecast = engine.compute(&series(&[5.0, 6.0, 7.0])).unwrap();

    assert_eq!(forecast.horizon.len(), 15);
    for point in &forecast.horizon {
        assert!(point.confidence >= 0.1);
    }
    // Beyond step 9 the linear decay would go negative; the floor holds it
    assert_approx_eq!(forecast.horizon[14].confidence, 0.1);
}

#[test]
fn test_declining_projection_is_floored_at_zero() {
    let engine = ForecastEngine::default();
    let forecast = engine
        .compute(&series(&[60.0, 50.0, 40.0, 30.0, 20.0, 10.0]))
        .unwrap();

    assert_eq!(forecast.trend.direction, TrendDirection::Decreasing);
    for point in &forecast.horizon {
        assert!(point.predicted >= 0.0);
    }
    // Slope -10 from 60 crosses zero on the first projected day
    assert_approx_eq!(forecast.horizon[0].predicted, 0.0);
}

#[test]
fn test_enrichment_aligns_rolling_windows() {
    let values: Vec<f64> = (1..=20).map(|v| v as f64).collect();
    let engine = ForecastEngine::default();
    let forecast = engine.compute(&series(&values)).unwrap();

    assert_eq!(forecast.history.len(), 20);

    // Weekly average appears with the 7th point, biweekly with the 14th
    assert!(forecast.history[5].weekly_avg.is_none());
    assert_approx_eq!(forecast.history[6].weekly_avg.unwrap(), 4.0);
    assert_approx_eq!(forecast.history[19].weekly_avg.unwrap(), 17.0);
    assert!(forecast.history[12].biweekly_avg.is_none());
    assert_approx_eq!(forecast.history[13].biweekly_avg.unwrap(), 7.5);

    // Smoothing is seeded at the first raw value
    assert_approx_eq!(forecast.history[0].smoothed, 1.0);
}

#[test]
fn test_short_history_has_no_window_averages() {
    let engine = ForecastEngine::default();
    let forecast = engine.compute(&series(&[5.0, 6.0, 7.0, 8.0])).unwrap();

    for point in &forecast.history {
        assert!(point.weekly_avg.is_none());
        assert!(point.biweekly_avg.is_none());
    }
}

#[test]
fn test_zero_final_value_stays_finite_and_skips_change_insight() {
    let engine = ForecastEngine::default();
    let forecast = engine.compute(&series(&[30.0, 20.0, 10.0, 0.0])).unwrap();

    assert!(forecast.trend.slope.is_finite());
    for point in &forecast.horizon {
        assert!(point.predicted.is_finite());
        assert!(point.confidence.is_finite());
    }
    for point in &forecast.history {
        assert!(point.value.is_finite());
        assert!(point.smoothed.is_finite());
    }

    // Only the downward-trend warning remains
    assert_eq!(forecast.insights.len(), 1);
    assert_eq!(forecast.insights[0].title, "Downward Trend");
}

#[test]
fn test_insights_are_ordered_trend_first() {
    // y = 2x + 5 projects from 23 to 37 over the horizon, well past 10%
    let values: Vec<f64> = (0..10).map(|x| 2.0 * x as f64 + 5.0).collect();
    let engine = ForecastEngine::default();
    let forecast = engine.compute(&series(&values)).unwrap();

    assert_eq!(forecast.insights.len(), 2);
    assert_eq!(forecast.insights[0].title, "Upward Trend");
    assert_eq!(forecast.insights[1].title, "7-Day Forecast");
}

#[test]
fn test_stable_series_has_no_insights() {
    let engine = ForecastEngine::default();
    let forecast = engine.compute(&series(&[10.0, 10.0, 10.0, 10.0])).unwrap();

    assert_eq!(forecast.trend.direction, TrendDirection::Stable);
    assert!(forecast.insights.is_empty());
}

#[test]
fn test_recomputation_is_deterministic() {
    let values: Vec<f64> = (0..12).map(|x| 3.0 + (x % 4) as f64).collect();
    let engine = ForecastEngine::default();

    let first = engine.compute(&series(&values)).unwrap();
    let second = engine.compute(&series(&values)).unwrap();
    assert_eq!(first, second);
}
