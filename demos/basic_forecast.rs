//! Basic forecasting example
//!
//! Builds two weeks of standup history and prints the seven-day forecast
//! with its insights.

use chrono::NaiveDate;
use standup_forecast::{ForecastEngine, MetricSeries};

fn main() {
    let start = NaiveDate::from_ymd_opt(2024, 3, 4).expect("valid date");
    let completed = [
        4.0, 6.0, 5.0, 8.0, 7.0, 9.0, 11.0, 10.0, 12.0, 13.0, 12.0, 14.0, 15.0, 16.0,
    ];
    let series = MetricSeries::from_values(start, &completed);

    let engine = ForecastEngine::default();
    let forecast = match engine.compute(&series) {
        Some(forecast) => forecast,
        None => {
            println!("Not enough history to forecast yet");
            return;
        }
    };

    println!(
        "Trend: {:?} (slope {:.2} per day)",
        forecast.trend.direction, forecast.trend.slope
    );

    println!("\nLast week of history:");
    for point in forecast.history.iter().rev().take(7).rev() {
        let weekly = point
            .weekly_avg
            .map(|avg| format!("{:.1}", avg))
            .unwrap_or_else(|| "-".to_string());
        println!(
            "  {}  value {:>5.1}  weekly avg {:>5}  smoothed {:>5.1}",
            point.date, point.value, weekly, point.smoothed
        );
    }

    println!("\nNext {} days:", forecast.horizon.len());
    for point in &forecast.horizon {
        println!(
            "  {}  predicted {:>5.1}  confidence {:>3.0}%",
            point.date,
            point.predicted,
            point.confidence * 100.0
        );
    }

    if forecast.insights.is_empty() {
        println!("\nNo insights for this series");
    } else {
        println!();
        for insight in &forecast.insights {
            println!("[{:?}] {}: {}", insight.kind, insight.title, insight.detail);
        }
    }
}
