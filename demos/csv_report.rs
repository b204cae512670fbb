//! Holdout evaluation example
//!
//! Loads a metric series (from a CSV path given as the first argument, or a
//! built-in sample), forecasts over a holdout tail, and prints an accuracy
//! report.

use chrono::NaiveDate;
use standup_forecast::metrics::forecast_accuracy;
use standup_forecast::utils::train_test_split;
use standup_forecast::{DataLoader, ForecastEngine, MetricSeries};
use std::env;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let series = match env::args().nth(1) {
        Some(path) => DataLoader::from_csv(path)?,
        None => sample_series(),
    };

    println!(
        "Loaded {} observations (mean {:.2}, std dev {:.2})",
        series.len(),
        series.mean()?,
        series.std_dev()?
    );

    let values = series.values();
    let (train, test) = train_test_split(&values, 0.25);
    if test.is_empty() {
        println!("Series too short for a holdout evaluation");
        return Ok(());
    }

    let start = series.points()[0].date;
    let train_series = MetricSeries::from_values(start, &train);

    let engine = ForecastEngine::new(0.3, test.len())?;
    match engine.compute(&train_series) {
        Some(forecast) => {
            let predicted: Vec<f64> = forecast.horizon.iter().map(|p| p.predicted).collect();
            let accuracy = forecast_accuracy(&predicted, &test)?;
            println!("\n{}", accuracy);
        }
        None => println!("Not enough history to forecast"),
    }

    Ok(())
}

fn sample_series() -> MetricSeries {
    let start = NaiveDate::from_ymd_opt(2024, 3, 4).expect("valid date");
    let completed = [
        3.0, 4.0, 4.0, 5.0, 6.0, 6.0, 7.0, 8.0, 8.0, 9.0, 9.0, 10.0, 11.0, 11.0, 12.0, 13.0,
    ];
    MetricSeries::from_values(start, &completed)
}
