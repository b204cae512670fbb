//! # Standup Forecast
//!
//! A Rust library for forecasting team standup metrics and deriving
//! qualitative trend insights.
//!
//! ## Features
//!
//! - Daily metric series handling with calendar-date arithmetic
//! - Rolling statistics (weekly and biweekly moving averages, exponential smoothing)
//! - Linear trend fitting by closed-form ordinary least squares
//! - Point forecasts over a seven-day horizon with decaying confidence
//! - Qualitative insights (trend direction, significant forecast changes)
//! - Forecast accuracy metrics (MAE, MSE, RMSE, MAPE, SMAPE)
//!
//! ## Quick Start
//!
//! ```rust
//! use chrono::NaiveDate;
//! use standup_forecast::{ForecastEngine, MetricSeries};
//!
//! let start = NaiveDate::from_ymd_opt(2024, 3, 4).unwrap();
//! let series = MetricSeries::from_values(start, &[4.0, 6.0, 5.0, 8.0, 7.0, 9.0, 11.0]);
//!
//! let engine = ForecastEngine::default();
//! let forecast = engine.compute(&series).expect("series has enough history");
//!
//! assert_eq!(forecast.horizon.len(), 7);
//! for insight in &forecast.insights {
//!     println!("{}: {}", insight.title, insight.detail);
//! }
//! ```
//!
//! Forecasting needs at least three observations; [`ForecastEngine::compute`]
//! returns `None` for sparser series, which callers should render as "not
//! enough data yet" rather than an error.

pub mod data;
pub mod engine;
pub mod error;
pub mod insights;
pub mod metrics;
pub mod smoothing;
pub mod trend;
pub mod utils;

// Re-export commonly used types
pub use crate::data::{DataLoader, MetricPoint, MetricSeries};
pub use crate::engine::{EnrichedPoint, Forecast, ForecastEngine, ForecastPoint};
pub use crate::error::ForecastError;
pub use crate::insights::{Insight, InsightKind};
pub use crate::trend::{TrendDirection, TrendModel};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
