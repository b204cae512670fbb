//! Qualitative insights derived from trend and forecast

use crate::trend::{TrendDirection, TrendModel};
use serde::Serialize;

/// Projected change, in percent, above which a horizon insight is emitted
const CHANGE_THRESHOLD_PCT: f64 = 10.0;

/// Tone of an insight, used by consumers to pick icon and color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InsightKind {
    Positive,
    Warning,
}

/// A user-facing takeaway derived from the forecast
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Insight {
    /// Tone of the message
    pub kind: InsightKind,
    /// Short heading
    pub title: String,
    /// Full message text
    pub detail: String,
}

/// Derive the insight list for a computed forecast
///
/// The trend insight (if any) comes first, then the horizon-change insight
/// when the projected change exceeds the threshold in either direction. The
/// change ratio is skipped entirely when the last observed value is zero, so
/// no non-finite number can reach the output. The slope is stored raw on the
/// trend model; only the message text rounds it.
pub fn derive_insights(
    trend: &TrendModel,
    last_value: f64,
    projected: f64,
    horizon: usize,
) -> Vec<Insight> {
    let mut insights = Vec::new();

    match trend.direction {
        TrendDirection::Increasing => insights.push(Insight {
            kind: InsightKind::Positive,
            title: "Upward Trend".to_string(),
            detail: format!("Output is trending up by {:.2} per day", trend.slope),
        }),
        TrendDirection::Decreasing => insights.push(Insight {
            kind: InsightKind::Warning,
            title: "Downward Trend".to_string(),
            detail: format!("Output is trending down by {:.2} per day", trend.slope.abs()),
        }),
        TrendDirection::Stable => {}
    }

    // A zero denominator would make the ratio meaningless
    if last_value != 0.0 {
        let change_pct = (projected - last_value) * 100.0 / last_value;
        if change_pct.abs() > CHANGE_THRESHOLD_PCT {
            let (kind, verb) = if change_pct > 0.0 {
                (InsightKind::Positive, "rise")
            } else {
                (InsightKind::Warning, "drop")
            };

            insights.push(Insight {
                kind,
                title: format!("{}-Day Forecast", horizon),
                detail: format!(
                    "Projected to {} {:.1}% over the next {} days",
                    verb,
                    change_pct.abs(),
                    horizon
                ),
            });
        }
    }

    insights
}
