//! Dashboard aggregate models and the wellness computation.

use serde::{Deserialize, Deserializer, Serialize};

/// Entry count for the current month.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyCount {
    #[serde(default)]
    pub log_count: u64,
    #[serde(default)]
    pub month: String,
}

/// One point of the 30-day symptom trend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendPoint {
    pub date: String,
    /// The server has emitted this both as a number and as a string.
    #[serde(deserialize_with = "score_from_number_or_string")]
    pub average_symptom_score: f64,
}

/// Date of the most recent log entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LastLogInfo {
    pub last_log_date: String,
}

/// Everything the dashboard view renders, assembled from the three
/// independent aggregate requests.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardSummary {
    pub last_entry: Option<LastLogInfo>,
    pub total_entries: u64,
    pub month: String,
    pub avg_wellness: f64,
    pub trend: Vec<TrendPoint>,
}

/// Mean of the trend scores, rounded to one decimal place. Zero when the
/// trend is empty.
pub fn average_wellness(trend: &[TrendPoint]) -> f64 {
    if trend.is_empty() {
        return 0.0;
    }
    let sum: f64 = trend.iter().map(|point| point.average_symptom_score).sum();
    (sum / trend.len() as f64 * 10.0).round() / 10.0
}

fn score_from_number_or_string<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumberOrString {
        Number(f64),
        String(String),
    }

    match NumberOrString::deserialize(deserializer)? {
        NumberOrString::Number(value) => Ok(value),
        NumberOrString::String(value) => Ok(value.parse().unwrap_or(0.0)),
    }
}
