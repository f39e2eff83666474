//! Data models for AquaWise
//!
//! None of these outlive a single request. Records are synthesized,
//! scored, serialized and dropped.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Lowest daily usage the synthesizer produces and the prediction floor
pub const MIN_USAGE: u32 = 80;

/// Highest daily usage the synthesizer produces and the prediction ceiling
pub const MAX_USAGE: u32 = 200;

/// Number of days in a synthesized series (ending today, inclusive)
pub const HISTORY_DAYS: usize = 30;

/// Number of trailing entries averaged by the prediction
pub const PREDICTION_WINDOW: usize = 7;

/// A record leaks when a unit draw exceeds this (≈15% of days)
pub const LEAK_THRESHOLD: f64 = 0.85;

/// Share of current usage assumed recoverable with efficient practices
pub const SAVINGS_RATE: f64 = 0.25;

/// Maximum number of records returned as leak alerts
pub const MAX_LEAK_ALERTS: usize = 3;

/// One synthetic day of water usage
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsageRecord {
    /// Calendar day, serialized as `YYYY-MM-DD`
    pub date: NaiveDate,
    /// Usage in liters-equivalent, within `MIN_USAGE..=MAX_USAGE`
    pub usage: u32,
    pub leak_detected: bool,
}

/// Caller-supplied history entry for prediction
///
/// Shaped like a `UsageRecord`, but only `usage` matters, and only for
/// entries inside the prediction window. Any JSON value is accepted: fields
/// of the wrong type, or a non-object entry, simply read as absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "serde_json::Value")]
pub struct HistoricalEntry {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub leak_detected: Option<bool>,
}

impl HistoricalEntry {
    /// Entry carrying only a usage value
    pub fn from_usage(usage: f64) -> Self {
        Self {
            date: None,
            usage: Some(usage),
            leak_detected: None,
        }
    }
}

impl From<serde_json::Value> for HistoricalEntry {
    fn from(value: serde_json::Value) -> Self {
        Self {
            date: value.get("date").and_then(|v| v.as_str()).map(str::to_string),
            usage: value.get("usage").and_then(|v| v.as_f64()),
            leak_detected: value.get("leak_detected").and_then(|v| v.as_bool()),
        }
    }
}

impl From<&UsageRecord> for HistoricalEntry {
    fn from(record: &UsageRecord) -> Self {
        Self {
            date: Some(record.date.format("%Y-%m-%d").to_string()),
            usage: Some(f64::from(record.usage)),
            leak_detected: Some(record.leak_detected),
        }
    }
}

/// Body of `POST /api/predict-usage`
///
/// Absent fields default to empty containers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionRequest {
    #[serde(default)]
    pub historical_data: Vec<HistoricalEntry>,
    /// Accepted and carried along, never read
    #[serde(default = "empty_object")]
    pub weather_data: serde_json::Value,
}

impl Default for PredictionRequest {
    fn default() -> Self {
        Self {
            historical_data: Vec::new(),
            weather_data: empty_object(),
        }
    }
}

impl PredictionRequest {
    /// Build a request from plain usage values with no weather data
    pub fn from_usages(usages: impl IntoIterator<Item = f64>) -> Self {
        Self {
            historical_data: usages.into_iter().map(HistoricalEntry::from_usage).collect(),
            ..Self::default()
        }
    }

    /// Build a request from a synthesized series, oldest first
    pub fn from_records(records: &[UsageRecord]) -> Self {
        Self {
            historical_data: records.iter().map(HistoricalEntry::from).collect(),
            ..Self::default()
        }
    }
}

fn empty_object() -> serde_json::Value {
    serde_json::Value::Object(serde_json::Map::new())
}

/// Predicted usage, clamped to `[MIN_USAGE, MAX_USAGE]` and rounded to cents
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    pub prediction: f64,
}

/// Average usage and the share of it that could be saved
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SavingsSummary {
    pub current_usage: f64,
    pub potential_savings: f64,
}
