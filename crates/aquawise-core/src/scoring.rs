//! Usage scoring: recent-average prediction and savings estimate
//!
//! The prediction is a scaled trailing average, not a fitted model.

use tracing::debug;

use crate::error::CoreError;
use crate::models::{
    MAX_USAGE, MIN_USAGE, PREDICTION_WINDOW, PredictionRequest, PredictionResult, SAVINGS_RATE,
    SavingsSummary, UsageRecord,
};
use crate::random::RandomSource;

/// Round half away from zero to 2 decimal places
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Predict next usage from the last 7 historical entries
///
/// Entries before the window are never read, whatever their shape.
/// The trailing mean is scaled by a multiplier drawn from `[0.8, 1.2)`,
/// clamped to `[MIN_USAGE, MAX_USAGE]` and rounded. `weather_data` is
/// not consulted.
///
/// # Errors
/// - `InsufficientHistory` with fewer than 7 entries
/// - `MissingUsage` if a windowed entry has no numeric usage
/// - `InvalidUsage` if a windowed usage value is NaN or infinite
pub fn predict_usage<R: RandomSource + ?Sized>(
    rng: &mut R,
    request: &PredictionRequest,
) -> Result<PredictionResult, CoreError> {
    let history = &request.historical_data;
    if history.len() < PREDICTION_WINDOW {
        return Err(CoreError::InsufficientHistory {
            required: PREDICTION_WINDOW,
            actual: history.len(),
        });
    }

    let offset = history.len() - PREDICTION_WINDOW;
    let mut usages = [0.0; PREDICTION_WINDOW];
    for (i, entry) in history[offset..].iter().enumerate() {
        let index = offset + i;
        let usage = entry.usage.ok_or(CoreError::MissingUsage { index })?;
        if !usage.is_finite() {
            return Err(CoreError::InvalidUsage {
                index,
                value: usage,
            });
        }
        usages[i] = usage;
    }

    let last_week_avg = usages.iter().sum::<f64>() / PREDICTION_WINDOW as f64;
    let multiplier = 0.8 + 0.4 * rng.next_unit();
    let prediction = (last_week_avg * multiplier).clamp(f64::from(MIN_USAGE), f64::from(MAX_USAGE));

    debug!(
        history = history.len(),
        last_week_avg, multiplier, prediction, "Predicted water usage"
    );

    Ok(PredictionResult {
        prediction: round2(prediction),
    })
}

/// Arithmetic mean of usage over a series (0.0 when empty)
pub fn average_usage(records: &[UsageRecord]) -> f64 {
    if records.is_empty() {
        return 0.0;
    }
    let total: u64 = records.iter().map(|r| u64::from(r.usage)).sum();
    total as f64 / records.len() as f64
}

/// Current average usage and the 25% assumed recoverable
///
/// Savings are derived from the rounded average, so the response always
/// satisfies `potential_savings == round2(current_usage * 0.25)`.
pub fn water_savings(records: &[UsageRecord]) -> SavingsSummary {
    let current_usage = round2(average_usage(records));
    SavingsSummary {
        current_usage,
        potential_savings: round2(current_usage * SAVINGS_RATE),
    }
}
