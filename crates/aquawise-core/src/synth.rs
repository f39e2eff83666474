//! Mock water-usage synthesis
//!
//! Produces the 30-day series every endpoint works from, and the leak-alert
//! view of it.

use chrono::{Duration, NaiveDate};
use tracing::debug;

use crate::models::{
    HISTORY_DAYS, LEAK_THRESHOLD, MAX_LEAK_ALERTS, MAX_USAGE, MIN_USAGE, UsageRecord,
};
use crate::random::RandomSource;

/// Generate one record per day for the 30 days ending `today` (inclusive)
///
/// Records are in ascending date order. For each day the usage is drawn
/// first, then the leak flag.
pub fn generate_water_data<R: RandomSource + ?Sized>(
    rng: &mut R,
    today: NaiveDate,
) -> Vec<UsageRecord> {
    let records: Vec<UsageRecord> = (0..HISTORY_DAYS)
        .map(|i| {
            let days_back = (HISTORY_DAYS - 1 - i) as i64;
            let date = today - Duration::days(days_back);
            let usage = rng.next_in_range(MIN_USAGE, MAX_USAGE);
            let leak_detected = rng.next_unit() > LEAK_THRESHOLD;
            UsageRecord {
                date,
                usage,
                leak_detected,
            }
        })
        .collect();

    debug!(
        days = records.len(),
        leaks = records.iter().filter(|r| r.leak_detected).count(),
        "Synthesized water usage series"
    );

    records
}

/// The most recent leaking records, oldest first, at most `MAX_LEAK_ALERTS`
pub fn leak_alerts(records: &[UsageRecord]) -> Vec<UsageRecord> {
    let leaks: Vec<&UsageRecord> = records.iter().filter(|r| r.leak_detected).collect();
    let start = leaks.len().saturating_sub(MAX_LEAK_ALERTS);
    leaks[start..].iter().map(|r| (*r).clone()).collect()
}
