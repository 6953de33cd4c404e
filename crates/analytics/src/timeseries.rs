//! Mocked stock-movement series.
//!
//! There is no persisted movement ledger behind the dashboard; this series
//! exists to give the area chart a plausible shape and is explicitly
//! non-authoritative. It is seeded so a given (range, seed) pair always
//! produces the same series.

use chrono::{Duration, NaiveDate};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

use crate::filter::TimeRange;

/// One day of synthetic inventory movement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StockMovementPoint {
    /// Short display label, e.g. "Mar 5".
    pub date: String,
    pub stock_in: u32,
    pub stock_out: u32,
    pub net_change: i32,
}

/// One point per day in the range, oldest first (`days + 1` points so the
/// current day is included).
pub fn stock_movement_series(
    range: TimeRange,
    seed: u64,
    today: NaiveDate,
) -> Vec<StockMovementPoint> {
    let days = range.series_days();
    let mut rng = StdRng::seed_from_u64(seed ^ u64::from(days));

    (0..=days)
        .rev()
        .map(|offset| {
            let date = today - Duration::days(i64::from(offset));
            let stock_in = rng.gen_range(0..50);
            let stock_out = rng.gen_range(0..30);
            StockMovementPoint {
                date: date.format("%b %-d").to_string(),
                stock_in,
                stock_out,
                net_change: stock_in as i32 - stock_out as i32,
            }
        })
        .collect()
}
