use crate::QueryResult;
use chrono::{Days, NaiveDate};

/// Days of history in the activity series. The series spans
/// `today - 30d` through today, one bucket per day.
pub const ACTIVITY_WINDOW_DAYS: u64 = 30;

/// One point of the activity histogram. The day key carries no year; it
/// rolls within a 12-month view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyCount {
    pub day: String,
    pub allowed: u64,
    pub blocked: u64,
}

/// Raw grouped row from the log store: per-day, per-result totals.
#[derive(Debug, Clone)]
pub struct DailyGroup {
    pub day: String,
    pub result: QueryResult,
    pub count: u64,
}

/// Zero-filled buckets for every day in the window, keyed `%m-%d`,
/// ascending. Always exactly `ACTIVITY_WINDOW_DAYS + 1` points: a day
/// with no queries is legitimately zero, not missing.
pub fn zero_filled_buckets(today: NaiveDate) -> Vec<DailyCount> {
    let start = today - Days::new(ACTIVITY_WINDOW_DAYS);
    (0..=ACTIVITY_WINDOW_DAYS)
        .map(|offset| DailyCount {
            day: (start + Days::new(offset)).format("%m-%d").to_string(),
            allowed: 0,
            blocked: 0,
        })
        .collect()
}

/// Fold grouped store rows into the pre-built buckets. Groups for days
/// outside the window and `Local` groups are discarded.
pub fn fold_groups(buckets: &mut [DailyCount], groups: &[DailyGroup]) {
    for group in groups {
        let Some(bucket) = buckets.iter_mut().find(|b| b.day == group.day) else {
            continue;
        };
        match group.result {
            QueryResult::Allowed => bucket.allowed += group.count,
            QueryResult::Blocked => bucket.blocked += group.count,
            QueryResult::Local => {}
        }
    }
}
