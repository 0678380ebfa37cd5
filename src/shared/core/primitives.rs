// Time primitives shared by every module.
//
// Notes
// - Times are epoch milliseconds (i64) everywhere in the crate.
// - Calendar dates are UTC days.

use chrono::{NaiveDate, Utc};

pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

/// Half-open `[start, end)` bounds of a UTC day in epoch milliseconds.
pub fn utc_day_bounds(date: NaiveDate) -> Option<(i64, i64)> {
    let start = date.and_hms_opt(0, 0, 0)?.and_utc().timestamp_millis();
    let end = date.succ_opt()?.and_hms_opt(0, 0, 0)?.and_utc().timestamp_millis();
    Some((start, end))
}

pub fn is_on_utc_day(timestamp: i64, date: NaiveDate) -> bool {
    utc_day_bounds(date).is_some_and(|(start, end)| (start..end).contains(&timestamp))
}
