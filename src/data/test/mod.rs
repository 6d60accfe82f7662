use chrono::{DateTime, TimeZone, Utc};

mod bookmark;
mod link_failure;

/// Whole-second UTC timestamp `minutes` after 2024-01-01 00:00.
fn at_minute(minutes: i64) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap() + chrono::Duration::minutes(minutes)
}
