//! Commit timestamp formatting
//!
//! Timestamps are kept in UTC everywhere else and only converted here.

use std::fmt::Display;

use chrono::{DateTime, Local, TimeDelta, TimeZone, Utc};

/// Absolute date format used in header date lines (e.g. "Tue Jan 30 12:00:00 2024")
pub const COMMIT_DATE_FORMAT: &str = "%a %b %d %H:%M:%S %Y";

const MINUTE: i64 = 60;
const HOUR: i64 = 60 * MINUTE;
const DAY: i64 = 24 * HOUR;
const MONTH: i64 = 30 * DAY;
const YEAR: i64 = 365 * DAY;

/// Format a timestamp in the local time zone
pub fn format_commit_date(time: DateTime<Utc>) -> String {
    format_commit_date_in(time, &Local)
}

/// Format a timestamp in the given time zone
pub fn format_commit_date_in<Tz>(time: DateTime<Utc>, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    time.with_timezone(tz).format(COMMIT_DATE_FORMAT).to_string()
}

/// Humanize the age of a timestamp (e.g. "3 days ago")
///
/// Uses the largest whole unit that fits:
///
/// | age                | text             |
/// |--------------------|------------------|
/// | under 1 minute     | "N seconds ago"  |
/// | under 1 hour       | "N minutes ago"  |
/// | under 1 day        | "N hours ago"    |
/// | under 30 days      | "N days ago"     |
/// | under 365 days     | "N months ago"   |
/// |                    | (at most 11)     |
/// | otherwise          | "N years ago"    |
///
/// Counts are floored. Negative ages (timestamps in the future) count as zero.
pub fn relative_age(age: TimeDelta) -> String {
    let secs = age.num_seconds().max(0);

    let (count, unit) = if secs < MINUTE {
        (secs, "second")
    } else if secs < HOUR {
        (secs / MINUTE, "minute")
    } else if secs < DAY {
        (secs / HOUR, "hour")
    } else if secs < MONTH {
        (secs / DAY, "day")
    } else if secs < YEAR {
        ((secs / MONTH).min(11), "month")
    } else {
        (secs / YEAR, "year")
    };

    if count == 1 {
        format!("1 {} ago", unit)
    } else {
        format!("{} {}s ago", count, unit)
    }
}

/// Humanize the age of `time` as seen from `now`
pub fn relative_age_since(time: DateTime<Utc>, now: DateTime<Utc>) -> String {
    relative_age(now - time)
}
