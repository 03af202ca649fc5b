//! Locale-style relative phrases ("3 minutes ago", "2 hours from now").
//!
//! Phrases pick the largest whole unit that fits the distance between the
//! anchor and the target. Month and year use fixed 30- and 365-day lengths
//! for unit selection.

use chrono::{DateTime, TimeZone};

const MINUTE: u64 = 60;
const HOUR: u64 = 3600;
const DAY: u64 = 86_400;
const WEEK: u64 = 7 * DAY;
const MONTH: u64 = 30 * DAY;
const YEAR: u64 = 365 * DAY;

/// Phrase the distance from `now` back to `target` in the largest fitting
/// unit.
///
/// Past targets read "N units ago", future targets "N units from now". A
/// zero or sub-second distance reads "0 seconds ago".
///
/// # Examples
///
/// ```
/// use chrono::{Duration, TimeZone, Utc};
/// use expanded_dates::relative_phrase;
///
/// let now = Utc.with_ymd_and_hms(2026, 2, 18, 14, 30, 0).unwrap();
/// assert_eq!(relative_phrase(&now, &(now - Duration::minutes(3))), "3 minutes ago");
/// assert_eq!(relative_phrase(&now, &(now + Duration::hours(2))), "2 hours from now");
/// ```
pub fn relative_phrase<Tz: TimeZone>(now: &DateTime<Tz>, target: &DateTime<Tz>) -> String {
    let seconds = (now.clone() - target.clone()).num_seconds();
    let (count, unit) = largest_unit(seconds.unsigned_abs());
    let plural = if count == 1 { "" } else { "s" };
    let suffix = if seconds >= 0 { "ago" } else { "from now" };
    format!("{count} {unit}{plural} {suffix}")
}

/// Pick the largest whole unit that fits `seconds`.
fn largest_unit(seconds: u64) -> (u64, &'static str) {
    if seconds < MINUTE {
        (seconds, "second")
    } else if seconds < HOUR {
        (seconds / MINUTE, "minute")
    } else if seconds < DAY {
        (seconds / HOUR, "hour")
    } else if seconds < WEEK {
        (seconds / DAY, "day")
    } else if seconds < MONTH {
        (seconds / WEEK, "week")
    } else if seconds < YEAR {
        (seconds / MONTH, "month")
    } else {
        (seconds / YEAR, "year")
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────
