//! Timestamp formatting and day rounding on `chrono` date-times.
//!
//! Rounding happens in the value's own time zone, so a `DateTime<Local>`
//! rounds to local midnight and a `DateTime<Utc>` to UTC midnight.

use chrono::{DateTime, Days, NaiveDate, TimeZone};

use crate::CoreError;

/// en_US medium date with short time, e.g. `Nov 27, 2015, 3:32 PM`.
const MEDIUM_TIMESTAMP_FORMAT: &str = "%b %-d, %Y, %-I:%M %p";

pub fn medium_timestamp<Tz>(value: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    value.format(MEDIUM_TIMESTAMP_FORMAT).to_string()
}

/// Midnight at the start of `value`'s calendar day.
pub fn start_of_day<Tz: TimeZone>(value: &DateTime<Tz>) -> Result<DateTime<Tz>, CoreError> {
    midnight(value.timezone(), value.date_naive())
}

/// Midnight at the start of the following calendar day. Always moves
/// forward, even when `value` is already midnight.
pub fn start_of_next_day<Tz: TimeZone>(
    value: &DateTime<Tz>,
) -> Result<DateTime<Tz>, CoreError> {
    let today = value.date_naive();
    let tomorrow = today
        .checked_add_days(Days::new(1))
        .ok_or_else(|| CoreError::DateOutOfRange(format!("day after {}", today)))?;
    midnight(value.timezone(), tomorrow)
}

// Midnight may fall in a DST gap; take the earliest instant that exists.
fn midnight<Tz: TimeZone>(tz: Tz, day: NaiveDate) -> Result<DateTime<Tz>, CoreError> {
    let naive = day
        .and_hms_opt(0, 0, 0)
        .ok_or_else(|| CoreError::DateOutOfRange(day.to_string()))?;
    if let Some(resolved) = tz.from_local_datetime(&naive).earliest() {
        return Ok(resolved);
    }
    // Skip forward past the gap an hour at a time.
    (1..=3)
        .filter_map(|hour| day.and_hms_opt(hour, 0, 0))
        .find_map(|later| tz.from_local_datetime(&later).earliest())
        .ok_or_else(|| CoreError::DateOutOfRange(format!("no local midnight on {}", day)))
}
