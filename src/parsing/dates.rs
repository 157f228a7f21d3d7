//! Date and time string formats used by the schedule sources.
//!
//! Event rows carry `MM/DD/YY` dates and `H:MM AM/PM` start times; the
//! all-star date and the highlight set use `DD/MM/YYYY`.

use chrono::{NaiveDate, NaiveTime};

use crate::error::{CalendarError, Result};

/// Parse an event date as exported in the schedule CSV (`MM/DD/YY`).
pub fn parse_event_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%m/%d/%y")
        .map_err(|e| CalendarError::parse("event date", s, e))
}

/// Parse a date in the `DD/MM/YYYY` convention used by the all-star date
/// and highlight sets.
pub fn parse_day_month_year(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%d/%m/%Y")
        .map_err(|e| CalendarError::parse("date", s, e))
}

/// Parse a clock time as exported in the schedule CSV (`H:MM AM/PM`).
pub fn parse_start_time(s: &str) -> Result<NaiveTime> {
    NaiveTime::parse_from_str(s.trim(), "%I:%M %p")
        .map_err(|e| CalendarError::parse("start time", s, e))
}

/// Format a date in the `DD/MM/YYYY` highlight-set convention.
pub fn format_day_month_year(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}
