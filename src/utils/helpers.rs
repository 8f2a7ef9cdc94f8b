//! Small string and date helpers shared across the crate.

use crate::utils::error::{Result, ScaffoldError};
use chrono::{DateTime, NaiveDate, TimeZone, Utc};

/// Base URL of the backing API. Not requested by anything yet.
pub const API_URL: &str = "https://api.example.com";

/// Formats the UTC calendar date of `date` as `YYYY-MM-DD`.
pub fn format_date<Tz: TimeZone>(date: &DateTime<Tz>) -> String {
    date.with_timezone(&Utc).format("%Y-%m-%d").to_string()
}

/// Parses an RFC 3339 timestamp, or a bare `YYYY-MM-DD` date taken as UTC midnight.
pub fn parse_date(value: &str) -> Result<DateTime<Utc>> {
    let trimmed = value.trim();

    if let Ok(parsed) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(parsed.with_timezone(&Utc));
    }

    match NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        Ok(date) => date
            .and_hms_opt(0, 0, 0)
            .map(|naive| naive.and_utc())
            .ok_or_else(|| ScaffoldError::InvalidDate {
                value: value.to_string(),
                reason: "date has no midnight".to_string(),
            }),
        Err(e) => Err(ScaffoldError::InvalidDate {
            value: value.to_string(),
            reason: e.to_string(),
        }),
    }
}

/// Upper-cases the first character and leaves the rest untouched.
///
/// Empty input yields an empty string. Characters whose upper case form
/// spans several code points (`ß` -> `SS`) expand accordingly.
pub fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
