// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared helpers for calendar-date parsing and formatting.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Date-only layouts accepted in the `Date` column and query parameters.
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%m/%d/%Y", "%Y/%m/%d"];

/// Date-time layouts whose time component is discarded.
const DATE_TIME_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%m/%d/%Y %H:%M:%S"];

/// Parse a calendar date, dropping any time-of-day component.
///
/// Returns `None` for blank or unrecognized input.
pub fn parse_calendar_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(raw, fmt).ok())
        .or_else(|| {
            DATE_TIME_FORMATS
                .iter()
                .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
                .map(|dt| dt.date())
        })
        .or_else(|| {
            DateTime::parse_from_rfc3339(raw)
                .ok()
                .map(|dt| dt.date_naive())
        })
}

/// Format a date as ISO 8601 (`YYYY-MM-DD`).
pub fn format_iso_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_iso_and_us_dates() {
        assert_eq!(parse_calendar_date("2024-01-02"), Some(ymd(2024, 1, 2)));
        assert_eq!(parse_calendar_date("4/12/2016"), Some(ymd(2016, 4, 12)));
        assert_eq!(parse_calendar_date("2016/04/12"), Some(ymd(2016, 4, 12)));
    }

    #[test]
    fn test_parse_drops_time_component() {
        assert_eq!(
            parse_calendar_date("2024-01-02 23:59:59"),
            Some(ymd(2024, 1, 2))
        );
        assert_eq!(
            parse_calendar_date("2024-01-02T08:00:00Z"),
            Some(ymd(2024, 1, 2))
        );
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(parse_calendar_date(""), None);
        assert_eq!(parse_calendar_date("   "), None);
        assert_eq!(parse_calendar_date("yesterday"), None);
        assert_eq!(parse_calendar_date("2024-13-01"), None);
    }

    #[test]
    fn test_format_iso_date() {
        assert_eq!(format_iso_date(ymd(2024, 1, 2)), "2024-01-02");
    }
}
