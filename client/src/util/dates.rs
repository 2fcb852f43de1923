//! Date helpers for booking bounds, list ordering, and display.
//!
//! The backend sends dates as plain strings in a few shapes (`2025-03-10`,
//! `2025-03-10T09:30:00`, RFC 3339 with offset). Everything here parses
//! leniently and never panics on bad input.

#[cfg(test)]
#[path = "dates_test.rs"]
mod dates_test;

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::config::DisplayLocale;

const NAIVE_DATE_TIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Today's local date as `YYYY-MM-DD`, the earliest bookable date.
#[must_use]
pub fn today_iso() -> String {
    chrono::Local::now().date_naive().format("%Y-%m-%d").to_string()
}

/// Parse a backend date or timestamp. Offsets are normalized to UTC; a bare
/// date is midnight.
#[must_use]
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.naive_utc());
    }
    if let Some(parsed) = NAIVE_DATE_TIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
    {
        return Some(parsed);
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
}

/// Ordering key in epoch milliseconds: creation timestamp, else appointment
/// date, else the epoch. Blank or unparseable values fall through.
#[must_use]
pub fn sort_timestamp(created_at: Option<&str>, date: Option<&str>) -> i64 {
    [created_at, date]
        .into_iter()
        .flatten()
        .find_map(parse_timestamp)
        .map_or(0, |ts| ts.and_utc().timestamp_millis())
}

/// Long date, e.g. `10 de marzo de 2025`. Unparseable input is returned as-is.
#[must_use]
pub fn format_date(raw: &str, locale: DisplayLocale) -> String {
    let Some(ts) = parse_timestamp(raw) else {
        return raw.to_owned();
    };
    let pattern = match locale {
        DisplayLocale::Spanish => "%-d de %B de %Y",
        DisplayLocale::English => "%B %-d, %Y",
    };
    ts.and_utc().format_localized(pattern, locale.chrono_locale()).to_string()
}

/// Short date with time, e.g. `10 mar 2025, 09:30`. Unparseable input is returned as-is.
#[must_use]
pub fn format_date_time(raw: &str, locale: DisplayLocale) -> String {
    let Some(ts) = parse_timestamp(raw) else {
        return raw.to_owned();
    };
    let pattern = match locale {
        DisplayLocale::Spanish => "%d %b %Y, %H:%M",
        DisplayLocale::English => "%b %d, %Y, %I:%M %p",
    };
    ts.and_utc().format_localized(pattern, locale.chrono_locale()).to_string()
}

/// Trim seconds from a backend time (`09:30:00` → `09:30`).
#[must_use]
pub fn short_time(raw: &str) -> &str {
    let raw = raw.trim();
    match raw.match_indices(':').nth(1) {
        Some((idx, _)) => &raw[..idx],
        None => raw,
    }
}
