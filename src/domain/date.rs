//! Calendar date parsing for submission date fields.

use chrono::{DateTime, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;

/// Zero-padded `YYYY-MM-DD`; chrono's `%Y-%m-%d` alone also takes `2020-1-1` and `+2020-01-01`.
static PLAIN_DATE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("Failed to compile date regex"));

/// Parse a submitted date as a real calendar date.
///
/// Accepts zero-padded `YYYY-MM-DD` or an RFC 3339 timestamp, whose date
/// part is kept. Anything else, including impossible dates such as
/// `2023-02-30`, is `None`.
pub fn parse_calendar_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if PLAIN_DATE_REGEX.is_match(raw) {
        return NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok();
    }

    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|dt| dt.date_naive())
}
