//! Post date formatting.

use chrono::{DateTime, Datelike, NaiveDate};

fn parse_post_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.date_naive()))
}

/// Formats a post date for display in `locale`.
///
/// Chinese locales render `2024年1月5日`; others render `January 5, 2024`. Unparseable input is
/// returned as-is.
pub fn format_post_date(raw: &str, locale: &str) -> String {
    let Some(date) = parse_post_date(raw) else {
        return raw.to_string();
    };
    if locale.to_ascii_lowercase().starts_with("zh") {
        format!("{}年{}月{}日", date.year(), date.month(), date.day())
    } else {
        date.format("%B %-d, %Y").to_string()
    }
}
