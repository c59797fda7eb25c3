//! Date helper functions

use chrono::{NaiveDateTime, TimeZone, Utc};

/// Format a date using a Moment.js-style format string
///
/// # Examples
/// ```ignore
/// format_date(&date, "YYYY-MM-DD") // -> "2024-01-15"
/// format_date(&date, "MMMM D, YYYY") // -> "January 15, 2024"
/// ```
pub fn format_date(date: &NaiveDateTime, format: &str) -> String {
    date.format(&moment_to_chrono_format(format)).to_string()
}

/// Format a date as RFC 3339 in UTC, as used by Atom and sitemaps
pub fn date_xml(date: &NaiveDateTime) -> String {
    Utc.from_utc_datetime(date).to_rfc3339()
}

/// Convert Moment.js format to chrono format
fn moment_to_chrono_format(format: &str) -> String {
    // Longest tokens first inside each group so "MM" never eats half of "MMMM"
    let replacements = [
        ("YYYY", "%Y"),
        ("YY", "%y"),
        ("MMMM", "%B"),
        ("MMM", "%b"),
        ("MM", "%m"),
        ("DDDD", "%j"),
        ("DD", "%d"),
        ("D", "%-d"),
        ("HH", "%H"),
        ("hh", "%I"),
        ("mm", "%M"),
        ("ss", "%S"),
        ("dddd", "%A"),
        ("ddd", "%a"),
        ("ZZ", "%z"),
    ];

    let mut result = format.to_string();

    for (from, to) in replacements {
        result = result.replace(from, to);
    }

    result
}
