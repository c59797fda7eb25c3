//! Front-matter parsing

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Raw front-matter of a content file. Every field is optional here;
/// required fields are enforced when the record is built.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FrontMatter {
    pub title: Option<String>,
    #[serde(rename = "publishedAt", alias = "date")]
    pub published_at: Option<String>,
    pub summary: Option<String>,
    pub image: Option<String>,

    /// Additional custom fields
    #[serde(flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}

impl FrontMatter {
    /// Split a content file into its front-matter and body.
    ///
    /// A file without a closed `---` block has no front-matter and the whole
    /// text is the body.
    pub fn parse(content: &str) -> Result<(Self, &str), serde_yaml::Error> {
        let content = content.trim_start_matches('\u{feff}').trim_start();

        let Some(rest) = content.strip_prefix("---") else {
            return Ok((FrontMatter::default(), content));
        };
        let rest = rest.trim_start_matches([' ', '\t']);
        let Some(rest) = rest
            .strip_prefix("\r\n")
            .or_else(|| rest.strip_prefix('\n'))
        else {
            // `---something` on the first line is not a fence
            return Ok((FrontMatter::default(), content));
        };

        let Some((yaml, body)) = split_closing_fence(rest) else {
            return Ok((FrontMatter::default(), content));
        };
        let body = body.trim_start_matches(['\n', '\r']);

        if yaml.trim().is_empty() {
            return Ok((FrontMatter::default(), body));
        }

        let fm = serde_yaml::from_str::<FrontMatter>(yaml)?;
        Ok((fm, body))
    }
}

/// Find the line that is exactly `---` and split around it, dropping the
/// fence line and its line ending.
fn split_closing_fence(rest: &str) -> Option<(&str, &str)> {
    let mut start = 0;
    loop {
        let newline = rest[start..].find('\n').map(|i| start + i);
        let line = &rest[start..newline.unwrap_or(rest.len())];
        if line.trim_end() == "---" {
            let body = newline.map_or("", |pos| &rest[pos + 1..]);
            return Some((&rest[..start], body));
        }
        start = newline? + 1;
    }
}

/// Parse a publication date in any of the accepted formats.
///
/// Values with an offset are normalized to UTC; values without one are taken
/// as UTC, and date-only values mean midnight.
pub fn parse_date_string(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.naive_utc());
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S%z", "%Y-%m-%d %H:%M:%S %z"] {
        if let Ok(dt) = DateTime::parse_from_str(s, fmt) {
            return Some(dt.naive_utc());
        }
    }

    let datetime_formats = [
        "%Y-%m-%d %H:%M:%S",
        "%Y/%m/%d %H:%M:%S",
        "%Y-%m-%d %H:%M",
        "%Y/%m/%d %H:%M",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%dT%H:%M",
    ];
    for fmt in datetime_formats {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt);
        }
    }

    for fmt in ["%Y-%m-%d", "%Y/%m/%d"] {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return d.and_hms_opt(0, 0, 0);
        }
    }

    None
}
