//! List rendering - orders records newest first and turns them into links

use serde::Serialize;

use crate::content::{Record, Section};
use crate::helpers::{encode_segment, format_date};

/// One link in a section list
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListEntry {
    pub slug: String,
    /// Site-relative link target, `/{section}/{slug}`
    pub href: String,
    pub title: String,
    pub summary: String,
    /// `publishedAt` as written in the front-matter
    pub published_at: String,
    /// Publication date formatted for display
    pub date: String,
}

/// Sort records by publication date, most recent first.
///
/// The sort is stable: records with equal dates keep their input order.
pub fn sort_newest_first(records: &mut [Record]) {
    records.sort_by(|a, b| b.published.cmp(&a.published));
}

/// Link target of a record within its section
pub fn entry_href(section: Section, slug: &str) -> String {
    format!("/{}/{}", section.route(), encode_segment(slug))
}

/// Build the ordered entries of a section list without touching `records`
pub fn list_entries(section: Section, records: &[Record], date_format: &str) -> Vec<ListEntry> {
    let mut sorted: Vec<&Record> = records.iter().collect();
    sorted.sort_by(|a, b| b.published.cmp(&a.published));

    sorted
        .into_iter()
        .map(|record| ListEntry {
            slug: record.slug.clone(),
            href: entry_href(section, &record.slug),
            title: record.metadata.title.clone(),
            summary: record.metadata.summary.clone(),
            published_at: record.metadata.published_at.clone(),
            date: format_date(&record.published, date_format),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn record(slug: &str, date: &str) -> Record {
        let text = format!(
            "---\ntitle: {slug} title\npublishedAt: '{date}'\nsummary: {slug} summary\n---\n"
        );
        Record::parse(slug, Path::new(slug), &text).unwrap()
    }

    #[test]
    fn test_newer_record_first() {
        let records = vec![record("old", "2023-01-01"), record("new", "2024-01-01")];
        let entries = list_entries(Section::Blog, &records, "YYYY-MM-DD");
        let slugs: Vec<_> = entries.iter().map(|e| e.slug.as_str()).collect();
        assert_eq!(slugs, vec!["new", "old"]);
        assert_eq!(entries[0].date, "2024-01-01");
    }

    #[test]
    fn test_order_is_non_increasing() {
        let dates = [
            "2020-05-01",
            "2024-02-29",
            "2021-12-31 23:59",
            "2024-02-29T08:00:00",
            "2019/01/01",
            "2022-06-15",
        ];
        let records: Vec<_> = dates
            .iter()
            .enumerate()
            .map(|(i, d)| record(&format!("r{}", i), d))
            .collect();

        let entries = list_entries(Section::Projects, &records, "YYYY-MM-DD");
        assert_eq!(entries.len(), records.len());

        let published: Vec<_> = entries
            .iter()
            .map(|e| records.iter().find(|r| r.slug == e.slug).unwrap().published)
            .collect();
        assert!(published.windows(2).all(|w| w[0] >= w[1]));
    }

    #[test]
    fn test_equal_dates_keep_input_order() {
        let mut records = vec![
            record("b", "2024-03-01"),
            record("a", "2024-03-01"),
            record("c", "2024-04-01"),
            record("d", "2024-03-01"),
        ];
        let entries = list_entries(Section::Blog, &records, "YYYY");
        let slugs: Vec<_> = entries.iter().map(|e| e.slug.as_str()).collect();
        assert_eq!(slugs, vec!["c", "b", "a", "d"]);

        sort_newest_first(&mut records);
        let slugs: Vec<_> = records.iter().map(|r| r.slug.as_str()).collect();
        assert_eq!(slugs, vec!["c", "b", "a", "d"]);
    }

    #[test]
    fn test_link_targets() {
        let records = vec![record("hello-world", "2024-01-01")];
        let blog = list_entries(Section::Blog, &records, "YYYY");
        assert_eq!(blog[0].href, "/blog/hello-world");
        assert_eq!(blog[0].title, "hello-world title");
        assert_eq!(blog[0].summary, "hello-world summary");

        let projects = list_entries(Section::Projects, &records, "YYYY");
        assert_eq!(projects[0].href, "/projects/hello-world");
    }

    #[test]
    fn test_empty_input() {
        assert!(list_entries(Section::Blog, &[], "YYYY").is_empty());
        sort_newest_first(&mut []);
    }
}
