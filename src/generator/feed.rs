//! Atom feed of the blog

use crate::config::SiteConfig;
use crate::content::Record;
use crate::helpers::{absolutize_urls, date_xml, escape_xml, full_url_for, strip_invalid_xml_chars};

/// A feed item: the record and its rendered HTML body
pub struct FeedItem<'a> {
    pub record: &'a Record,
    pub path: String,
    pub html: String,
}

/// Build `atom.xml` from items already ordered newest first
pub fn atom_feed(config: &SiteConfig, items: &[FeedItem<'_>]) -> String {
    let base_url = config.url.trim_end_matches('/');
    let home = full_url_for(config, "/");
    let updated = items
        .first()
        .map(|item| date_xml(&item.record.published))
        .unwrap_or_else(|| chrono::Utc::now().to_rfc3339());

    let mut feed = String::new();
    feed.push_str(r#"<?xml version="1.0" encoding="utf-8"?>"#);
    feed.push('\n');
    feed.push_str(r#"<feed xmlns="http://www.w3.org/2005/Atom">"#);
    feed.push('\n');
    feed.push_str(&format!("  <title>{}</title>\n", escape_xml(&config.title)));
    feed.push_str(&format!(
        "  <link href=\"{}\" rel=\"self\"/>\n",
        full_url_for(config, "/atom.xml")
    ));
    feed.push_str(&format!("  <link href=\"{}\"/>\n", home));
    feed.push_str(&format!("  <updated>{}</updated>\n", updated));
    feed.push_str(&format!("  <id>{}</id>\n", home));
    feed.push_str(&format!(
        "  <author><name>{}</name></author>\n",
        escape_xml(&config.author)
    ));

    for item in items.iter().take(config.feed_limit) {
        let link = full_url_for(config, &item.path);
        let metadata = &item.record.metadata;
        feed.push_str("  <entry>\n");
        feed.push_str(&format!("    <title>{}</title>\n", escape_xml(&metadata.title)));
        feed.push_str(&format!("    <link href=\"{}\"/>\n", link));
        feed.push_str(&format!("    <id>{}</id>\n", link));
        feed.push_str(&format!(
            "    <updated>{}</updated>\n",
            date_xml(&item.record.published)
        ));
        feed.push_str(&format!(
            "    <summary>{}</summary>\n",
            escape_xml(&metadata.summary)
        ));
        let content = strip_invalid_xml_chars(&absolutize_urls(&item.html, base_url));
        feed.push_str(&format!(
            "    <content type=\"html\"><![CDATA[{}]]></content>\n",
            content.replace("]]>", "]]]]><![CDATA[>")
        ));
        feed.push_str("  </entry>\n");
    }

    feed.push_str("</feed>\n");
    feed
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn record(slug: &str, date: &str) -> Record {
        let text = format!("---\ntitle: {slug} & co\npublishedAt: '{date}'\nsummary: s\n---\n");
        Record::parse(slug, Path::new(slug), &text).unwrap()
    }

    #[test]
    fn test_atom_feed() {
        let config = SiteConfig {
            url: "https://example.com".to_string(),
            feed_limit: 1,
            ..Default::default()
        };
        let new = record("new", "2024-02-01");
        let old = record("old", "2023-02-01");
        let items = vec![
            FeedItem {
                record: &new,
                path: "/blog/new/".to_string(),
                html: r#"<p><a href="/about">x</a></p>"#.to_string(),
            },
            FeedItem {
                record: &old,
                path: "/blog/old/".to_string(),
                html: String::new(),
            },
        ];

        let xml = atom_feed(&config, &items);
        assert!(xml.contains("<title>new &amp; co</title>"));
        assert!(xml.contains(r#"<link href="https://example.com/blog/new/"/>"#));
        assert!(xml.contains("<updated>2024-02-01T00:00:00+00:00</updated>"));
        assert!(xml.contains(r#"href="https://example.com/about""#));
        assert!(!xml.contains("old &amp; co"));
    }
}
