//! sitemap.xml

use chrono::NaiveDateTime;

use crate::config::SiteConfig;
use crate::helpers::{date_xml, escape_xml, full_url_for};

/// A page written by the generator
#[derive(Debug, Clone, PartialEq)]
pub struct SitemapEntry {
    /// Site path, e.g. `/blog/hello-world/`
    pub path: String,
    pub lastmod: Option<NaiveDateTime>,
}

impl SitemapEntry {
    pub fn new(path: impl Into<String>, lastmod: Option<NaiveDateTime>) -> Self {
        Self {
            path: path.into(),
            lastmod,
        }
    }

    fn to_xml(&self, config: &SiteConfig) -> String {
        let mut xml = String::from("<url>");
        xml.push_str(&format!(
            "<loc>{}</loc>",
            escape_xml(&full_url_for(config, &self.path))
        ));
        if let Some(lastmod) = &self.lastmod {
            xml.push_str(&format!("<lastmod>{}</lastmod>", date_xml(lastmod)));
        }
        xml.push_str("</url>");
        xml
    }
}

pub fn sitemap(config: &SiteConfig, entries: &[SitemapEntry]) -> String {
    let mut xml = String::from(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
    xml.push('\n');
    xml.push_str(r#"<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">"#);
    xml.push('\n');
    for entry in entries {
        xml.push_str("  ");
        xml.push_str(&entry.to_xml(config));
        xml.push('\n');
    }
    xml.push_str("</urlset>\n");
    xml
}
