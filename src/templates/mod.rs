//! Built-in site templates using the Tera template engine
//!
//! Templates are embedded in the binary, so a site directory only needs
//! content, configuration and static assets.

use anyhow::Result;
use serde::Serialize;
use std::collections::HashMap;
use tera::{Context, Tera};

use crate::config::{Book, SiteConfig};
use crate::content::Section;
use crate::helpers::{escape_html, join_root};
use crate::listing::ListEntry;

/// Template renderer with the embedded site templates
pub struct TemplateRenderer {
    tera: Tera,
}

impl TemplateRenderer {
    /// Create a new renderer; links are resolved against the configured root
    pub fn new(config: &SiteConfig) -> Result<Self> {
        let mut tera = Tera::default();

        // Tera's escaping also rewrites `/`, which would mangle every href,
        // so text is escaped explicitly with the `esc` filter instead
        tera.autoescape_on(vec![]);

        tera.add_raw_templates(vec![
            ("layout.html", include_str!("site/layout.html")),
            ("home.html", include_str!("site/home.html")),
            ("section.html", include_str!("site/section.html")),
            ("record.html", include_str!("site/record.html")),
            ("books.html", include_str!("site/books.html")),
            // Partials
            ("partials/nav.html", include_str!("site/partials/nav.html")),
            (
                "partials/footer.html",
                include_str!("site/partials/footer.html"),
            ),
            ("partials/list.html", include_str!("site/partials/list.html")),
        ])?;

        let root = config.root.clone();
        tera.register_filter(
            "url_for",
            move |value: &tera::Value,
                  _args: &HashMap<String, tera::Value>|
                  -> tera::Result<tera::Value> {
                let path = tera::try_get_value!("url_for", "value", String, value);
                Ok(tera::Value::String(join_root(&root, &path)))
            },
        );
        tera.register_filter("esc", esc_filter);

        Ok(Self { tera })
    }

    /// Render a template with given context
    pub fn render(&self, template_name: &str, context: &Context) -> Result<String> {
        Ok(self.tera.render(template_name, context)?)
    }

    /// Render the link list of a section as an HTML fragment
    pub fn render_list(&self, section: Section, entries: &[ListEntry]) -> Result<String> {
        let mut context = Context::new();
        context.insert("entries", entries);
        context.insert("show_dates", &(section == Section::Blog));
        self.render("partials/list.html", &context)
    }
}

/// Tera filter: HTML-escape a string
fn esc_filter(
    value: &tera::Value,
    _args: &HashMap<String, tera::Value>,
) -> tera::Result<tera::Value> {
    let s = tera::try_get_value!("esc", "value", String, value);
    Ok(tera::Value::String(escape_html(&s)))
}

// Data structures for template context

#[derive(Debug, Clone, Serialize)]
pub struct ConfigData {
    pub title: String,
    pub description: String,
    pub author: String,
    pub bio: String,
    pub url: String,
    pub root: String,
    pub language: String,
}

impl From<&SiteConfig> for ConfigData {
    fn from(config: &SiteConfig) -> Self {
        Self {
            title: config.title.clone(),
            description: config.description.clone(),
            author: config.author.clone(),
            bio: config.bio.clone(),
            url: config.url.clone(),
            root: config.root.clone(),
            language: config.language.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct MenuItem {
    pub name: String,
    pub path: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct SectionData {
    pub title: String,
    pub route: String,
    pub href: String,
}

impl From<Section> for SectionData {
    fn from(section: Section) -> Self {
        Self {
            title: section.title().to_string(),
            route: section.route().to_string(),
            href: format!("/{}/", section.route()),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RecordData {
    pub title: String,
    pub summary: String,
    pub published_at: String,
    pub date: String,
    pub image: Option<String>,
    /// Rendered HTML body
    pub content: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ShelfData {
    pub heading: String,
    pub books: Vec<Book>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(slug: &str, title: &str) -> ListEntry {
        ListEntry {
            slug: slug.to_string(),
            href: format!("/blog/{}", slug),
            title: title.to_string(),
            summary: format!("{} summary", slug),
            published_at: "2024-01-01".to_string(),
            date: "January 1, 2024".to_string(),
        }
    }

    #[test]
    fn test_render_list_links() {
        let renderer = TemplateRenderer::new(&SiteConfig::default()).unwrap();
        let html = renderer
            .render_list(Section::Blog, &[entry("hello-world", "Hello <World>")])
            .unwrap();
        assert!(html.contains(r#"href="/blog/hello-world""#));
        assert!(html.contains("Hello &lt;World&gt;"));
        assert!(html.contains("hello-world summary"));
        assert!(html.contains("January 1, 2024"));
    }

    #[test]
    fn test_render_list_keeps_order() {
        let renderer = TemplateRenderer::new(&SiteConfig::default()).unwrap();
        let html = renderer
            .render_list(Section::Projects, &[entry("b", "Second"), entry("a", "First")])
            .unwrap();
        let second = html.find("Second").unwrap();
        let first = html.find("First").unwrap();
        assert!(second < first);
        assert!(!html.contains("entry-date"));
    }

    #[test]
    fn test_render_empty_list() {
        let renderer = TemplateRenderer::new(&SiteConfig::default()).unwrap();
        let html = renderer.render_list(Section::Blog, &[]).unwrap();
        assert!(!html.contains("<a "));
        assert!(html.contains(r#"class="entries""#));
    }

    #[test]
    fn test_root_prefix() {
        let config = SiteConfig {
            root: "/me/".to_string(),
            ..Default::default()
        };
        let renderer = TemplateRenderer::new(&config).unwrap();
        let html = renderer
            .render_list(Section::Blog, &[entry("x", "X")])
            .unwrap();
        assert!(html.contains(r#"href="/me/blog/x""#));
    }
}
