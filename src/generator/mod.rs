//! Generator module - writes the static site using the built-in templates

mod feed;
mod sitemap;

pub use feed::{atom_feed, FeedItem};
pub use sitemap::{sitemap, SitemapEntry};

use anyhow::{Context as _, Result};
use chrono::Datelike;
use std::fs;
use std::path::PathBuf;
use tera::Context;
use walkdir::WalkDir;

use crate::content::{MarkdownRenderer, Record, Section};
use crate::helpers::format_date;
use crate::listing::{list_entries, sort_newest_first};
use crate::templates::{
    ConfigData, MenuItem, RecordData, SectionData, ShelfData, TemplateRenderer,
};
use crate::Folio;

/// Records of every section, as loaded for one build
#[derive(Debug, Clone, Default)]
pub struct SiteContent {
    pub blog: Vec<Record>,
    pub projects: Vec<Record>,
}

impl SiteContent {
    pub fn section(&self, section: Section) -> &[Record] {
        match section {
            Section::Blog => &self.blog,
            Section::Projects => &self.projects,
        }
    }
}

/// Static site generator
pub struct Generator {
    folio: Folio,
    renderer: TemplateRenderer,
    markdown: MarkdownRenderer,
    config_data: ConfigData,
    menu: Vec<MenuItem>,
}

impl Generator {
    /// Create a new generator
    pub fn new(folio: &Folio) -> Result<Self> {
        let renderer = TemplateRenderer::new(&folio.config)?;
        let markdown = MarkdownRenderer::new(&folio.config.highlight);
        let menu = folio
            .config
            .menu
            .iter()
            .map(|(name, path)| MenuItem {
                name: name.clone(),
                path: path.clone(),
            })
            .collect();

        Ok(Self {
            folio: folio.clone(),
            renderer,
            markdown,
            config_data: ConfigData::from(&folio.config),
            menu,
        })
    }

    /// Generate the entire site, returning the paths of the pages written
    pub fn generate(&self, content: &SiteContent) -> Result<Vec<SitemapEntry>> {
        fs::create_dir_all(&self.folio.public_dir)
            .with_context(|| format!("Failed to create {:?}", self.folio.public_dir))?;

        self.copy_static_assets()?;

        let mut pages = Vec::new();
        pages.push(self.generate_home(content)?);

        for section in Section::ALL {
            let mut records = content.section(section).to_vec();
            sort_newest_first(&mut records);

            pages.push(self.generate_section_page(section, &records)?);
            for record in &records {
                pages.push(self.generate_record_page(section, record)?);
            }

            if section == Section::Blog {
                self.generate_atom_feed(&records)?;
            }
        }

        if !self.folio.config.books.is_empty() {
            pages.push(self.generate_books_page()?);
        }

        self.write("sitemap.xml", &sitemap(&self.folio.config, &pages))?;

        tracing::info!("Generated {} pages", pages.len());
        Ok(pages)
    }

    /// Create a base context with common variables
    fn create_base_context(&self, current_path: &str) -> Context {
        let mut context = Context::new();
        context.insert("config", &self.config_data);
        context.insert("menu", &self.menu);
        context.insert("current_path", current_path);
        context.insert("current_year", &chrono::Local::now().year());
        context
    }

    /// Home page: introduction followed by the blog list
    fn generate_home(&self, content: &SiteContent) -> Result<SitemapEntry> {
        let entries = list_entries(
            Section::Blog,
            &content.blog,
            &self.folio.config.date_format,
        );

        let mut context = self.create_base_context("/");
        context.insert("entries", &entries);
        context.insert("show_dates", &true);

        let html = self.renderer.render("home.html", &context)?;
        self.write("index.html", &html)?;

        let lastmod = content.blog.iter().map(|r| r.published).max();
        Ok(SitemapEntry::new("/", lastmod))
    }

    /// List page of a section, e.g. /projects/
    fn generate_section_page(&self, section: Section, records: &[Record]) -> Result<SitemapEntry> {
        let entries = list_entries(section, records, &self.folio.config.date_format);
        let section_data = SectionData::from(section);

        let mut context = self.create_base_context(&section_data.href);
        context.insert("section", &section_data);
        context.insert("entries", &entries);
        context.insert("show_dates", &(section == Section::Blog));

        let html = self.renderer.render("section.html", &context)?;
        self.write(&format!("{}/index.html", section.route()), &html)?;

        let lastmod = records.iter().map(|r| r.published).max();
        Ok(SitemapEntry::new(section_data.href, lastmod))
    }

    /// Detail page of one record, e.g. /blog/hello-world/
    fn generate_record_page(&self, section: Section, record: &Record) -> Result<SitemapEntry> {
        let section_data = SectionData::from(section);
        let path = record_path(section, record);

        let mut context = self.create_base_context(&section_data.href);
        context.insert("section", &section_data);
        context.insert("record", &self.record_data(record)?);

        let html = self
            .renderer
            .render("record.html", &context)
            .with_context(|| format!("Failed to render {:?}", record.source))?;
        self.write(
            &format!("{}/{}/index.html", section.route(), record.slug),
            &html,
        )?;

        Ok(SitemapEntry::new(path, Some(record.published)))
    }

    /// Reading list at /books/
    fn generate_books_page(&self) -> Result<SitemapEntry> {
        let books = &self.folio.config.books;
        let shelves: Vec<ShelfData> = [
            ("Currently Reading", &books.reading),
            ("Next Up", &books.next_up),
            ("Finished", &books.finished),
        ]
        .into_iter()
        .filter(|(_, list)| !list.is_empty())
        .map(|(heading, list)| ShelfData {
            heading: heading.to_string(),
            books: list.clone(),
        })
        .collect();

        let mut context = self.create_base_context("/books/");
        context.insert("shelves", &shelves);

        let html = self.renderer.render("books.html", &context)?;
        self.write("books/index.html", &html)?;

        Ok(SitemapEntry::new("/books/", None))
    }

    /// Generate Atom feed from blog records ordered newest first
    fn generate_atom_feed(&self, records: &[Record]) -> Result<()> {
        let mut items = Vec::new();
        for record in records.iter().take(self.folio.config.feed_limit) {
            items.push(FeedItem {
                record,
                path: record_path(Section::Blog, record),
                html: self.markdown.render(&record.content)?,
            });
        }

        self.write("atom.xml", &atom_feed(&self.folio.config, &items))?;
        tracing::info!("Generated atom.xml");
        Ok(())
    }

    fn record_data(&self, record: &Record) -> Result<RecordData> {
        Ok(RecordData {
            title: record.metadata.title.clone(),
            summary: record.metadata.summary.clone(),
            published_at: record.metadata.published_at.clone(),
            date: format_date(&record.published, &self.folio.config.date_format),
            image: record.metadata.image.clone(),
            content: self.markdown.render(&record.content)?,
        })
    }

    /// Write a file below the public directory
    fn write(&self, relative: &str, contents: &str) -> Result<PathBuf> {
        let output_path = self.folio.public_dir.join(relative);
        if let Some(parent) = output_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create dir {:?}", parent))?;
        }
        fs::write(&output_path, contents)
            .with_context(|| format!("Failed to write {:?}", output_path))?;
        tracing::debug!("Generated: {:?}", output_path);
        Ok(output_path)
    }

    /// Copy static assets (css, images, etc.) to public directory
    fn copy_static_assets(&self) -> Result<()> {
        let static_dir = &self.folio.static_dir;
        if !static_dir.exists() {
            return Ok(());
        }

        let mut copied = 0;
        for entry in WalkDir::new(static_dir).follow_links(true) {
            let entry = entry?;
            if !entry.file_type().is_file() {
                continue;
            }

            let relative = entry.path().strip_prefix(static_dir)?;
            let dest = self.folio.public_dir.join(relative);
            if let Some(parent) = dest.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::copy(entry.path(), &dest)
                .with_context(|| format!("Failed to copy {:?}", entry.path()))?;
            copied += 1;
        }

        tracing::debug!("Copied {} static files", copied);
        Ok(())
    }
}

/// Site path of a record's detail page
fn record_path(section: Section, record: &Record) -> String {
    format!("{}/", crate::listing::entry_href(section, &record.slug))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Book, SiteConfig};
    use std::path::Path;

    fn record(slug: &str, date: &str, body: &str) -> Record {
        let text = format!(
            "---\ntitle: {slug} title\npublishedAt: '{date}'\nsummary: {slug} summary\n---\n{body}"
        );
        Record::parse(slug, Path::new(slug), &text).unwrap()
    }

    fn site(base: &Path) -> Folio {
        let mut config = SiteConfig {
            author: "Ada".to_string(),
            bio: "Builds things".to_string(),
            url: "https://example.com".to_string(),
            ..Default::default()
        };
        config.books.reading.push(Book {
            title: "Truman".to_string(),
            author: "McCullough".to_string(),
        });
        Folio::with_config(base.to_path_buf(), config)
    }

    #[test]
    fn test_generate_site() {
        let tmp = tempfile::tempdir().unwrap();
        let folio = site(tmp.path());
        fs::create_dir_all(folio.static_dir.join("css")).unwrap();
        fs::write(folio.static_dir.join("css/style.css"), "body {}").unwrap();

        let content = SiteContent {
            blog: vec![
                record("older", "2023-01-01", "Old post"),
                record("hello-world", "2024-01-01", "# Hi\n\nNew post"),
            ],
            projects: vec![record("tool", "2022-05-05", "A tool")],
        };

        let pages = Generator::new(&folio).unwrap().generate(&content).unwrap();
        let paths: Vec<_> = pages.iter().map(|p| p.path.as_str()).collect();
        assert_eq!(
            paths,
            vec![
                "/",
                "/blog/",
                "/blog/hello-world/",
                "/blog/older/",
                "/projects/",
                "/projects/tool/",
                "/books/",
            ]
        );

        let public = &folio.public_dir;
        let home = fs::read_to_string(public.join("index.html")).unwrap();
        assert!(home.contains("<h1>Ada</h1>"));
        assert!(home.contains("Builds things"));
        let newer = home.find(r#"href="/blog/hello-world""#).unwrap();
        let older = home.find(r#"href="/blog/older""#).unwrap();
        assert!(newer < older);

        let projects = fs::read_to_string(public.join("projects/index.html")).unwrap();
        assert!(projects.contains(r#"href="/projects/tool""#));
        assert!(projects.contains("tool summary"));

        let post = fs::read_to_string(public.join("blog/hello-world/index.html")).unwrap();
        assert!(post.contains("<h1>Hi</h1>"));
        assert!(post.contains("January 1, 2024"));

        let books = fs::read_to_string(public.join("books/index.html")).unwrap();
        assert!(books.contains("Currently Reading"));
        assert!(!books.contains("Next Up"));

        assert!(public.join("atom.xml").exists());
        assert!(public.join("sitemap.xml").exists());
        assert_eq!(
            fs::read_to_string(public.join("css/style.css")).unwrap(),
            "body {}"
        );
    }

    #[test]
    fn test_generate_empty_sections() {
        let tmp = tempfile::tempdir().unwrap();
        let folio = site(tmp.path());
        let pages = Generator::new(&folio)
            .unwrap()
            .generate(&SiteContent::default())
            .unwrap();
        assert_eq!(pages.len(), 4);
        let blog = fs::read_to_string(folio.public_dir.join("blog/index.html")).unwrap();
        assert!(!blog.contains(r#"class="entry""#));
    }
}
