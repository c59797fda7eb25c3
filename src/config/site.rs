//! Site configuration (_config.yml)

use anyhow::{Context, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    pub description: String,
    pub author: String,
    /// Short introduction shown on the home page
    pub bio: String,
    pub language: String,

    // URL
    pub url: String,
    pub root: String,

    // Directory
    pub content_dir: String,
    pub public_dir: String,
    pub static_dir: String,
    #[serde(default)]
    pub sections: SectionsConfig,

    // Writing
    #[serde(default)]
    pub highlight: HighlightConfig,
    pub date_format: String,

    // Feed
    pub feed_limit: usize,

    // Navigation, kept in declaration order
    #[serde(default = "default_menu")]
    pub menu: IndexMap<String, String>,

    #[serde(default)]
    pub books: BooksConfig,

    // Store any additional fields
    #[serde(flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}

fn default_menu() -> IndexMap<String, String> {
    let mut menu = IndexMap::new();
    menu.insert("Home".to_string(), "/".to_string());
    menu.insert("Blog".to_string(), "/blog/".to_string());
    menu.insert("Projects".to_string(), "/projects/".to_string());
    menu.insert("Books".to_string(), "/books/".to_string());
    menu
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "My Portfolio".to_string(),
            description: String::new(),
            author: "John Doe".to_string(),
            bio: String::new(),
            language: "en".to_string(),

            url: "http://example.com".to_string(),
            root: "/".to_string(),

            content_dir: "content".to_string(),
            public_dir: "public".to_string(),
            static_dir: "static".to_string(),
            sections: SectionsConfig::default(),

            highlight: HighlightConfig::default(),
            date_format: "MMMM D, YYYY".to_string(),

            feed_limit: 20,

            menu: default_menu(),
            books: BooksConfig::default(),
            extra: HashMap::new(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {:?}", path))?;
        let config: SiteConfig = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config {:?}", path))?;
        Ok(config)
    }
}

/// Content directories for each section, relative to `content_dir`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SectionsConfig {
    pub blog: String,
    pub projects: String,
}

impl Default for SectionsConfig {
    fn default() -> Self {
        Self {
            blog: "blog".to_string(),
            projects: "projects".to_string(),
        }
    }
}

/// Code block highlighting
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HighlightConfig {
    pub enable: bool,
    /// Any theme name bundled with syntect
    pub theme: String,
    pub line_number: bool,
}

impl Default for HighlightConfig {
    fn default() -> Self {
        Self {
            enable: true,
            theme: "base16-ocean.dark".to_string(),
            line_number: false,
        }
    }
}

/// The reading list rendered on /books/
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BooksConfig {
    pub reading: Vec<Book>,
    pub next_up: Vec<Book>,
    pub finished: Vec<Book>,
}

impl BooksConfig {
    pub fn is_empty(&self) -> bool {
        self.reading.is_empty() && self.next_up.is_empty() && self.finished.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub title: String,
    #[serde(default)]
    pub author: String,
}
