//! folio-rs: a small static site generator for a personal portfolio
//!
//! Blog posts and projects are markdown files with a YAML front-matter
//! header. They are listed newest first and rendered to static HTML
//! through embedded Tera templates, next to a home page and a reading list.

pub mod commands;
pub mod config;
pub mod content;
pub mod generator;
pub mod helpers;
pub mod listing;
pub mod templates;

use anyhow::Result;
use std::path::{Path, PathBuf};

use content::Section;

/// Name of the site configuration file
pub const CONFIG_FILE: &str = "_config.yml";

/// A site on disk
#[derive(Debug, Clone)]
pub struct Folio {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: PathBuf,
    /// Content directory
    pub content_dir: PathBuf,
    /// Public (output) directory
    pub public_dir: PathBuf,
    /// Static assets copied verbatim
    pub static_dir: PathBuf,
}

impl Folio {
    /// Open a site directory, falling back to default settings when it has
    /// no `_config.yml`
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join(CONFIG_FILE);

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            tracing::debug!("No {} in {:?}, using defaults", CONFIG_FILE, base_dir);
            config::SiteConfig::default()
        };

        Ok(Self::with_config(base_dir, config))
    }

    /// Build a site from an already loaded configuration
    pub fn with_config(base_dir: PathBuf, config: config::SiteConfig) -> Self {
        let content_dir = base_dir.join(&config.content_dir);
        let public_dir = base_dir.join(&config.public_dir);
        let static_dir = base_dir.join(&config.static_dir);

        Self {
            config,
            base_dir,
            content_dir,
            public_dir,
            static_dir,
        }
    }

    /// Directory holding the content files of a section
    pub fn section_dir(&self, section: Section) -> PathBuf {
        let dir = match section {
            Section::Blog => &self.config.sections.blog,
            Section::Projects => &self.config.sections.projects,
        };
        self.content_dir.join(dir)
    }

    /// Generate the static site
    pub fn generate(&self) -> Result<()> {
        commands::generate::run(self)
    }

    /// Clean the public directory
    pub fn clean(&self) -> Result<()> {
        commands::clean::run(self)
    }

    /// Create a new content file
    pub fn new_record(&self, title: &str, section: Section) -> Result<PathBuf> {
        commands::new::create_record(self, title, section)
    }
}
