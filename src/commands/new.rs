//! Create a new blog post or project

use anyhow::{Context, Result};
use serde::Serialize;
use std::fs;
use std::path::PathBuf;

use crate::content::Section;
use crate::Folio;

/// Front-matter written into a new content file
#[derive(Serialize)]
struct Scaffold<'a> {
    title: &'a str,
    #[serde(rename = "publishedAt")]
    published_at: String,
    summary: &'a str,
}

/// Create `<section dir>/<slugified title>.md`, returning its path
pub fn create_record(folio: &Folio, title: &str, section: Section) -> Result<PathBuf> {
    let slug = slug::slugify(title);
    if slug.is_empty() {
        anyhow::bail!("Cannot derive a file name from title {:?}", title);
    }

    let target_dir = folio.section_dir(section);
    fs::create_dir_all(&target_dir)
        .with_context(|| format!("Failed to create {:?}", target_dir))?;

    let file_path = target_dir.join(format!("{}.md", slug));
    if file_path.exists() {
        anyhow::bail!("File already exists: {:?}", file_path);
    }

    let scaffold = Scaffold {
        title,
        published_at: chrono::Local::now().format("%Y-%m-%d").to_string(),
        summary: title,
    };
    let content = format!("---\n{}---\n\n", serde_yaml::to_string(&scaffold)?);

    fs::write(&file_path, content)?;
    tracing::info!("Created: {:?}", file_path);

    Ok(file_path)
}
