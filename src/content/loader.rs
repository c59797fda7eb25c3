//! Content loader - reads a section directory into records

use anyhow::Result;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use super::{ContentError, Record, Section};
use crate::Folio;

/// Loads the records of each section of a site
pub struct ContentLoader<'a> {
    folio: &'a Folio,
}

impl<'a> ContentLoader<'a> {
    /// Create a new content loader
    pub fn new(folio: &'a Folio) -> Self {
        Self { folio }
    }

    /// Load every record of a section, in file-name order
    pub fn load_section(&self, section: Section) -> Result<Vec<Record>> {
        let dir = self.folio.section_dir(section);
        let records = load_dir(&dir)?;
        tracing::debug!("Loaded {} {} records from {:?}", records.len(), section, dir);
        Ok(records)
    }
}

/// Read every content file directly inside `dir`.
///
/// Subdirectories and hidden files are skipped. Files are visited in
/// file-name order, so an unchanged directory always yields the same sequence.
pub fn load_dir(dir: &Path) -> Result<Vec<Record>, ContentError> {
    if !dir.is_dir() {
        return Err(ContentError::MissingDirectory {
            path: dir.to_path_buf(),
        });
    }

    let mut records = Vec::new();
    let mut seen: HashMap<String, PathBuf> = HashMap::new();

    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name()
    {
        let entry = entry.map_err(|e| ContentError::Io {
            path: e.path().unwrap_or(dir).to_path_buf(),
            source: e.into(),
        })?;
        let path = entry.path();
        if !entry.file_type().is_file() || !is_content_file(path) {
            continue;
        }

        let slug = match path.file_stem().and_then(|s| s.to_str()) {
            Some(stem) => stem.to_string(),
            None => continue,
        };
        if let Some(first) = seen.get(&slug) {
            return Err(ContentError::DuplicateSlug {
                slug,
                first: first.clone(),
                second: path.to_path_buf(),
            });
        }

        let text = fs::read_to_string(path).map_err(|source| ContentError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        records.push(Record::parse(&slug, path, &text)?);
        seen.insert(slug, path.to_path_buf());
    }

    Ok(records)
}

/// Check if a file holds markdown content
fn is_content_file(path: &Path) -> bool {
    let hidden = path
        .file_name()
        .and_then(|n| n.to_str())
        .map(|n| n.starts_with('.'))
        .unwrap_or(true);
    if hidden {
        return false;
    }
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| matches!(e, "md" | "mdx" | "markdown"))
        .unwrap_or(false)
}
