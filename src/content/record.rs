//! Post and project records

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use super::error::ContentError;
use super::frontmatter::{parse_date_string, FrontMatter};

/// Front-matter fields every content file must carry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    pub title: String,
    #[serde(rename = "publishedAt")]
    pub published_at: String,
    pub summary: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    /// Custom front-matter fields
    #[serde(flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}

/// A parsed content file: one blog post or one project
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Record {
    /// File stem, unique within its directory
    pub slug: String,

    pub metadata: Metadata,

    /// Raw markdown body
    pub content: String,

    /// `metadata.published_at` parsed, used for ordering
    #[serde(skip)]
    pub published: NaiveDateTime,

    /// File the record was read from
    #[serde(skip)]
    pub source: PathBuf,
}

impl Record {
    /// Build a record from the text of a content file.
    pub fn parse(slug: &str, source: &Path, text: &str) -> Result<Self, ContentError> {
        let (fm, body) =
            FrontMatter::parse(text).map_err(|e| ContentError::InvalidFrontMatter {
                file: source.to_path_buf(),
                message: e.to_string(),
            })?;

        let require = |value: Option<String>, field: &'static str| {
            value
                .filter(|v| !v.trim().is_empty())
                .ok_or_else(|| ContentError::MalformedMetadata {
                    file: source.to_path_buf(),
                    field,
                })
        };

        let title = require(fm.title, "title")?;
        let published_at = require(fm.published_at, "publishedAt")?;
        let summary = require(fm.summary, "summary")?;

        let published =
            parse_date_string(&published_at).ok_or_else(|| ContentError::InvalidDate {
                file: source.to_path_buf(),
                value: published_at.clone(),
            })?;

        Ok(Self {
            slug: slug.to_string(),
            metadata: Metadata {
                title,
                published_at,
                summary,
                image: fm.image,
                extra: fm.extra,
            },
            content: body.to_string(),
            published,
            source: source.to_path_buf(),
        })
    }
}
