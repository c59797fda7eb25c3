//! Errors raised while loading content

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContentError {
    #[error("Content directory not found: {}", path.display())]
    MissingDirectory { path: PathBuf },

    #[error("{}: missing required front-matter field `{field}`", file.display())]
    MalformedMetadata { file: PathBuf, field: &'static str },

    #[error("{}: invalid front-matter: {message}", file.display())]
    InvalidFrontMatter { file: PathBuf, message: String },

    #[error("{}: cannot parse publishedAt `{value}`", file.display())]
    InvalidDate { file: PathBuf, value: String },

    #[error("Duplicate slug `{slug}`: {} and {}", first.display(), second.display())]
    DuplicateSlug {
        slug: String,
        first: PathBuf,
        second: PathBuf,
    },

    #[error("Failed to read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
