//! Site sections backed by a content directory

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// A content section. Each record of a section is published under
/// `/{route}/{slug}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Blog,
    Projects,
}

impl Section {
    pub const ALL: [Section; 2] = [Section::Blog, Section::Projects];

    /// URL path segment
    pub fn route(self) -> &'static str {
        match self {
            Section::Blog => "blog",
            Section::Projects => "projects",
        }
    }

    /// Heading of the section's list page
    pub fn title(self) -> &'static str {
        match self {
            Section::Blog => "Blog",
            Section::Projects => "Projects",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.route())
    }
}

impl FromStr for Section {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "blog" | "post" | "posts" => Ok(Section::Blog),
            "project" | "projects" => Ok(Section::Projects),
            _ => anyhow::bail!("Unknown section: {}. Available: blog, projects", s),
        }
    }
}
