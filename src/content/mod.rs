//! Content module - records, front-matter and markdown processing

mod error;
mod frontmatter;
pub mod loader;
mod markdown;
mod record;
mod section;

pub use error::ContentError;
pub use frontmatter::{parse_date_string, FrontMatter};
pub use loader::{load_dir, ContentLoader};
pub use markdown::MarkdownRenderer;
pub use record::{Metadata, Record};
pub use section::Section;
