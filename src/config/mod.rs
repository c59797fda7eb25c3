//! Configuration module

mod site;

pub use site::Book;
pub use site::BooksConfig;
pub use site::HighlightConfig;
pub use site::SectionsConfig;
pub use site::SiteConfig;
