//! Helper functions shared by templates and the generator
//!
//! URL building, date formatting and text escaping.

mod date;
mod html;
mod url;

pub use date::*;
pub use html::*;
pub use url::*;
