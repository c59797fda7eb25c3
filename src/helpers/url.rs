//! URL helper functions

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::config::SiteConfig;

/// Characters left as-is inside a single path segment
const SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Prefix a site path with the configured root
///
/// # Examples
/// ```ignore
/// url_for(&config, "/css/style.css") // -> "/portfolio/css/style.css"
/// ```
pub fn url_for(config: &SiteConfig, path: &str) -> String {
    join_root(&config.root, path)
}

/// Same as [`url_for`], for callers that only hold the root
pub fn join_root(root: &str, path: &str) -> String {
    if path.starts_with("http://") || path.starts_with("https://") || path.starts_with("//") {
        return path.to_string();
    }

    let root = root.trim_end_matches('/');
    let path = path.trim_start_matches('/');

    if path.is_empty() {
        format!("{}/", root)
    } else {
        format!("{}/{}", root, path)
    }
}

/// Generate a full URL including the domain
///
/// # Examples
/// ```ignore
/// full_url_for(&config, "/blog/hello/") // -> "https://example.com/blog/hello/"
/// ```
pub fn full_url_for(config: &SiteConfig, path: &str) -> String {
    let base = config.url.trim_end_matches('/');
    format!("{}{}", base, url_for(config, path))
}

/// Percent-encode a value for use as one URL path segment
pub fn encode_segment(segment: &str) -> String {
    utf8_percent_encode(segment, SEGMENT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> SiteConfig {
        let mut config = SiteConfig::default();
        config.url = "https://example.com/".to_string();
        config.root = "/portfolio/".to_string();
        config
    }

    #[test]
    fn test_url_for() {
        let config = test_config();
        assert_eq!(url_for(&config, "/css/style.css"), "/portfolio/css/style.css");
        assert_eq!(url_for(&config, "/"), "/portfolio/");
        assert_eq!(url_for(&SiteConfig::default(), "/blog/a"), "/blog/a");
        assert_eq!(url_for(&config, "https://x.dev/a"), "https://x.dev/a");
    }

    #[test]
    fn test_full_url_for() {
        let config = test_config();
        assert_eq!(
            full_url_for(&config, "/blog/hello/"),
            "https://example.com/portfolio/blog/hello/"
        );
    }

    #[test]
    fn test_encode_segment() {
        assert_eq!(encode_segment("hello-world"), "hello-world");
        assert_eq!(encode_segment("my post"), "my%20post");
        assert_eq!(encode_segment("a/b"), "a%2Fb");
    }
}
