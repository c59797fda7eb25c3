//! Markdown rendering with syntax highlighting

use anyhow::Result;
use pulldown_cmark::{html, CodeBlockKind, CowStr, Event, Options, Parser, Tag, TagEnd};
use syntect::highlighting::{Theme, ThemeSet};
use syntect::html::highlighted_html_for_string;
use syntect::parsing::SyntaxSet;

use crate::config::HighlightConfig;
use crate::helpers::escape_html;

/// Markdown renderer with syntax highlighting
pub struct MarkdownRenderer {
    syntax_set: SyntaxSet,
    theme: Option<Theme>,
    line_numbers: bool,
}

impl MarkdownRenderer {
    /// Create a renderer from the site's highlight settings
    pub fn new(config: &HighlightConfig) -> Self {
        let theme = if config.enable {
            let mut themes = ThemeSet::load_defaults().themes;
            let theme = themes.remove(&config.theme);
            if theme.is_none() {
                tracing::warn!(
                    "Unknown highlight theme {:?}, code blocks will not be highlighted",
                    config.theme
                );
            }
            theme
        } else {
            None
        };

        Self {
            syntax_set: SyntaxSet::load_defaults_newlines(),
            theme,
            line_numbers: config.line_number,
        }
    }

    /// Render markdown to HTML
    pub fn render(&self, markdown: &str) -> Result<String> {
        // Front-matter is stripped by the loader, so no metadata blocks here
        let options = Options::ENABLE_TABLES
            | Options::ENABLE_FOOTNOTES
            | Options::ENABLE_STRIKETHROUGH
            | Options::ENABLE_TASKLISTS
            | Options::ENABLE_SMART_PUNCTUATION
            | Options::ENABLE_HEADING_ATTRIBUTES
            | Options::ENABLE_GFM;
        let parser = Parser::new_ext(markdown, options);

        let mut events: Vec<Event> = Vec::new();
        let mut code_block: Option<(Option<String>, String)> = None;

        for event in parser {
            match event {
                Event::Start(Tag::CodeBlock(kind)) => {
                    let lang = match kind {
                        CodeBlockKind::Fenced(info) => info
                            .split_whitespace()
                            .next()
                            .map(|lang| lang.to_string()),
                        CodeBlockKind::Indented => None,
                    };
                    code_block = Some((lang, String::new()));
                }
                Event::End(TagEnd::CodeBlock) => {
                    if let Some((lang, code)) = code_block.take() {
                        let highlighted = self.highlight_code(&code, lang.as_deref());
                        events.push(Event::Html(CowStr::from(highlighted)));
                    }
                }
                Event::Text(text) if code_block.is_some() => {
                    if let Some((_, code)) = code_block.as_mut() {
                        code.push_str(&text);
                    }
                }
                _ if code_block.is_some() => {}
                event => events.push(event),
            }
        }

        let mut html_output = String::new();
        html::push_html(&mut html_output, events.into_iter());

        Ok(html_output)
    }

    /// Highlight a code block
    fn highlight_code(&self, code: &str, lang: Option<&str>) -> String {
        let lang = lang.unwrap_or("text");

        let highlighted = self.theme.as_ref().and_then(|theme| {
            let syntax = self
                .syntax_set
                .find_syntax_by_token(lang)
                .unwrap_or_else(|| self.syntax_set.find_syntax_plain_text());
            highlighted_html_for_string(code, &self.syntax_set, syntax, theme).ok()
        });

        let class = escape_html(lang);
        match highlighted {
            Some(html) if self.line_numbers => add_line_numbers(&html, &class),
            Some(html) => format!(r#"<figure class="highlight {}">{}</figure>"#, class, html),
            None => format!(
                r#"<pre><code class="language-{}">{}</code></pre>"#,
                class,
                escape_html(code)
            ),
        }
    }
}

/// Wrap highlighted code in a table with a line-number gutter
fn add_line_numbers(code: &str, lang: &str) -> String {
    let gutter = (1..=code.lines().count())
        .map(|n| format!(r#"<span class="line-number">{}</span>"#, n))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        r#"<figure class="highlight {}"><table><tr><td class="gutter"><pre>{}</pre></td><td class="code">{}</td></tr></table></figure>"#,
        lang, gutter, code
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn renderer() -> MarkdownRenderer {
        MarkdownRenderer::new(&HighlightConfig::default())
    }

    #[test]
    fn test_render_basic_markdown() {
        let html = renderer().render("# Hello World\n\nThis is a test.").unwrap();
        assert!(html.contains("<h1>Hello World</h1>"));
        assert!(html.contains("<p>This is a test.</p>"));
    }

    #[test]
    fn test_render_code_block() {
        let html = renderer().render("```rust\nfn main() {}\n```").unwrap();
        assert!(html.contains(r#"class="highlight rust""#));
        assert!(!html.contains("```"));
    }

    #[test]
    fn test_highlighting_disabled_escapes_code() {
        let config = HighlightConfig {
            enable: false,
            ..Default::default()
        };
        let html = MarkdownRenderer::new(&config)
            .render("```html\n<b>x</b>\n```\n\nafter")
            .unwrap();
        assert!(html.contains(r#"<pre><code class="language-html">&lt;b&gt;x&lt;/b&gt;"#));
        assert!(html.contains("<p>after</p>"));
    }

    #[test]
    fn test_language_token_is_escaped() {
        let html = renderer().render("```a\"><i>x\ncode\n```").unwrap();
        assert!(html.contains(r#"class="highlight a&quot;&gt;&lt;i&gt;x""#));
        assert!(!html.contains("<i>x"));

        let config = HighlightConfig {
            enable: false,
            ..Default::default()
        };
        let html = MarkdownRenderer::new(&config)
            .render("```a\"><i>x\ncode\n```")
            .unwrap();
        assert!(html.contains(r#"class="language-a&quot;&gt;&lt;i&gt;x""#));
    }

    #[test]
    fn test_line_numbers() {
        let config = HighlightConfig {
            line_number: true,
            ..Default::default()
        };
        let html = MarkdownRenderer::new(&config)
            .render("```\na\nb\n```")
            .unwrap();
        assert!(html.contains(r#"<span class="line-number">2</span>"#));
    }
}
