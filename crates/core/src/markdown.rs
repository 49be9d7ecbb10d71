//! HTML to Markdown conversion and cleanup.
//!
//! The cleaned, filtered subtree is serialized to HTML and handed to htmd
//! for conversion; a few regex passes then tidy the converter's output
//! (blank-line runs, space runs, leftover backslash escaping), and an
//! optional header block records the title, source URL, and extraction
//! time.

use chrono::Local;
use regex::Regex;

use crate::Result;

/// Configuration for Markdown output.
#[derive(Debug, Clone)]
pub struct MarkdownConfig {
    /// Prepend a header block with title, source, and extraction time.
    pub include_header: bool,
    /// Strip images before conversion.
    pub strip_images: bool,
}

impl Default for MarkdownConfig {
    fn default() -> Self {
        Self { include_header: true, strip_images: false }
    }
}

/// Converts extracted HTML to Markdown.
///
/// The input is expected to be the pipeline's output: already cleaned of
/// chrome and filtered to the requested language sections. Conversion never
/// fails on odd markup; at worst the body comes out empty.
pub fn convert_to_markdown(html: &str, title: &str, source_url: Option<&str>, config: &MarkdownConfig) -> Result<String> {
    let processed = if config.strip_images { strip_images(html) } else { html.to_string() };

    let body = tidy_markdown(&html_to_markdown(&processed));

    let mut output = String::new();
    if config.include_header {
        output.push_str(&header_block(title, source_url));
    }
    output.push_str(&body);
    if !output.ends_with('\n') {
        output.push('\n');
    }

    Ok(output)
}

/// Header block: H1 title, source link, extraction timestamp, rule.
fn header_block(title: &str, source_url: Option<&str>) -> String {
    let mut header = format!("# {}\n\n", title);

    if let Some(url) = source_url {
        header.push_str(&format!("**Source:** [{url}]({url})  \n"));
    }

    header.push_str(&format!(
        "**Extracted:** {}\n\n---\n\n",
        Local::now().format("%Y-%m-%d %H:%M:%S")
    ));

    header
}

/// Convert HTML to Markdown using the htmd crate.
#[cfg(feature = "markdown")]
fn html_to_markdown(html: &str) -> String {
    htmd::convert(html).unwrap_or_default()
}

/// Fallback plain-text conversion when the markdown feature is disabled.
#[cfg(not(feature = "markdown"))]
fn html_to_markdown(html: &str) -> String {
    let doc = scraper::Html::parse_document(html);
    doc.root_element().text().collect::<String>()
}

/// Post-conversion cleanup on the Markdown text.
fn tidy_markdown(markdown: &str) -> String {
    let collapsed_newlines = Regex::new(r"\n{3,}").unwrap().replace_all(markdown, "\n\n");
    let collapsed_spaces = Regex::new(r" {3,}")
        .unwrap()
        .replace_all(&collapsed_newlines, "  ");
    // The converter escapes defensively; extracted documentation reads
    // better with literal characters restored.
    let unescaped = Regex::new(r"\\(.)").unwrap().replace_all(&collapsed_spaces, "$1");
    unescaped.trim_start_matches('\n').to_string()
}

/// Drop all img tags from the HTML before conversion.
fn strip_images(html: &str) -> String {
    let mut output = String::new();
    let mut rewriter = lol_html::HtmlRewriter::new(
        lol_html::Settings {
            element_content_handlers: vec![lol_html::element!("img", |el| {
                el.remove();
                Ok(())
            })],
            ..Default::default()
        },
        |c: &[u8]| {
            output.push_str(&String::from_utf8_lossy(c));
        },
    );

    if rewriter.write(html.as_bytes()).is_err() {
        return html.to_string();
    }
    if rewriter.end().is_err() {
        return html.to_string();
    }

    if output.is_empty() { html.to_string() } else { output }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bare_config() -> MarkdownConfig {
        MarkdownConfig { include_header: false, strip_images: false }
    }

    #[test]
    fn test_basic_conversion() {
        let html = "<h2>Setup</h2><p>Install the SDK.</p>";
        let markdown = convert_to_markdown(html, "Guide", None, &bare_config()).unwrap();
        assert!(markdown.contains("## Setup"));
        assert!(markdown.contains("Install the SDK."));
    }

    #[test]
    fn test_code_blocks_become_fences() {
        let html = "<pre><code>let app = init()</code></pre>";
        let markdown = convert_to_markdown(html, "Guide", None, &bare_config()).unwrap();
        assert!(markdown.contains("```"));
        assert!(markdown.contains("let app = init()"));
    }

    #[test]
    fn test_links_survive() {
        let html = r#"<p>See the <a href="https://example.com/docs">reference</a>.</p>"#;
        let markdown = convert_to_markdown(html, "Guide", None, &bare_config()).unwrap();
        assert!(markdown.contains("[reference](https://example.com/docs)"));
    }

    #[test]
    fn test_header_block_contents() {
        let config = MarkdownConfig { include_header: true, strip_images: false };
        let markdown =
            convert_to_markdown("<p>Body.</p>", "Get started", Some("https://example.com/docs/start"), &config)
                .unwrap();

        assert!(markdown.starts_with("# Get started\n"));
        assert!(markdown.contains("**Source:** [https://example.com/docs/start](https://example.com/docs/start)"));
        assert!(markdown.contains("**Extracted:**"));
        assert!(markdown.contains("---"));
    }

    #[test]
    fn test_header_without_source_url() {
        let config = MarkdownConfig { include_header: true, strip_images: false };
        let markdown = convert_to_markdown("<p>Body.</p>", "Get started", None, &config).unwrap();
        assert!(!markdown.contains("**Source:**"));
        assert!(markdown.contains("**Extracted:**"));
    }

    #[test]
    fn test_strip_images() {
        let config = MarkdownConfig { include_header: false, strip_images: true };
        let html = r#"<p>Before <img src="diagram.png" alt="diagram"> after.</p>"#;
        let markdown = convert_to_markdown(html, "Guide", None, &config).unwrap();
        assert!(!markdown.contains("diagram.png"));
        assert!(markdown.contains("Before"));
        assert!(markdown.contains("after."));
    }

    #[test]
    fn test_blank_line_runs_collapse() {
        assert_eq!(tidy_markdown("a\n\n\n\n\nb"), "a\n\nb");
    }

    #[test]
    fn test_escaping_removed() {
        assert_eq!(tidy_markdown(r"1\. item"), "1. item");
    }
}
