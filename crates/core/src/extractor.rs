//! Main extraction API.
//!
//! This module provides the primary entry point for turning one fetched
//! documentation page into Markdown. The pipeline is: parse, inventory
//! language tabs, locate the content region, excise unwanted language
//! sections, remove chrome, convert. The main type is [`DocExtractor`],
//! with [`extract`] and [`fetch_and_extract`] as one-call conveniences.
//!
//! # Example
//!
//! ```rust
//! use docsift_core::extractor::extract;
//!
//! let html = "<html><head><title>Setup | DevPortal</title></head>\
//!             <body><main><p>Install the SDK.</p></main></body></html>";
//! let result = extract(html).unwrap();
//! assert_eq!(result.title, "Setup");
//! ```

use std::collections::BTreeSet;

use regex::Regex;
use serde::Serialize;
use url::Url;

use crate::clean::{ChromePatterns, clean};
use crate::filename::{derive_filename, fallback_filename};
use crate::filter::filter_languages;
use crate::lang::{self, Language};
use crate::locate::{LocatorConfig, locate};
use crate::markdown::{MarkdownConfig, convert_to_markdown};
use crate::parse::Document;
use crate::{DocsiftError, Result};

/// Configuration for one extractor instance.
#[derive(Debug, Clone, Default)]
pub struct ExtractorConfig {
    /// Language tabs to keep. Empty means no filtering.
    pub keep: BTreeSet<Language>,
    /// Selector table for content location.
    pub locator: LocatorConfig,
    /// Chrome removal lists.
    pub chrome: ChromePatterns,
    /// Markdown output options.
    pub markdown: MarkdownConfig,
}

impl ExtractorConfig {
    /// Creates a new builder for ExtractorConfig.
    ///
    /// # Example
    ///
    /// ```rust
    /// use docsift_core::extractor::ExtractorConfig;
    /// use docsift_core::lang::Language;
    ///
    /// let config = ExtractorConfig::builder()
    ///     .keep([Language::Kotlin])
    ///     .include_header(false)
    ///     .build();
    /// ```
    pub fn builder() -> ExtractorConfigBuilder {
        ExtractorConfigBuilder::new()
    }
}

/// Builder for [`ExtractorConfig`].
pub struct ExtractorConfigBuilder {
    config: ExtractorConfig,
}

impl ExtractorConfigBuilder {
    /// Creates a new builder with default values.
    pub fn new() -> Self {
        Self { config: ExtractorConfig::default() }
    }

    /// Sets the language tabs to keep.
    pub fn keep(mut self, languages: impl IntoIterator<Item = Language>) -> Self {
        self.config.keep = languages.into_iter().collect();
        self
    }

    /// Replaces the locator selector table.
    pub fn locator(mut self, locator: LocatorConfig) -> Self {
        self.config.locator = locator;
        self
    }

    /// Replaces the chrome removal lists.
    pub fn chrome(mut self, chrome: ChromePatterns) -> Self {
        self.config.chrome = chrome;
        self
    }

    /// Sets whether the Markdown output carries the header block.
    pub fn include_header(mut self, value: bool) -> Self {
        self.config.markdown.include_header = value;
        self
    }

    /// Sets whether images are stripped from the output.
    pub fn strip_images(mut self, value: bool) -> Self {
        self.config.markdown.strip_images = value;
        self
    }

    /// Builds the config.
    pub fn build(self) -> ExtractorConfig {
        self.config
    }
}

impl Default for ExtractorConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// The result of extracting one documentation page.
#[derive(Debug, Clone, Serialize)]
pub struct Extraction {
    /// Page title with site branding stripped.
    pub title: String,

    /// Final Markdown text.
    pub markdown: String,

    /// Every language tab the full page mentions.
    pub detected: BTreeSet<Language>,

    /// The keep set this extraction was run with.
    pub kept: BTreeSet<Language>,

    /// Selector that won content location ("body" for the fallback).
    pub selector: &'static str,

    /// Printable characters in the cleaned, filtered content.
    pub content_chars: usize,

    /// Derived output filename.
    pub filename: String,

    /// Source URL if known.
    pub source_url: Option<String>,
}

impl Extraction {
    /// Gets the extraction as structured JSON.
    pub fn to_json(&self) -> Result<serde_json::Value> {
        serde_json::to_value(self).map_err(|e| DocsiftError::HtmlParseError(e.to_string()))
    }
}

/// Runs the extraction pipeline with a fixed configuration.
///
/// # Example
///
/// ```rust
/// use docsift_core::extractor::{DocExtractor, ExtractorConfig};
/// use docsift_core::lang::Language;
///
/// let config = ExtractorConfig::builder().keep([Language::Web]).build();
/// let extractor = DocExtractor::with_config(config);
/// ```
pub struct DocExtractor {
    config: ExtractorConfig,
}

impl DocExtractor {
    /// Creates an extractor with default settings (no language filtering).
    pub fn new() -> Self {
        Self { config: ExtractorConfig::default() }
    }

    /// Creates an extractor with a custom configuration.
    pub fn with_config(config: ExtractorConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Extracts one page.
    ///
    /// `source_url` feeds the Markdown header and the derived filename;
    /// pass `None` for file or stdin input, which falls back to a title
    /// slug. The parsed source document is never mutated; all deletion
    /// happens on an owned copy of the located region.
    pub fn extract(&self, html: &str, source_url: Option<&str>) -> Result<Extraction> {
        let doc = Document::parse(html)?;
        let title = extract_title(&doc);
        let detected = lang::detect(&doc);

        let located = locate(&doc, &self.config.locator, &self.config.chrome)?;
        let mut tree = located.tree;

        filter_languages(&mut tree, &self.config.keep);
        clean(&mut tree, &self.config.chrome);

        let content_chars = tree.printable_len(tree.root());
        let content_html = tree.to_html(tree.root());
        let markdown = convert_to_markdown(&content_html, &title, source_url, &self.config.markdown)?;

        let filename = match source_url.and_then(|s| Url::parse(s).ok()) {
            Some(url) => derive_filename(&url, &title, &self.config.keep),
            None => fallback_filename(&title, &self.config.keep),
        };

        Ok(Extraction {
            title,
            markdown,
            detected,
            kept: self.config.keep.clone(),
            selector: located.selector,
            content_chars,
            filename,
            source_url: source_url.map(|s| s.to_string()),
        })
    }

    /// Fetches a URL and extracts it in one step.
    #[cfg(feature = "fetch")]
    pub async fn fetch_and_extract(&self, url: &str, fetch: &crate::fetch::FetchConfig) -> Result<Extraction> {
        let html = crate::fetch::fetch_url(url, fetch).await?;
        self.extract(&html, Some(url))
    }
}

impl Default for DocExtractor {
    fn default() -> Self {
        Self::new()
    }
}

/// Extracts a page with default settings.
pub fn extract(html: &str) -> Result<Extraction> {
    DocExtractor::new().extract(html, None)
}

/// Fetches and extracts a page with default settings.
#[cfg(feature = "fetch")]
pub async fn fetch_and_extract(url: &str) -> Result<Extraction> {
    DocExtractor::new()
        .fetch_and_extract(url, &crate::fetch::FetchConfig::default())
        .await
}

/// Page title with trailing `| Site` branding stripped, falling back to the
/// first `h1`, then a fixed default.
fn extract_title(doc: &Document) -> String {
    if let Some(title) = doc.title() {
        let trimmed = Regex::new(r"\s*\|[^|]*$")
            .unwrap()
            .replace(title.trim(), "")
            .to_string();
        if !trimmed.is_empty() {
            return trimmed;
        }
    }

    if let Ok(Some(h1)) = doc.select_first("h1") {
        let text = h1.text();
        let text = text.trim();
        if !text.is_empty() {
            return text.to_string();
        }
    }

    "Documentation".to_string()
}
