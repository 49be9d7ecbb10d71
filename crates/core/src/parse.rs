//! HTML parsing and CSS selection.
//!
//! This module provides the [`Document`] and [`Element`] types for parsing
//! HTML and querying the resulting tree with CSS selectors. Parsing is
//! tolerant: unclosed tags, stray markup, and other damage are recovered
//! from rather than reported, so `parse` only fails on selector misuse
//! later, never on bad input markup.
//!
//! The parsed document is read-only. Pipeline stages that mutate build an
//! owned [`DomTree`](crate::dom::DomTree) copy from a selected [`Element`]
//! via [`Element::to_tree`].
//!
//! # Example
//!
//! ```rust
//! use docsift_core::parse::Document;
//!
//! let html = r#"
//!     <html>
//!         <body>
//!             <h1>Title</h1>
//!             <p class="content">Paragraph</p>
//!         </body>
//!     </html>
//! "#;
//!
//! let doc = Document::parse(html).unwrap();
//! let title = doc.title();
//! let paragraphs = doc.select("p.content").unwrap();
//! ```

use scraper::{Html, Selector};

use crate::dom::DomTree;
use crate::{DocsiftError, Result};

/// Represents a parsed HTML document.
///
/// A Document wraps one fetched page and provides methods for querying
/// elements using CSS selectors. It is the immutable root for everything
/// one extraction run does; the locator, tagger, and filter all read from
/// it, and in-place mutation happens only on owned copies.
pub struct Document {
    html: Html,
}

impl Document {
    /// Parses HTML from a string.
    ///
    /// # Example
    ///
    /// ```rust
    /// use docsift_core::parse::Document;
    ///
    /// let doc = Document::parse("<html><body><h1>Title</h1></body></html>").unwrap();
    /// ```
    pub fn parse(html: &str) -> Result<Self> {
        let html = Html::parse_document(html);
        Ok(Self { html })
    }

    /// Gets the raw parsed representation.
    pub fn html(&self) -> &Html {
        &self.html
    }

    /// Selects all elements matching a CSS selector.
    ///
    /// # Errors
    ///
    /// Returns [`DocsiftError::HtmlParseError`] if the selector is invalid.
    pub fn select(&'_ self, selector: &str) -> Result<Vec<Element<'_>>> {
        let sel =
            Selector::parse(selector).map_err(|e| DocsiftError::HtmlParseError(format!("Invalid selector: {}", e)))?;

        Ok(self.html.select(&sel).map(|el| Element { element: el }).collect())
    }

    /// Selects the first element matching a CSS selector, if any.
    ///
    /// # Errors
    ///
    /// Returns [`DocsiftError::HtmlParseError`] if the selector is invalid.
    pub fn select_first(&'_ self, selector: &str) -> Result<Option<Element<'_>>> {
        let sel =
            Selector::parse(selector).map_err(|e| DocsiftError::HtmlParseError(format!("Invalid selector: {}", e)))?;

        Ok(self.html.select(&sel).next().map(|el| Element { element: el }))
    }

    /// Gets the content of the `<title>` element, if present.
    pub fn title(&self) -> Option<String> {
        let selector = Selector::parse("title").ok()?;
        self.html
            .select(&selector)
            .next()
            .map(|el| el.text().collect::<String>())
    }

    /// Gets all text content from the document.
    pub fn text_content(&self) -> String {
        self.html.root_element().text().collect()
    }
}

/// A wrapper around scraper's ElementRef.
///
/// Element represents a single node in the parsed document and provides
/// access to its attributes and text, plus [`Element::to_tree`] for making
/// an owned mutable copy of its subtree.
#[derive(Clone, Debug)]
pub struct Element<'a> {
    element: scraper::ElementRef<'a>,
}

impl<'a> Element<'a> {
    /// Gets the text content of this element.
    pub fn text(&self) -> String {
        self.element.text().collect()
    }

    /// Gets the value of an attribute, or `None` if absent.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.element.value().attr(name)
    }

    /// Gets the lowercase tag name of this element.
    pub fn tag_name(&self) -> String {
        self.element.value().name().to_lowercase()
    }

    /// Class attribute tokens of this element.
    pub fn classes(&self) -> Vec<&str> {
        self.element.value().classes().collect()
    }

    /// Builds an owned [`DomTree`] copy of this element's subtree.
    ///
    /// The copy is independent: mutating it never affects the source
    /// document or any other copy built from it.
    pub fn to_tree(&self) -> DomTree {
        DomTree::from_element(self.element)
    }
}
