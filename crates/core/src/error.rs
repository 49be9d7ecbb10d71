//! Error types for docsift operations.
//!
//! This module defines the main error type [`DocsiftError`] which represents
//! all possible errors that can occur during fetching, parsing, and
//! extraction.
//!
//! # Example
//!
//! ```rust
//! use docsift_core::{DocsiftError, Result};
//!
//! fn extract_page(html: &str) -> Result<String> {
//!     if html.is_empty() {
//!         return Err(DocsiftError::NoBody);
//!     }
//!     // ... extraction logic
//!     # Ok(String::new())
//! }
//! ```

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for documentation extraction operations.
///
/// The tree-level stages (locate, clean, tag, filter) degrade gracefully and
/// never surface errors of their own; every variant here belongs to a
/// boundary concern — HTTP, file I/O, URL handling, or a document with no
/// `<body>` to fall back to.
#[derive(Error, Debug)]
pub enum DocsiftError {
    /// HTTP request errors from reqwest.
    ///
    /// Wraps network errors, DNS failures, connection issues, and non-2xx
    /// response statuses.
    #[cfg(feature = "fetch")]
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Request timeout.
    ///
    /// Returned when an HTTP request exceeds the configured timeout duration.
    #[error("Request timed out after {timeout} seconds")]
    Timeout { timeout: u64 },

    /// Invalid URL provided.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// HTML parsing errors.
    ///
    /// Returned when a CSS selector is invalid or extracted markup cannot be
    /// re-parsed. Malformed input documents do NOT produce this error; the
    /// parser recovers from unclosed tags and similar damage.
    #[error("Failed to parse HTML: {0}")]
    HtmlParseError(String),

    /// The document has no `<body>` element.
    ///
    /// The content locator falls back to the body when no selector candidate
    /// qualifies, so this is the only way location can fail.
    #[error("Document has no body element")]
    NoBody,

    /// A language name that matches no known tag or variant.
    ///
    /// Callers treat this as a warning and drop the name from the keep set
    /// rather than aborting the extraction.
    #[error("Unknown language: {0}")]
    UnknownLanguage(String),

    /// File not found.
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    /// File read/write errors.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Result type alias for DocsiftError.
pub type Result<T> = std::result::Result<T, DocsiftError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DocsiftError::InvalidUrl("not a url".to_string());
        assert!(err.to_string().contains("Invalid URL"));
    }

    #[test]
    fn test_timeout_error() {
        let err = DocsiftError::Timeout { timeout: 30 };
        assert!(err.to_string().contains("30"));
    }

    #[test]
    fn test_unknown_language_error() {
        let err = DocsiftError::UnknownLanguage("cobol".to_string());
        assert!(err.to_string().contains("cobol"));
    }
}
