pub mod clean;
pub mod dom;
pub mod error;
pub mod extractor;
pub mod fetch;
pub mod filename;
pub mod filter;
pub mod lang;
pub mod locate;
pub mod markdown;
pub mod parse;

pub use clean::{ChromePatterns, ChromeSelector, clean};
#[doc(hidden)]
pub use dom::{DomTree, NodeData, NodeId};
pub use error::{DocsiftError, Result};
pub use extractor::{DocExtractor, Extraction, ExtractorConfig, ExtractorConfigBuilder, extract};
#[cfg(feature = "fetch")]
pub use extractor::fetch_and_extract;
pub use fetch::FetchConfig;
#[cfg(feature = "fetch")]
pub use fetch::fetch_url;
pub use fetch::{fetch_file, fetch_stdin};
pub use filename::{derive_filename, fallback_filename};
pub use filter::filter_languages;
pub use lang::{Language, detect};
pub use locate::{Located, LocatorConfig, locate};
pub use markdown::{MarkdownConfig, convert_to_markdown};
pub use parse::Document;
