//! Language tags and the document language scan.
//!
//! [`Language`] is the closed set of programming-language/platform tabs a
//! documentation page can carry. Each tag owns a static set of lowercase
//! variant strings used for matching ("web" also answers to "javascript"
//! and "js"); the table is process-wide, immutable configuration.
//!
//! [`detect`] inventories which tags a page mentions at all, feeding the
//! interactive menu and the warning for `--languages` names the page does
//! not use.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::parse::Document;
use crate::{DocsiftError, Result};

/// One supported language tab.
///
/// Variants are declared in alphabetical order so that ordered collections
/// of tags (`BTreeSet<Language>`) iterate alphabetically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Dart,
    Go,
    Java,
    Kotlin,
    Node,
    Php,
    Python,
    Ruby,
    Swift,
    Unity,
    Web,
}

impl Language {
    /// Every supported tag, in alphabetical order.
    pub const ALL: [Language; 11] = [
        Language::Dart,
        Language::Go,
        Language::Java,
        Language::Kotlin,
        Language::Node,
        Language::Php,
        Language::Python,
        Language::Ruby,
        Language::Swift,
        Language::Unity,
        Language::Web,
    ];

    /// Canonical lowercase name.
    pub fn name(&self) -> &'static str {
        match self {
            Language::Dart => "dart",
            Language::Go => "go",
            Language::Java => "java",
            Language::Kotlin => "kotlin",
            Language::Node => "node",
            Language::Php => "php",
            Language::Python => "python",
            Language::Ruby => "ruby",
            Language::Swift => "swift",
            Language::Unity => "unity",
            Language::Web => "web",
        }
    }

    /// Lowercase variant strings that identify this tag in page text and
    /// class tokens. The canonical name is always included.
    pub fn variants(&self) -> &'static [&'static str] {
        match self {
            Language::Dart => &["dart", "flutter"],
            Language::Go => &["go", "golang"],
            Language::Java => &["java"],
            Language::Kotlin => &["kotlin", "android"],
            Language::Node => &["node", "nodejs", "node.js"],
            Language::Php => &["php"],
            Language::Python => &["python"],
            Language::Ruby => &["ruby"],
            Language::Swift => &["swift", "ios"],
            Language::Unity => &["unity", "c#", "csharp"],
            Language::Web => &["web", "javascript", "js"],
        }
    }

    /// Whether already-lowercased text mentions this tag (substring match
    /// against any variant).
    pub fn matches(&self, lowered: &str) -> bool {
        self.variants().iter().any(|variant| lowered.contains(variant))
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Language {
    type Err = DocsiftError;

    /// Normalizes a user-supplied name to its canonical tag. Matching is
    /// case-insensitive and accepts any variant ("ios" -> swift,
    /// "android" -> kotlin), but requires the whole string to be a variant;
    /// unknown names are rejected for the caller to warn about.
    fn from_str(s: &str) -> Result<Self> {
        let lowered = s.trim().to_lowercase();
        Language::ALL
            .into_iter()
            .find(|lang| lang.variants().contains(&lowered.as_str()))
            .ok_or(DocsiftError::UnknownLanguage(s.to_string()))
    }
}

/// Scans a document for the set of language tags it mentions.
///
/// Three independent sources contribute: heading text, code/preformatted
/// block text, and the class tokens of every element. The scan covers the
/// full document rather than the located content region, since tab class
/// names often sit on wrapper nodes outside the article body. Read-only,
/// order-independent, and idempotent; the result iterates alphabetically.
pub fn detect(doc: &Document) -> BTreeSet<Language> {
    let mut found = BTreeSet::new();

    let mut scan = |text: &str| {
        let lowered = text.to_lowercase();
        for lang in Language::ALL {
            if lang.matches(&lowered) {
                found.insert(lang);
            }
        }
    };

    if let Ok(headings) = doc.select("h1, h2, h3, h4, h5, h6") {
        for heading in &headings {
            scan(&heading.text());
        }
    }

    if let Ok(blocks) = doc.select("code, pre") {
        for block in &blocks {
            scan(&block.text());
        }
    }

    if let Ok(elements) = doc.select("*") {
        for element in &elements {
            let classes = element.classes().join(" ");
            if !classes.is_empty() {
                scan(&classes);
            }
        }
    }

    found
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("swift", Language::Swift)]
    #[case("Swift", Language::Swift)]
    #[case("ios", Language::Swift)]
    #[case("android", Language::Kotlin)]
    #[case("JS", Language::Web)]
    #[case("javascript", Language::Web)]
    #[case("node.js", Language::Node)]
    #[case("flutter", Language::Dart)]
    #[case("golang", Language::Go)]
    #[case("csharp", Language::Unity)]
    fn test_from_str_normalizes_variants(#[case] input: &str, #[case] expected: Language) {
        assert_eq!(input.parse::<Language>().unwrap(), expected);
    }

    #[test]
    fn test_from_str_rejects_unknown() {
        let err = "cobol".parse::<Language>().unwrap_err();
        assert!(matches!(err, DocsiftError::UnknownLanguage(_)));
    }

    #[test]
    fn test_from_str_rejects_partial_variant() {
        assert!("swi".parse::<Language>().is_err());
    }

    #[test]
    fn test_detect_from_headings() {
        let doc = Document::parse("<html><body><h2>Swift</h2><h2>Kotlin</h2><p>body</p></body></html>").unwrap();
        let found = detect(&doc);
        assert!(found.contains(&Language::Swift));
        assert!(found.contains(&Language::Kotlin));
        assert!(!found.contains(&Language::Ruby));
    }

    #[test]
    fn test_detect_from_code_blocks() {
        let doc = Document::parse("<html><body><h2>Install</h2><pre>flutter pub add analytics</pre></body></html>")
            .unwrap();
        assert!(detect(&doc).contains(&Language::Dart));
    }

    #[test]
    fn test_detect_from_class_tokens() {
        let doc =
            Document::parse(r#"<html><body><div class="tab-swift">let x = 1</div><p>text</p></body></html>"#).unwrap();
        assert!(detect(&doc).contains(&Language::Swift));
    }

    #[test]
    fn test_detect_is_idempotent_and_sorted() {
        let doc = Document::parse(
            "<html><body><h2>Web</h2><h2>Swift</h2><h2>Kotlin</h2><pre>python -m pip</pre></body></html>",
        )
        .unwrap();

        let first = detect(&doc);
        let second = detect(&doc);
        assert_eq!(first, second);

        let names: Vec<&str> = first.iter().map(|l| l.name()).collect();
        let mut sorted = names.clone();
        sorted.sort_unstable();
        assert_eq!(names, sorted);
    }

    #[test]
    fn test_detect_empty_document() {
        let doc = Document::parse("<html><body><p>Nothing notable here.</p></body></html>").unwrap();
        assert!(detect(&doc).is_empty());
    }
}
