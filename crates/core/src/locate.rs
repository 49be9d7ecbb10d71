//! Content-region location.
//!
//! A documentation page built from a templated framework offers many
//! plausible containers for "the article". The locator walks an ordered
//! selector table (most specific first), trial-cleans an owned copy of each
//! match, and scores the copy by its remaining printable text. Scoring the
//! cleaned copy, never the raw node, keeps heading-stuffed navigation
//! wrappers from outscoring the real body.
//!
//! Broad selectors carry a higher qualifying threshold than specific ones;
//! a broad match is only trusted when it yields a lot of cleaned text. When
//! nothing qualifies, the document body is returned unconditionally, so
//! location only fails on a document with no body at all.

use crate::clean::{ChromePatterns, clean};
use crate::dom::DomTree;
use crate::parse::Document;
use crate::{DocsiftError, Result};

/// Selector table and thresholds for the locator.
///
/// Both lists are template-specific configuration; the defaults target the
/// devsite documentation framework. Order within each list is specificity
/// order and doubles as the tie-break.
#[derive(Debug, Clone)]
pub struct LocatorConfig {
    /// Article-scoped selectors, tried first.
    pub specific_selectors: Vec<&'static str>,
    /// Minimum cleaned printable characters for a specific match to qualify.
    pub specific_min_chars: usize,
    /// Page-scoped selectors, tried after the specific ones.
    pub broad_selectors: Vec<&'static str>,
    /// Minimum cleaned printable characters for a broad match to qualify.
    /// Higher than the specific threshold: a broad selector is correctly
    /// scoped less often, so it has to earn more trust.
    pub broad_min_chars: usize,
}

impl Default for LocatorConfig {
    fn default() -> Self {
        Self {
            specific_selectors: vec![
                ".devsite-article-body",
                ".devsite-main-content",
                r#"main[role="main"]"#,
                "main",
                "article",
                ".documentation-content",
                "#main-content",
            ],
            specific_min_chars: 1000,
            broad_selectors: vec![".devsite-wrapper", "body"],
            broad_min_chars: 3000,
        }
    }
}

/// The winning content region.
#[derive(Debug)]
pub struct Located {
    /// Owned, not-yet-cleaned copy of the winning subtree. The source
    /// document is untouched; the caller cleans this copy for real.
    pub tree: DomTree,
    /// Selector that produced the winner ("body" for the fallback).
    pub selector: &'static str,
    /// Printable character count of the trial-cleaned copy.
    pub score: usize,
}

/// Locates the main content region of the document.
///
/// Trial cleaning always happens on owned copies, so later pipeline stages
/// see the document exactly as parsed. Returns [`DocsiftError::NoBody`]
/// only when the document has no `<body>`; any other outcome resolves to
/// some region, by score or by fallback.
pub fn locate(doc: &Document, config: &LocatorConfig, patterns: &ChromePatterns) -> Result<Located> {
    let mut best: Option<(&'static str, usize)> = None;

    let thresholds = config
        .specific_selectors
        .iter()
        .map(|s| (*s, config.specific_min_chars))
        .chain(config.broad_selectors.iter().map(|s| (*s, config.broad_min_chars)));

    for (selector, min_chars) in thresholds {
        let Some(element) = doc.select_first(selector).ok().flatten() else {
            continue;
        };

        let mut trial = element.to_tree();
        clean(&mut trial, patterns);
        let score = trial.printable_len(trial.root());

        // Strictly-greater comparison: on a tie the earlier (more specific)
        // selector keeps the win.
        if score > min_chars && best.is_none_or(|(_, s)| score > s) {
            best = Some((selector, score));
        }
    }

    if let Some((selector, score)) = best
        && let Some(element) = doc.select_first(selector).ok().flatten()
    {
        return Ok(Located { tree: element.to_tree(), selector, score });
    }

    let body = doc
        .select_first("body")
        .ok()
        .flatten()
        .ok_or(DocsiftError::NoBody)?;

    let mut trial = body.to_tree();
    clean(&mut trial, patterns);
    let score = trial.printable_len(trial.root());

    Ok(Located { tree: body.to_tree(), selector: "body", score })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn locate_default(html: &str) -> Located {
        let doc = Document::parse(html).unwrap();
        locate(&doc, &LocatorConfig::default(), &ChromePatterns::default()).unwrap()
    }

    fn filler(sentence: &str, chars: usize) -> String {
        let mut out = String::new();
        while out.chars().filter(|c| !c.is_whitespace()).count() < chars {
            out.push_str(sentence);
            out.push(' ');
        }
        out
    }

    #[test]
    fn test_scores_cleaned_text_not_raw() {
        // `article` is raw-longer thanks to 2000 chars of nav chrome, but
        // after cleaning only 50 chars remain; `main` keeps its 1500.
        let chrome = filler("Products Solutions Pricing", 2000);
        let real_small = filler("Short intro.", 50);
        let real_large = filler("Genuine documentation prose with setup steps.", 1500);
        let html = format!(
            "<html><body><article><nav>{chrome}</nav><p>{real_small}</p></article><main>{real_large}</main></body></html>"
        );

        let located = locate_default(&html);
        assert_eq!(located.selector, "main");
        assert!(located.tree.text(located.tree.root()).contains("Genuine documentation"));
    }

    #[test]
    fn test_specificity_breaks_ties() {
        // The article-body div is the only child of main, so both clean to
        // identical text; the earlier-listed selector must win.
        let body = filler("Tied content inside the article body.", 1500);
        let html = format!(
            r#"<html><body><main><div class="devsite-article-body"><p>{body}</p></div></main></body></html>"#
        );

        let located = locate_default(&html);
        assert_eq!(located.selector, ".devsite-article-body");
    }

    #[test]
    fn test_broad_selector_needs_higher_threshold() {
        // 1500 cleaned chars qualifies a specific selector but not a broad
        // one; with only the wrapper matching, location falls back to body.
        let text = filler("Wrapper text of moderate size.", 1500);
        let html = format!(r#"<html><body><div class="devsite-wrapper"><span>{text}</span></div></body></html>"#);

        let located = locate_default(&html);
        assert_eq!(located.selector, "body");
    }

    #[test]
    fn test_fallback_to_body_below_all_thresholds() {
        let located = locate_default("<html><body><main><p>Tiny.</p></main></body></html>");
        assert_eq!(located.selector, "body");
        assert!(located.tree.text(located.tree.root()).contains("Tiny."));
    }

    #[test]
    fn test_fallback_on_malformed_document() {
        let located = locate_default("<p>Fragment with no article structure <div>at all");
        assert_eq!(located.selector, "body");
    }

    #[test]
    fn test_located_tree_is_uncleaned() {
        let body = filler("Documentation paragraphs that easily clear the threshold.", 1500);
        let html = format!("<html><body><main><nav>menu links</nav><p>{body}</p></main></body></html>");

        let located = locate_default(&html);
        assert_eq!(located.selector, "main");
        // Chrome is still present until the caller cleans for real.
        assert!(located.tree.text(located.tree.root()).contains("menu links"));
        // But the score reflects the trial-cleaned copy.
        assert!(located.score < located.tree.printable_len(located.tree.root()));
    }

    #[test]
    fn test_source_document_untouched_by_location() {
        let body = filler("Original document text stays put.", 1500);
        let html = format!("<html><body><main><nav>chrome</nav><p>{body}</p></main></body></html>");
        let doc = Document::parse(&html).unwrap();

        let _ = locate(&doc, &LocatorConfig::default(), &ChromePatterns::default()).unwrap();
        assert!(doc.text_content().contains("chrome"));
    }
}
