//! Chrome and boilerplate removal.
//!
//! Two-tier removal over an owned [`DomTree`]: structural matches (tags,
//! landmark roles, template class names) are deleted outright, then a
//! residual pass deletes short generic containers whose text matches a known
//! chrome phrase. Long text blocks are never phrase-matched away, so real
//! content that happens to mention a navigation label survives.
//!
//! All the match lists are data on [`ChromePatterns`]; the defaults carry
//! the devsite documentation template's selectors and phrases.

use crate::dom::{DomTree, NodeId};

/// One structural selector in the chrome list.
///
/// Deliberately narrower than CSS: chrome matching needs exactly tag names,
/// class tokens, and landmark roles, and an explicit enum keeps the match a
/// cheap field check on the owned tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChromeSelector {
    /// Match by tag name (`nav`, `header`, ...).
    Tag(&'static str),
    /// Match any element carrying this class token.
    Class(&'static str),
    /// Match any element with this `role` attribute value.
    Role(&'static str),
}

/// Configuration for the noise remover.
///
/// The selector and phrase lists are template-specific data, not part of the
/// algorithm; swap them out to clean pages built from a different
/// documentation framework.
#[derive(Debug, Clone)]
pub struct ChromePatterns {
    /// Tags removed unconditionally, wherever they appear.
    pub strip_tags: Vec<&'static str>,
    /// Structural chrome removed regardless of content.
    pub selectors: Vec<ChromeSelector>,
    /// Lowercase phrases that mark unlabeled boilerplate.
    pub phrases: Vec<&'static str>,
    /// Generic container tags eligible for phrase-based removal.
    pub container_tags: Vec<&'static str>,
    /// Text length above which an element is presumed real content and
    /// exempt from phrase matching.
    pub text_threshold: usize,
}

impl Default for ChromePatterns {
    fn default() -> Self {
        Self {
            strip_tags: vec!["script", "style"],
            selectors: vec![
                ChromeSelector::Tag("nav"),
                ChromeSelector::Tag("header"),
                ChromeSelector::Tag("footer"),
                ChromeSelector::Role("navigation"),
                ChromeSelector::Class("devsite-nav"),
                ChromeSelector::Class("devsite-header"),
                ChromeSelector::Class("devsite-footer"),
                ChromeSelector::Class("devsite-banner"),
                ChromeSelector::Class("devsite-book-nav"),
                ChromeSelector::Class("devsite-book-nav-wrapper"),
                ChromeSelector::Class("devsite-mobile-nav"),
                ChromeSelector::Class("devsite-mobile-nav-bottom"),
                ChromeSelector::Class("devsite-top-logo-row"),
                ChromeSelector::Class("devsite-utility-nav"),
                ChromeSelector::Class("devsite-searchbox"),
                ChromeSelector::Class("devsite-footer-promos"),
                ChromeSelector::Class("devsite-footer-utility"),
                ChromeSelector::Class("breadcrumb"),
                ChromeSelector::Class("banner"),
                ChromeSelector::Class("advertisement"),
            ],
            phrases: vec![
                "build more run more",
                "solutions pricing docs",
                "overview fundamentals",
                "go to console",
                "send feedback",
                "firebase console",
                "get started more",
                "firebase studio",
                "samples community",
                "support blog",
            ],
            container_tags: vec!["div", "section", "aside", "nav"],
            text_threshold: 200,
        }
    }
}

impl ChromePatterns {
    fn selector_matches(&self, tree: &DomTree, id: NodeId) -> bool {
        let Some(el) = tree.element(id) else { return false };
        self.selectors.iter().any(|sel| match *sel {
            ChromeSelector::Tag(tag) => el.tag == tag,
            ChromeSelector::Class(token) => tree.has_class(id, token),
            ChromeSelector::Role(role) => tree.attr(id, "role") == Some(role),
        })
    }
}

/// Removes chrome from the tree in place.
///
/// Applies, in order: unconditional tag removal, structural selector
/// removal, then the phrase-based residual pass. Never fails; an empty tree
/// is a no-op, and a second invocation removes nothing further.
pub fn clean(tree: &mut DomTree, patterns: &ChromePatterns) {
    for id in tree.descendants(tree.root()) {
        if !tree.is_attached(id) {
            continue;
        }
        if tree.tag(id).is_some_and(|tag| patterns.strip_tags.contains(&tag)) {
            tree.detach(id);
        }
    }

    for id in tree.descendants(tree.root()) {
        if tree.is_attached(id) && patterns.selector_matches(tree, id) {
            tree.detach(id);
        }
    }

    for id in tree.descendants(tree.root()) {
        if !tree.is_attached(id) {
            continue;
        }
        let Some(tag) = tree.tag(id) else { continue };
        if !patterns.container_tags.contains(&tag) {
            continue;
        }

        let text = normalized_text(tree, id);
        if text.chars().count() > patterns.text_threshold {
            continue;
        }

        let lowered = text.to_lowercase();
        if patterns.phrases.iter().any(|phrase| lowered.contains(phrase)) {
            tree.detach(id);
        }
    }
}

/// Subtree text with whitespace runs collapsed to single spaces, so phrases
/// match across line breaks and adjacent text nodes.
fn normalized_text(tree: &DomTree, id: NodeId) -> String {
    tree.text(id).split_whitespace().collect::<Vec<_>>().join(" ")
}
