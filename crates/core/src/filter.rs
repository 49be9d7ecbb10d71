//! Language-section filtering.
//!
//! A language tab renders as a heading ("Swift", "Kotlin", ...) followed by
//! sibling content. A section spans from its heading up to, but not
//! including, the next sibling heading of equal or shallower level, so
//! nested sub-headings travel with their section. Filtering removes whole
//! sections whose heading names a language outside the keep set; headings
//! that name no language at all are structure, not tabs, and are left
//! alone.

use std::collections::BTreeSet;

use crate::dom::{DomTree, NodeId};
use crate::lang::Language;

/// Removes sections for languages outside `keep`, in place.
///
/// An empty `keep` set means no filtering was requested and the tree is
/// returned untouched. A heading matching both a kept and a dropped tag is
/// kept; ambiguity resolves toward keeping content. Never fails, including
/// on malformed heading nesting; a dropped section with no terminating
/// heading runs to the end of its parent.
pub fn filter_languages(tree: &mut DomTree, keep: &BTreeSet<Language>) {
    if keep.is_empty() {
        return;
    }

    for (heading, level) in tree.headings(tree.root()) {
        if !tree.is_attached(heading) {
            // Already removed as part of an enclosing dropped section.
            continue;
        }

        let lowered = tree.text(heading).to_lowercase();

        // KEEP takes precedence: checked before any drop candidate.
        if keep.iter().any(|lang| lang.matches(&lowered)) {
            continue;
        }

        let dropped = Language::ALL
            .iter()
            .filter(|lang| !keep.contains(*lang))
            .any(|lang| lang.matches(&lowered));
        if !dropped {
            continue;
        }

        remove_section(tree, heading, level);
    }
}

/// Detaches a heading and its following siblings up to the next heading of
/// equal or shallower level.
fn remove_section(tree: &mut DomTree, heading: NodeId, level: u8) {
    let Some(parent) = tree.parent(heading) else {
        // A heading serving as the filter root has no section siblings.
        return;
    };

    let siblings = tree.children(parent).to_vec();
    let Some(start) = siblings.iter().position(|id| *id == heading) else {
        return;
    };

    let mut doomed = vec![heading];
    for sibling in &siblings[start + 1..] {
        let sibling_level = tree.tag(*sibling).and_then(DomTree::heading_level);
        if sibling_level.is_some_and(|l| l <= level) {
            break;
        }
        doomed.push(*sibling);
    }

    for id in doomed {
        tree.detach(id);
    }
}
