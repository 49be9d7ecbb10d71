//! Output filename derivation.
//!
//! Filenames come from the URL path: the segments after a `docs` segment
//! (or the whole path when there is none), joined with dashes, with query
//! parameters and any kept-language suffix appended. A URL with no usable
//! path falls back to a slug of the page title.

use std::collections::BTreeSet;
use std::collections::HashSet;

use regex::Regex;
use url::Url;

use crate::lang::Language;

/// Derives the output filename for one extraction.
///
/// `languages` is the effective keep set; when non-empty the tags are
/// appended so filtered and unfiltered runs of the same page never collide.
pub fn derive_filename(url: &Url, title: &str, languages: &BTreeSet<Language>) -> String {
    let segments: Vec<&str> = url
        .path_segments()
        .map(|split| split.filter(|s| !s.is_empty()).collect())
        .unwrap_or_default();

    let relevant: &[&str] = match segments.iter().position(|s| *s == "docs") {
        Some(pos) => &segments[pos + 1..],
        None => &segments,
    };

    let base = if relevant.is_empty() { slugify(title) } else { sanitize(&relevant.join("-")) };
    let mut name = if base.is_empty() { slugify(title) } else { base };

    // One query pair per key, first value wins.
    let mut seen = HashSet::new();
    for (key, value) in url.query_pairs() {
        if seen.insert(key.to_string()) {
            name.push_str(&format!("-{}-{}", key, value));
        }
    }

    for lang in languages {
        name.push('-');
        name.push_str(lang.name());
    }

    name.push_str(".md");
    name
}

/// Filename for input with no usable URL (file or stdin): a title slug
/// plus the language suffix.
pub fn fallback_filename(title: &str, languages: &BTreeSet<Language>) -> String {
    let mut name = slugify(title);
    if name.is_empty() {
        name = "documentation".to_string();
    }

    for lang in languages {
        name.push('-');
        name.push_str(lang.name());
    }

    name.push_str(".md");
    name
}

/// Lowercase slug of arbitrary text.
fn slugify(text: &str) -> String {
    sanitize(&text.to_lowercase())
}

fn sanitize(text: &str) -> String {
    let stripped = Regex::new(r"[^\w\s-]").unwrap().replace_all(text, "");
    let dashed = Regex::new(r"[-\s]+").unwrap().replace_all(&stripped, "-");
    dashed.trim_matches('-').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parsed(url: &str) -> Url {
        Url::parse(url).unwrap()
    }

    fn no_langs() -> BTreeSet<Language> {
        BTreeSet::new()
    }

    #[test]
    fn test_docs_path_with_query() {
        let url = parsed("https://firebase.google.com/docs/ai-logic/get-started?api=vertex");
        assert_eq!(
            derive_filename(&url, "Get started", &no_langs()),
            "ai-logic-get-started-api-vertex.md"
        );
    }

    #[test]
    fn test_language_suffix_in_alphabetical_order() {
        let url = parsed("https://firebase.google.com/docs/auth");
        let langs: BTreeSet<Language> = [Language::Web, Language::Swift].into_iter().collect();
        assert_eq!(derive_filename(&url, "Auth", &langs), "auth-swift-web.md");
    }

    #[test]
    fn test_path_without_docs_segment() {
        let url = parsed("https://example.com/guides/setup");
        assert_eq!(derive_filename(&url, "Setup", &no_langs()), "guides-setup.md");
    }

    #[test]
    fn test_empty_path_falls_back_to_title_slug() {
        let url = parsed("https://example.com/");
        assert_eq!(
            derive_filename(&url, "Get Started: Now!", &no_langs()),
            "get-started-now.md"
        );
    }

    #[test]
    fn test_duplicate_query_keys_use_first_value() {
        let url = parsed("https://example.com/docs/auth?api=vertex&api=legacy");
        assert_eq!(derive_filename(&url, "Auth", &no_langs()), "auth-api-vertex.md");
    }

    #[test]
    fn test_fallback_filename_from_title() {
        let langs: BTreeSet<Language> = [Language::Kotlin].into_iter().collect();
        assert_eq!(fallback_filename("Get Started", &langs), "get-started-kotlin.md");
        assert_eq!(fallback_filename("???", &no_langs()), "documentation.md");
    }

    #[test]
    fn test_sanitizes_odd_characters() {
        let url = parsed("https://example.com/docs/intro.(v2)");
        assert_eq!(derive_filename(&url, "Guide", &no_langs()), "introv2.md");
    }
}
