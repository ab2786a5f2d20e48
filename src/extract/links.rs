// src/extract/links.rs
// =============================================================================
// This module extracts Wikipedia article links from HTML pages.
//
// We use the `scraper` crate which:
// - Parses HTML into a DOM (Document Object Model)
// - Supports CSS selectors for finding elements
// - Is built on html5ever (Mozilla's HTML parser)
//
// We also use the `url` crate to:
// - Resolve relative URLs like /wiki/Norway to absolute URLs
// - Strip #fragment sections so the same article isn't seen as two URLs
//
// What counts as an article link:
// - The path starts with /wiki/
// - The host is a wikipedia.org host
// - The path has no namespace colon (File:, Category:, Talk:, ...)
//
// Rust concepts:
// - Option<T>: For URLs that might not resolve
// - Iterators: For processing collections
// =============================================================================

use scraper::{Html, Selector};
use url::Url;

// Extracts all article links from a Wikipedia page
//
// Parameters:
//   html: the HTML content to parse (borrowed as &str)
//   page_url: the URL of the page (for resolving relative links)
//
// Returns: Vec<String> of absolute article URLs, in document order
//
// Duplicates are kept on purpose - the search's visited set decides what
// has already been seen, not the extractor.
pub fn extract_article_links(html: &str, page_url: &str) -> Vec<String> {
    let mut links = Vec::new();

    // Parse the HTML into a document
    let document = Html::parse_document(html);

    // Create a CSS selector to find all <a> tags with an href
    // Selector::parse returns Result, so we use .unwrap() which panics on error
    // This is OK here because our selector is a constant and known to be valid
    let selector = Selector::parse("a[href]").unwrap();

    // Parse the page URL once, for resolving relative links
    let base = match Url::parse(page_url) {
        Ok(url) => url,
        Err(_) => {
            eprintln!("Warning: Invalid page URL: {}", page_url);
            return links;
        }
    };

    for element in document.select(&selector) {
        if let Some(href) = element.value().attr("href") {
            // Resolve to an absolute URL, then keep only article links
            if let Some(resolved) = resolve_url(&base, href) {
                if is_article_url(&resolved) {
                    links.push(resolved.to_string());
                }
            }
        }
    }

    links
}

// Decides whether a worker may expand this URL during a race
//
// Two rules, straight from the game:
// - English Wikipedia only (no other languages, no sister projects)
// - Never the Main Page, which links to everything. No cheating!
//
// The host is compared exactly, so a lookalike like xen.wikipedia.org
// doesn't slip through a substring match.
pub fn is_explorable(url: &str) -> bool {
    let parsed = match Url::parse(url) {
        Ok(parsed) => parsed,
        Err(_) => return false,
    };
    parsed.host_str() == Some("en.wikipedia.org") && !parsed.path().contains("/Main_Page")
}

// Resolves a possibly-relative href to an absolute URL
//
// Examples:
//   base = "https://en.wikipedia.org/wiki/Norway"
//   href = "/wiki/Cheese" -> Some(".../wiki/Cheese")
//   href = "https://en.wikipedia.org/wiki/Oslo#History" -> Some(".../wiki/Oslo")
//   href = "not a url at all %%" -> None
fn resolve_url(base: &Url, href: &str) -> Option<Url> {
    // If href is already absolute, Url::parse succeeds directly
    // If it's relative, parsing fails and we join it with the base instead
    let mut url = match Url::parse(href) {
        Ok(url) => url,
        Err(_) => base.join(href).ok()?,
    };

    // Drop the #section part - it points into the same article
    url.set_fragment(None);
    Some(url)
}

// Checks whether a resolved URL points at a Wikipedia article
//
// We reject namespace pages (File:, Category:, Talk:, Special:, ...) by
// looking for a colon in the path - real article titles never contain one
// while every namespace page does.
fn is_article_url(url: &Url) -> bool {
    // Only HTTP/HTTPS links can be fetched
    if url.scheme() != "http" && url.scheme() != "https" {
        return false;
    }

    // Must live on a wikipedia.org host (en.wikipedia.org, de.wikipedia.org, ...)
    let on_wikipedia = match url.domain() {
        Some(domain) => domain == "wikipedia.org" || domain.ends_with(".wikipedia.org"),
        None => false,
    };

    on_wikipedia && url.path().starts_with("/wiki/") && !url.path().contains(':')
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. What is scraper and how does it work?
//    - scraper parses HTML into a tree structure (DOM)
//    - You can then query it using CSS selectors (like querySelector)
//    - "a[href]" means "all <a> tags that have an href attribute"
//
// 2. What is the url crate?
//    - Handles URL parsing and manipulation
//    - url.join() resolves relative URLs (like a browser does)
//    - url.set_fragment(None) removes the #section part
//
// 3. Why keep the extractor and the explorable check separate?
//    - extract_article_links answers "what does this page link to"
//    - is_explorable answers "is the race allowed to go there"
//    - The goal article itself must pass through extraction even when a
//      stricter rule (like English-only) would apply to expansion
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = "https://en.wikipedia.org/wiki/Norway";

    #[test]
    fn test_extract_relative_article_link() {
        let html = r#"<p><a href="/wiki/Cheese">Cheese</a></p>"#;
        let links = extract_article_links(html, PAGE);
        assert_eq!(links, vec!["https://en.wikipedia.org/wiki/Cheese"]);
    }

    #[test]
    fn test_extract_absolute_article_link() {
        let html = r#"<a href="https://en.wikipedia.org/wiki/Oslo">Oslo</a>"#;
        let links = extract_article_links(html, PAGE);
        assert_eq!(links, vec!["https://en.wikipedia.org/wiki/Oslo"]);
    }

    #[test]
    fn test_strip_fragment() {
        let html = r#"<a href="/wiki/Oslo#History">History of Oslo</a>"#;
        let links = extract_article_links(html, PAGE);
        assert_eq!(links, vec!["https://en.wikipedia.org/wiki/Oslo"]);
    }

    #[test]
    fn test_skip_namespace_pages() {
        let html = r#"
            <a href="/wiki/File:Flag_of_Norway.svg">Flag</a>
            <a href="/wiki/Category:Countries">Countries</a>
            <a href="/wiki/Talk:Norway">Talk</a>
        "#;
        let links = extract_article_links(html, PAGE);
        assert!(links.is_empty());
    }

    #[test]
    fn test_skip_external_links() {
        let html = r#"
            <a href="https://www.rust-lang.org/wiki/Not_Wikipedia">Rust</a>
            <a href="mailto:someone@example.com">Mail</a>
            <a href="/w/index.php?title=Norway">Edit</a>
        "#;
        let links = extract_article_links(html, PAGE);
        assert!(links.is_empty());
    }

    #[test]
    fn test_duplicates_are_kept() {
        let html = r#"
            <a href="/wiki/Cheese">Cheese</a>
            <a href="/wiki/Cheese">More cheese</a>
        "#;
        let links = extract_article_links(html, PAGE);
        assert_eq!(links.len(), 2);
    }

    #[test]
    fn test_explorable_english_wikipedia() {
        assert!(is_explorable("https://en.wikipedia.org/wiki/Cheese"));
        assert!(!is_explorable("https://de.wikipedia.org/wiki/Käse"));
    }

    #[test]
    fn test_main_page_is_off_limits() {
        assert!(!is_explorable("https://en.wikipedia.org/wiki/Main_Page"));
    }

    #[test]
    fn test_explorable_rejects_lookalike_hosts() {
        assert!(!is_explorable("https://xen.wikipedia.org/wiki/Cheese"));
        assert!(!is_explorable("https://en.wikipedia.org.evil.example/wiki/Cheese"));
        assert!(!is_explorable("not a url"));
    }
}
