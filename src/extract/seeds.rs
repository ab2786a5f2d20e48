// src/extract/seeds.rs
// =============================================================================
// This module collects the raw terms that seed the keyword scoring.
//
// The idea: the goal article already tells us what it is about. Three kinds
// of text on it make good search clues, in increasing order of importance:
// - The title="" attributes of links in its paragraphs (what it references)
// - The bold spans in its paragraphs (what it defines - Wikipedia bolds the
//   subject of an article in the opening sentence)
// - The article's own title, taken from the last segment of its URL
//
// Only paragraph (<p>) content counts - navigation boxes, infoboxes and
// footers link to half of Wikipedia and would drown the signal.
//
// Normalization and tier weighting happen later, in race::keywords. This
// module only gathers the raw strings.
// =============================================================================

use scraper::{Html, Selector};

// The raw seed terms pulled from the goal page
//
// #[derive(Debug)] lets us print the whole struct when debugging
#[derive(Debug, Default)]
pub struct SeedTerms {
    /// title="" attributes of links inside body paragraphs
    pub link_titles: Vec<String>,
    /// Text of <b> spans inside body paragraphs
    pub bold_spans: Vec<String>,
    /// The article title, from the URL's last path segment ("_" -> " ")
    pub page_title: String,
}

// Extracts seed terms from the goal page
//
// Parameters:
//   html: the goal page's HTML content
//   url: the goal page's URL (the title is derived from it)
//
// Returns: SeedTerms with everything found, unnormalized
pub fn extract_seed_terms(html: &str, url: &str) -> SeedTerms {
    let document = Html::parse_document(html);

    // Constant selectors, known to be valid (see links.rs for why unwrap is OK)
    let title_selector = Selector::parse("p a[title]").unwrap();
    let bold_selector = Selector::parse("p b").unwrap();

    let link_titles = document
        .select(&title_selector)
        .filter_map(|element| element.value().attr("title"))
        .map(|title| title.to_string())
        .collect();

    let bold_spans = document
        .select(&bold_selector)
        .map(|element| element.text().collect::<String>())
        .collect();

    SeedTerms {
        link_titles,
        bold_spans,
        page_title: title_from_url(url),
    }
}

// Derives the article title from its URL
//
// Example: "https://en.wikipedia.org/wiki/Bill_Mundell" -> "Bill Mundell"
fn title_from_url(url: &str) -> String {
    let last_segment = match url.rsplit('/').next() {
        Some(segment) => segment,
        None => url,
    };
    last_segment.replace('_', " ")
}

#[cfg(test)]
mod tests {
    use super::*;

    const URL: &str = "https://en.wikipedia.org/wiki/Nobel_Prize";

    #[test]
    fn test_link_titles_from_paragraphs() {
        let html = r#"
            <p>Awarded by the <a href="/wiki/Sweden" title="Sweden">Swedish</a> academy.</p>
            <div><a href="/wiki/Navbox" title="Navigation box">nav</a></div>
        "#;
        let seeds = extract_seed_terms(html, URL);
        // The link in the <div> is outside any paragraph and must not count
        assert_eq!(seeds.link_titles, vec!["Sweden"]);
    }

    #[test]
    fn test_bold_spans_from_paragraphs() {
        let html = r#"
            <p>The <b>Nobel Prize</b> is an annual award.</p>
            <footer><b>Not this one</b></footer>
        "#;
        let seeds = extract_seed_terms(html, URL);
        assert_eq!(seeds.bold_spans, vec!["Nobel Prize"]);
    }

    #[test]
    fn test_title_from_url() {
        let seeds = extract_seed_terms("", URL);
        assert_eq!(seeds.page_title, "Nobel Prize");
    }

    #[test]
    fn test_bold_text_with_nested_markup() {
        let html = r#"<p><b>Nobel <i>Prize</i></b></p>"#;
        let seeds = extract_seed_terms(html, URL);
        // element.text() walks nested elements too
        assert_eq!(seeds.bold_spans, vec!["Nobel Prize"]);
    }
}
