// src/race/keywords.rs
// =============================================================================
// This module turns the goal page's seed terms into a scoring table.
//
// Three tiers of keywords, weakest to strongest:
// - low:  every individual word from the mid and high tiers
// - mid:  titles of links on the goal page (things the goal talks about)
// - high: bold text on the goal page plus the goal's own title
//
// A candidate article earns points for every keyword that appears in its
// content, and more points for keywords that appear in its URL:
//
//            content   URL
//   low         1        5
//   mid        10       30
//   high       50      100
//
// The greed level prunes tiers before the race starts. Lower greed means
// fewer keywords, which means more articles score zero, which means the
// search behaves more like plain breadth-first search.
//
// The index is built exactly once per race and never changes afterwards -
// workers share it by reference and only ever read from it.
// =============================================================================

use crate::extract::SeedTerms;

// Points for a keyword found in a candidate's content, by tier
const CONTENT_WEIGHTS: [u64; 3] = [1, 10, 50];
// Points for a keyword found in a candidate's URL, by tier
const URL_WEIGHTS: [u64; 3] = [5, 30, 100];

// The three-tier keyword table
//
// Each tier holds normalized terms: lowercase, alphanumerics and spaces
// only, no duplicates, nothing shorter than 4 characters.
#[derive(Debug)]
pub struct KeywordIndex {
    low: Vec<String>,
    mid: Vec<String>,
    high: Vec<String>,
}

impl KeywordIndex {
    // Builds the index from the goal page's seed terms
    //
    // Parameters:
    //   seeds: raw terms extracted from the goal page (see extract::seeds)
    //   greed: 0-3, how many tiers survive
    //     0: none (pure BFS), 1: high only, 2: mid and high, 3: all three
    pub fn build(seeds: &SeedTerms, greed: u8) -> Self {
        // Normalize the raw terms: lowercase, strip special characters
        let mut mid: Vec<String> = seeds.link_titles.iter().map(|t| normalize(t)).collect();
        let mut high: Vec<String> = seeds
            .bold_spans
            .iter()
            .map(|b| normalize(b))
            .chain(std::iter::once(normalize(&seeds.page_title)))
            .collect();

        // The low tier is every single word from the two tiers above
        let mut low: Vec<String> = mid
            .iter()
            .chain(high.iter())
            .flat_map(|term| term.split(' '))
            .map(|word| word.to_string())
            .collect();

        // Prune tiers according to greed, weakest tier first
        if greed <= 2 {
            low.clear();
        }
        if greed <= 1 {
            mid.clear();
        }
        if greed == 0 {
            high.clear();
        }

        // Throw away short words ("for", "of", "the"...) and duplicates
        Self {
            low: tidy(low),
            mid: tidy(mid),
            high: tidy(high),
        }
    }

    // Scores a candidate article
    //
    // Each keyword contributes at most once per check - it doesn't matter
    // how many times it occurs in the content. URL matching swaps spaces
    // for underscores first, because that's how Wikipedia titles appear in
    // URLs ("nobel prize" -> ".../wiki/Nobel_Prize").
    pub fn score(&self, url: &str, content: &str) -> u64 {
        let content = content.to_lowercase();
        let url = url.to_lowercase();

        let mut score = 0;
        let tiers = [&self.low, &self.mid, &self.high];
        for (i, tier) in tiers.iter().enumerate() {
            for keyword in tier.iter() {
                if content.contains(keyword.as_str()) {
                    score += CONTENT_WEIGHTS[i];
                }
                if url.contains(&keyword.replace(' ', "_")) {
                    score += URL_WEIGHTS[i];
                }
            }
        }
        score
    }

    /// The low priority tier (single words)
    pub fn low(&self) -> &[String] {
        &self.low
    }

    /// The mid priority tier (link titles)
    pub fn mid(&self) -> &[String] {
        &self.mid
    }

    /// The high priority tier (bold text and the goal's title)
    pub fn high(&self) -> &[String] {
        &self.high
    }
}

// Lowercases a term and strips everything except alphanumerics and spaces
fn normalize(term: &str) -> String {
    term.to_lowercase()
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == ' ')
        .collect()
}

// Drops terms shorter than 4 characters and removes duplicates,
// keeping first-seen order
fn tidy(terms: Vec<String>) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    terms
        .into_iter()
        .filter(|t| t.chars().count() > 3)
        .filter(|t| seen.insert(t.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeds(link_titles: &[&str], bold_spans: &[&str], page_title: &str) -> SeedTerms {
        SeedTerms {
            link_titles: link_titles.iter().map(|s| s.to_string()).collect(),
            bold_spans: bold_spans.iter().map(|s| s.to_string()).collect(),
            page_title: page_title.to_string(),
        }
    }

    #[test]
    fn test_tiers_at_full_greed() {
        let index = KeywordIndex::build(
            &seeds(&["Alfred Nobel"], &["Nobel Prize"], "Nobel Prize"),
            3,
        );
        assert_eq!(index.mid(), ["alfred nobel"]);
        // Bold span and page title are the same term, deduplicated
        assert_eq!(index.high(), ["nobel prize"]);
        // Low tier is the individual words of the tiers above, deduplicated
        assert_eq!(index.low(), ["alfred", "nobel", "prize"]);
    }

    #[test]
    fn test_normalization_strips_special_characters() {
        let index = KeywordIndex::build(&seeds(&[], &["Dungeons & Dragons!"], "X"), 3);
        assert_eq!(index.high(), ["dungeons  dragons"]);
    }

    #[test]
    fn test_short_words_are_dropped() {
        let index = KeywordIndex::build(&seeds(&["War of the Roses"], &[], "X"), 3);
        // "war", "of" and "the" are too short to be useful keywords
        assert_eq!(index.low(), ["roses"]);
    }

    #[test]
    fn test_greed_pruning() {
        let s = seeds(&["Alfred Nobel"], &["Nobel Prize"], "Nobel Prize");

        let g2 = KeywordIndex::build(&s, 2);
        assert!(g2.low().is_empty());
        assert!(!g2.mid().is_empty());
        assert!(!g2.high().is_empty());

        let g1 = KeywordIndex::build(&s, 1);
        assert!(g1.low().is_empty());
        assert!(g1.mid().is_empty());
        assert!(!g1.high().is_empty());

        let g0 = KeywordIndex::build(&s, 0);
        assert!(g0.low().is_empty());
        assert!(g0.mid().is_empty());
        assert!(g0.high().is_empty());
    }

    #[test]
    fn test_content_weights() {
        let index = KeywordIndex::build(
            &seeds(&["Stockholm"], &["Example"], "Dynamite"),
            3,
        );
        // "stockholm" is mid (+10), "example" is high (+50),
        // and each of them is also a single word in low (+1 each)
        let score = index.score("https://x/wiki/Y", "stockholm has an EXAMPLE of it");
        assert_eq!(score, 10 + 50 + 1 + 1);
    }

    #[test]
    fn test_bold_keyword_is_worth_fifty_in_content() {
        let index = KeywordIndex::build(&seeds(&[], &["Example"], "Something Else"), 3);
        let with = index.score("https://x/wiki/Y", "an example sentence");
        let without = index.score("https://x/wiki/Y", "an ordinary sentence");
        assert_eq!(with - without, 50 + 1); // +50 high content, +1 low word
    }

    #[test]
    fn test_url_match_uses_underscores() {
        let index = KeywordIndex::build(&seeds(&[], &["Nobel Prize"], "X"), 3);
        // high URL weight 100, plus "nobel" and "prize" low URL words (5 each)
        let score = index.score("https://en.wikipedia.org/wiki/Nobel_Prize", "");
        assert_eq!(score, 100 + 5 + 5);
    }

    #[test]
    fn test_keyword_counts_once_per_candidate() {
        let index = KeywordIndex::build(&seeds(&[], &["Example"], "X"), 1);
        let once = index.score("https://x", "example");
        let thrice = index.score("https://x", "example example example");
        assert_eq!(once, thrice);
    }

    #[test]
    fn test_greed_zero_scores_everything_zero() {
        let index = KeywordIndex::build(
            &seeds(&["Alfred Nobel"], &["Nobel Prize"], "Nobel Prize"),
            0,
        );
        assert_eq!(index.score("https://en.wikipedia.org/wiki/Nobel_Prize", "nobel prize"), 0);
    }
}
