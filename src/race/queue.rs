// src/race/queue.rs
// =============================================================================
// This module implements the three shared containers the workers race over.
//
// Each one is a different shape for a different job:
// - Frontier: articles waiting to be expanded, kept sorted by score
// - Batch: one expanded article's links, handed out first-come-first-served
// - VisitedSet: every URL we have ever picked up, only ever grows
//
// All three wrap their data in a std::sync::Mutex. Each public method locks,
// does one thing, and unlocks - no lock is ever held across an .await, so
// workers only ever block each other for microseconds.
//
// Atomicity boundaries (what you can and cannot rely on):
// - Every single method call is atomic on its own
// - Two consecutive calls are NOT atomic together. In particular
//   VisitedSet::contains followed by VisitedSet::mark can interleave with
//   another worker doing the same - see the note on VisitedSet below.
//
// Rust concepts:
// - Mutex<T>: Mutual exclusion - one thread of execution at a time
// - VecDeque: Double-ended queue, efficient push/pop at both ends
// - HashSet: O(1) membership checks
// =============================================================================

use std::collections::{HashSet, VecDeque};
use std::sync::Mutex;

use super::search::Article;

// The global frontier: articles discovered but not yet expanded,
// ordered by descending score
//
// The coordinator pops from the front, so it always expands the
// highest-scoring article discovered anywhere so far.
pub struct Frontier {
    articles: Mutex<VecDeque<Article>>,
}

impl Frontier {
    /// Creates a frontier holding only the starting article
    pub fn new(first: Article) -> Self {
        let mut articles = VecDeque::new();
        articles.push_back(first);
        Self {
            articles: Mutex::new(articles),
        }
    }

    /// Removes and returns the highest-scoring article, or None if empty
    pub fn take_front(&self) -> Option<Article> {
        self.articles.lock().expect("frontier lock poisoned").pop_front()
    }

    /// Inserts an article at its sorted position
    ///
    /// The article goes immediately before the first entry with a strictly
    /// lower score, or at the back if there is none. Equal scores keep
    /// insertion order, so with all-zero scores the frontier degenerates
    /// into a plain FIFO queue (that is what makes greed 0 behave as
    /// breadth-first search).
    pub fn insert(&self, article: Article) {
        let mut articles = self.articles.lock().expect("frontier lock poisoned");
        let position = articles.iter().position(|a| article.score > a.score);
        match position {
            Some(i) => articles.insert(i, article),
            None => articles.push_back(article),
        }
    }

    /// How many articles are waiting to be expanded
    pub fn len(&self) -> usize {
        self.articles.lock().expect("frontier lock poisoned").len()
    }

    // Test helper: the scores in frontier order, for checking sortedness
    #[cfg(test)]
    fn scores(&self) -> Vec<u64> {
        self.articles
            .lock()
            .expect("frontier lock poisoned")
            .iter()
            .map(|a| a.score)
            .collect()
    }
}

// One generation's work list: the links of the article being expanded
//
// Plain FIFO - workers take from the front until it runs dry. The worker
// that finds the goal calls clear() so its siblings run dry early instead
// of finishing the generation for nothing. Clearing the batch is the only
// cancellation mechanism in the whole race; the frontier is never cleared.
pub struct Batch {
    links: Mutex<VecDeque<String>>,
}

impl Batch {
    /// Creates a batch from one article's extracted links, in page order
    pub fn new(links: Vec<String>) -> Self {
        Self {
            links: Mutex::new(links.into()),
        }
    }

    /// Removes and returns the next link, or None when the batch is drained
    pub fn take_front(&self) -> Option<String> {
        self.links.lock().expect("batch lock poisoned").pop_front()
    }

    /// Atomically throws away all remaining links
    pub fn clear(&self) {
        self.links.lock().expect("batch lock poisoned").clear();
    }

    /// How many links are still waiting
    pub fn len(&self) -> usize {
        self.links.lock().expect("batch lock poisoned").len()
    }
}

// Every URL any worker has ever picked up, across the whole race
//
// Entries are never removed, the set only grows.
//
// Known race, kept on purpose: workers call contains() and mark() as two
// separate steps, so two workers holding the same URL can both see "not
// visited" and both explore it. The result is a duplicate frontier entry,
// which is wasteful but harmless - the second expansion finds everything
// already visited. Folding the check into an atomic insert-if-absent would
// change how many pages get fetched, so the two-step form stays.
pub struct VisitedSet {
    urls: Mutex<HashSet<String>>,
}

impl VisitedSet {
    /// Creates a visited set already containing the starting URL
    pub fn new(start: &str) -> Self {
        let mut urls = HashSet::new();
        urls.insert(start.to_string());
        Self {
            urls: Mutex::new(urls),
        }
    }

    /// Checks whether a URL has been picked up before
    pub fn contains(&self, url: &str) -> bool {
        self.urls.lock().expect("visited lock poisoned").contains(url)
    }

    /// Records a URL as visited
    pub fn mark(&self, url: String) {
        self.urls.lock().expect("visited lock poisoned").insert(url);
    }

    /// How many URLs have been visited so far
    pub fn len(&self) -> usize {
        self.urls.lock().expect("visited lock poisoned").len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Shorthand for building a test article
    fn article(url: &str, score: u64) -> Article {
        Article {
            url: url.to_string(),
            path: vec![url.to_string()],
            score,
        }
    }

    #[test]
    fn test_frontier_pops_highest_score_first() {
        let frontier = Frontier::new(article("start", 0));
        frontier.insert(article("low", 5));
        frontier.insert(article("high", 50));
        frontier.insert(article("mid", 20));

        // "start" was inserted first with score 0, so it sits at the back
        assert_eq!(frontier.take_front().unwrap().url, "high");
        assert_eq!(frontier.take_front().unwrap().url, "mid");
        assert_eq!(frontier.take_front().unwrap().url, "low");
        assert_eq!(frontier.take_front().unwrap().url, "start");
        assert!(frontier.take_front().is_none());
    }

    #[test]
    fn test_frontier_stays_sorted_descending() {
        let frontier = Frontier::new(article("start", 0));
        for (url, score) in [("a", 7), ("b", 99), ("c", 7), ("d", 3), ("e", 42)] {
            frontier.insert(article(url, score));

            // Invariant: after every insertion the scores are non-increasing
            let scores = frontier.scores();
            let mut sorted = scores.clone();
            sorted.sort_by(|x, y| y.cmp(x));
            assert_eq!(scores, sorted);
        }
    }

    #[test]
    fn test_frontier_equal_scores_keep_insertion_order() {
        let frontier = Frontier::new(article("first", 10));
        frontier.insert(article("second", 10));
        frontier.insert(article("third", 10));

        // Ties go after their equals, never before
        assert_eq!(frontier.take_front().unwrap().url, "first");
        assert_eq!(frontier.take_front().unwrap().url, "second");
        assert_eq!(frontier.take_front().unwrap().url, "third");
    }

    #[test]
    fn test_frontier_all_zero_scores_is_fifo() {
        let frontier = Frontier::new(article("a", 0));
        frontier.insert(article("b", 0));
        frontier.insert(article("c", 0));

        assert_eq!(frontier.take_front().unwrap().url, "a");
        assert_eq!(frontier.take_front().unwrap().url, "b");
        assert_eq!(frontier.take_front().unwrap().url, "c");
    }

    #[test]
    fn test_batch_is_fifo() {
        let batch = Batch::new(vec!["a".into(), "b".into(), "c".into()]);
        assert_eq!(batch.len(), 3);
        assert_eq!(batch.take_front().as_deref(), Some("a"));
        assert_eq!(batch.take_front().as_deref(), Some("b"));
        assert_eq!(batch.take_front().as_deref(), Some("c"));
        assert!(batch.take_front().is_none());
    }

    #[test]
    fn test_batch_clear_empties_everything() {
        let batch = Batch::new(vec!["a".into(), "b".into()]);
        batch.clear();
        assert_eq!(batch.len(), 0);
        assert!(batch.take_front().is_none());
    }

    #[test]
    fn test_visited_starts_with_start_url() {
        let visited = VisitedSet::new("start");
        assert!(visited.contains("start"));
        assert!(!visited.contains("elsewhere"));
    }

    #[test]
    fn test_visited_only_grows() {
        let visited = VisitedSet::new("start");
        let mut last_len = visited.len();
        for url in ["a", "b", "b", "c"] {
            visited.mark(url.to_string());
            assert!(visited.len() >= last_len);
            last_len = visited.len();
        }
        assert_eq!(visited.len(), 4); // start, a, b, c - marking "b" twice is a no-op
    }
}
