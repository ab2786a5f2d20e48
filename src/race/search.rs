// src/race/search.rs
// =============================================================================
// This module implements the race itself: the worker loop and the
// generation coordinator.
//
// How it works:
// 1. Fetch the goal page once and build the keyword index from it
// 2. Put the starting article on the frontier
// 3. Pop the best article off the frontier and fetch its links (a "batch")
// 4. Run a pool of workers that drain the batch together: each worker
//    takes a link, checks it against the goal, and otherwise scores it
//    and inserts it back into the frontier
// 5. Wait for every worker to finish (the barrier), then go to 3
//
// The race ends when a worker steps on the goal (Found) or when the
// frontier runs dry (Exhausted). Nothing that happens to a single link is
// fatal - a page that can't be fetched just stops that branch while every
// other branch keeps going.
//
// Concurrency model, in short: workers within one generation run
// concurrently, generations never overlap. Workers only touch the shared
// containers through their own atomic methods and never hold a lock while
// fetching or sleeping.
//
// Rust concepts:
// - Lifetimes: The Generation struct borrows everything it needs
// - AtomicBool: A flag workers can read and set without a lock
// - join_all: Waits for a whole set of futures (our barrier)
// =============================================================================

use anyhow::Result;
use futures::future::join_all;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;
use tokio::time::sleep;

use crate::extract;
use crate::fetch::Fetch;

use super::keywords::KeywordIndex;
use super::queue::{Batch, Frontier, VisitedSet};

// How many times a worker tries to fetch one page before giving up on it
const FETCH_ATTEMPTS: u32 = 5;
// Base delay between retries; attempt N waits N times this long
const RETRY_BACKOFF: Duration = Duration::from_millis(250);

// A discovered article: where it is, how we got there, how promising it looks
//
// All three fields are set at creation and never change afterwards.
#[derive(Debug, Clone)]
pub struct Article {
    /// The article's URL - its identity in the search
    pub url: String,
    /// Every URL from the start to here, in order (so path[0] is the start
    /// and the last entry is this article's own URL)
    pub path: Vec<String>,
    /// Keyword score; higher means expanded sooner. The start scores 0.
    pub score: u64,
}

impl Article {
    /// The starting article: a path of just itself, score 0
    fn root(url: &str) -> Self {
        Self {
            url: url.to_string(),
            path: vec![url.to_string()],
            score: 0,
        }
    }

    /// An article discovered via `parent`: the parent's path plus itself
    fn child(parent: &Article, url: String, score: u64) -> Self {
        let mut path = parent.path.clone();
        path.push(url.clone());
        Self { url, path, score }
    }
}

// Tuning knobs for one race
#[derive(Debug, Clone)]
pub struct RaceConfig {
    /// Keyword greed level, 0-3 (see KeywordIndex::build)
    pub greed: u8,
    /// Number of concurrent workers per generation
    pub workers: usize,
    /// How long each worker pauses between articles
    pub delay: Duration,
}

// How a race ended
#[derive(Debug)]
pub enum RaceOutcome {
    /// A path was found: every URL from start to goal, in order
    Found(Vec<String>),
    /// The frontier ran dry without reaching the goal
    Exhausted,
}

// Everything one generation's workers share
//
// The coordinator builds one of these per generation, hands every worker a
// reference, and drops it after the barrier.
struct Generation<'a, W: Fetch> {
    wiki: &'a W,
    goal: &'a str,
    /// The article whose links fill the batch
    parent: &'a Article,
    frontier: &'a Frontier,
    batch: &'a Batch,
    visited: &'a VisitedSet,
    keywords: &'a KeywordIndex,
    /// Set by the worker that finds the goal, read by retry loops
    found: &'a AtomicBool,
    delay: Duration,
}

// Runs a race from `start` to `goal`
//
// Parameters:
//   wiki: anything that can fetch a URL (the real one is fetch::HttpFetcher)
//   start: the article URL to start from
//   goal: the article URL to reach
//   config: greed, worker count and pacing delay
//
// Returns: Found(path) or Exhausted; Err only if the goal page itself
// can't be fetched to build the keyword index
pub async fn run_race<W: Fetch>(
    wiki: &W,
    start: &str,
    goal: &str,
    config: &RaceConfig,
) -> Result<RaceOutcome> {
    // The goal page is fetched exactly once, before the race starts,
    // to seed the keyword index. This one failure is fatal - without
    // keywords there is nothing to race with.
    let goal_html = wiki.fetch(goal).await?;
    let seeds = extract::extract_seed_terms(&goal_html, goal);
    let keywords = KeywordIndex::build(&seeds, config.greed);
    print_keywords(&keywords);

    let frontier = Frontier::new(Article::root(start));
    let visited = VisitedSet::new(start);

    // One loop iteration = one generation
    loop {
        // Expand the best article discovered anywhere so far
        let article = match frontier.take_front() {
            Some(article) => article,
            None => return Ok(RaceOutcome::Exhausted),
        };

        // Fetch the article and pull out its links. If the fetch keeps
        // failing, the article is treated as a leaf with no links - the
        // race continues from the rest of the frontier.
        let no_cancel = AtomicBool::new(false);
        let links = match fetch_with_retry(wiki, &article.url, &no_cancel).await {
            Some(html) => extract::extract_article_links(&html, &article.url),
            None => Vec::new(),
        };

        let batch = Batch::new(links);
        println!(
            "  Expanding [score {}]: {} ({} links, frontier {}, visited {})",
            article.score,
            article.url,
            batch.len(),
            frontier.len(),
            visited.len()
        );

        // Run the worker pool to completion - join_all is our barrier.
        // The pool is created fresh each generation and every worker works
        // on the same shared batch until it runs dry.
        let found = AtomicBool::new(false);
        let generation = Generation {
            wiki,
            goal,
            parent: &article,
            frontier: &frontier,
            batch: &batch,
            visited: &visited,
            keywords: &keywords,
            found: &found,
            delay: config.delay,
        };
        let pool = (0..config.workers.max(1)).map(|_| scan_worker(&generation));
        let results = join_all(pool).await;

        // Did any worker reach the goal?
        if let Some(path) = results.into_iter().flatten().next() {
            println!("Done!");
            return Ok(RaceOutcome::Found(path));
        }
    }
}

// One worker's life: keep taking links from the batch until it runs dry
//
// For every link, in this order:
// 1. Skip it if it has been visited (best-effort - see queue::VisitedSet)
// 2. Mark it visited
// 3. If it's the goal, clear the batch so the other workers stop early,
//    and return the completed path
// 4. Skip it if the race isn't allowed to go there (other languages,
//    the Main Page)
// 5. Otherwise fetch it, score it, and insert it into the frontier
//
// Returns Some(path) if this worker found the goal, None otherwise.
async fn scan_worker<W: Fetch>(generation: &Generation<'_, W>) -> Option<Vec<String>> {
    loop {
        // Slight delay on every iteration to avoid denied responses
        sleep(generation.delay).await;

        let url = match generation.batch.take_front() {
            Some(url) => url,
            // Batch drained (or cleared by a winner) - this worker is done
            None => return None,
        };

        // contains() and mark() are two separate atomic steps, so two
        // workers can occasionally both get past this check with the same
        // URL. That only costs a duplicate fetch, so it is tolerated.
        if generation.visited.contains(&url) {
            continue;
        }
        generation.visited.mark(url.clone());

        if url == generation.goal {
            // The correct link was found! Empty the batch so the other
            // workers run dry instead of finishing the generation.
            generation.found.store(true, Ordering::SeqCst);
            generation.batch.clear();
            return Some(Article::child(generation.parent, url, 0).path);
        }

        // Only explore English Wikipedia articles, and never the Main Page
        if !extract::is_explorable(&url) {
            continue;
        }

        // A link that can't be fetched is dropped, not fatal
        let html = match fetch_with_retry(generation.wiki, &url, generation.found).await {
            Some(html) => html,
            None => continue,
        };

        let score = generation.keywords.score(&url, &html);
        generation
            .frontier
            .insert(Article::child(generation.parent, url, score));
    }
}

// Fetches a page, retrying transient failures a bounded number of times
//
// Backoff is linear: 250ms after the first failure, 500ms after the
// second, and so on. The `cancelled` flag is checked before every attempt
// so a worker stops retrying as soon as a sibling has found the goal.
//
// Returns None when cancelled or when every attempt failed.
async fn fetch_with_retry<W: Fetch>(
    wiki: &W,
    url: &str,
    cancelled: &AtomicBool,
) -> Option<String> {
    for attempt in 1..=FETCH_ATTEMPTS {
        if cancelled.load(Ordering::SeqCst) {
            return None;
        }
        match wiki.fetch(url).await {
            Ok(html) => return Some(html),
            Err(e) if attempt == FETCH_ATTEMPTS => {
                eprintln!("  Warning: giving up on {}: {}", url, e);
            }
            Err(_) => {
                sleep(RETRY_BACKOFF * attempt).await;
            }
        }
    }
    None
}

// Prints the keyword tiers, strongest first, like a race card
fn print_keywords(keywords: &KeywordIndex) {
    println!(
        "🔑 Keywords: {} high / {} mid / {} low priority",
        keywords.high().len(),
        keywords.mid().len(),
        keywords.low().len()
    );
    for (name, tier) in [
        ("high", keywords.high()),
        ("mid", keywords.mid()),
        ("low", keywords.low()),
    ] {
        if !tier.is_empty() {
            println!("   {}: {}", name, tier.join(", "));
        }
    }
    println!("🔎 Scanning articles...");
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why join_all instead of tokio::spawn?
//    - join_all polls all the worker futures concurrently inside the
//      current task, so the workers can simply borrow the shared state
//    - tokio::spawn would need everything wrapped in Arc and 'static
//    - The workers spend their time waiting on the network, so one task
//      driving all of them is plenty
//
// 2. What is AtomicBool?
//    - A boolean that can be read and written from concurrent code
//      without a Mutex
//    - We use it as a one-way "the race is over" signal
//
// 3. Why does the winner clear the batch but not the frontier?
//    - Clearing the batch stops this generation's workers early
//    - The frontier belongs to the race as a whole; once a path is found
//      the coordinator returns and the frontier is simply dropped
// -----------------------------------------------------------------------------
