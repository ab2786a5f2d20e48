// src/race/mod.rs
// =============================================================================
// This module contains the search core - the race itself.
//
// Submodules:
// - queue: The three shared containers the workers race over
//   (the scored frontier, the per-generation batch, the visited set)
// - keywords: The keyword index built from the goal page, and the scorer
// - search: The worker loop and the generation coordinator
//
// How a race works, in one paragraph: pop the highest-scoring article off
// the frontier, fetch it, hand its links to a small pool of workers, and
// wait for them all to finish. Each worker scores the links it picks up and
// pushes them back into the frontier, so the next generation starts from
// the most promising article found anywhere so far. When a worker steps on
// the goal, the race is over and its path is the answer.
// =============================================================================

mod keywords;
mod queue;
mod search;

// Re-export the public API
pub use search::{run_race, RaceConfig, RaceOutcome};
