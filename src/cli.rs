// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// clap is a popular Rust library for parsing command-line arguments.
// We use the "derive" API which lets us define the CLI structure using
// Rust structs and attributes (the #[...] things).
//
// Rust concepts:
// - Structs: Custom data types that group related data
// - Enums: Types that can be one of several variants
// - Derive macros: Automatically generate code for our types
// =============================================================================

use clap::{Parser, Subcommand};

// This struct represents our entire CLI application
//
// #[derive(Parser)] tells clap to automatically generate parsing code
// The #[command(...)] attributes configure how the CLI behaves
#[derive(Parser, Debug)]
#[command(
    name = "wiki-race",
    version = "0.1.0",
    about = "Finds a short path of hyperlinks between two Wikipedia articles",
    long_about = "wiki-race starts at one Wikipedia article and follows links until it \
                  reaches another, guided by keywords pulled from the goal article. \
                  It usually finds a short path, though not always the shortest."
)]
pub struct Cli {
    // The #[command(subcommand)] attribute tells clap that this field
    // will hold one of the subcommands defined in the Commands enum
    #[command(subcommand)]
    pub command: Commands,
}

// This enum defines our subcommands (race, links)
//
// Each variant represents a different subcommand the user can run
// The fields inside each variant become the arguments for that subcommand
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Race from one Wikipedia article to another
    ///
    /// Example: wiki-race race https://en.wikipedia.org/wiki/Norway https://en.wikipedia.org/wiki/Cheese
    Race {
        /// The Wikipedia article URL to start from
        ///
        /// This is a positional argument (required, no flag needed)
        start_url: String,

        /// The Wikipedia article URL to find a path to
        goal_url: String,

        /// How greedy the keyword scoring should be (0-3)
        ///
        /// 0 = no keywords, pure breadth-first search (this will take forever)
        /// 1 = high priority keywords only
        /// 2 = mid and high priority, usually finds the best path (default)
        /// 3 = all keywords, finds a path very quickly but rarely the best one
        #[arg(long, default_value_t = 2)]
        greed: u8,

        /// Number of concurrent workers per generation
        ///
        /// Too many and Wikipedia starts denying requests eventually
        #[arg(long, default_value_t = 4)]
        workers: usize,

        /// Delay in milliseconds each worker sleeps between articles
        ///
        /// Spaces out our requests so we don't hammer the server
        #[arg(long, default_value_t = 10)]
        delay_ms: u64,

        /// Optional file to write the found path to, one URL per line
        #[arg(long)]
        output: Option<String>,

        /// Output the result in JSON format instead of plain text
        #[arg(long)]
        json: bool,
    },

    /// List the Wikipedia article links found on a single page
    ///
    /// Example: wiki-race links https://en.wikipedia.org/wiki/Nobel_Prize
    Links {
        /// The Wikipedia page URL to scan for article links
        url: String,

        /// Optional file to write the links to, one URL per line
        #[arg(long)]
        output: Option<String>,

        /// Output the links in JSON format instead of plain text
        #[arg(long)]
        json: bool,
    },
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why use structs and enums?
//    - Structs group related data (like the CLI arguments)
//    - Enums represent choices (like "race OR links")
//    - Both are core Rust types for organizing data
//
// 2. What are derive macros?
//    - #[derive(...)] automatically generates code for common operations
//    - Parser: generates CLI parsing logic
//    - Debug: generates code to print the struct for debugging
//
// 3. Why u8 for greed?
//    - Greed is a tiny number (0-3), so the smallest integer type fits
//    - Values above 3 just behave like 3 (no tiers left to prune)
//
// 4. What is Option<String>?
//    - Represents an argument the user may or may not pass
//    - Some(path) if --output was given, None otherwise
// -----------------------------------------------------------------------------
