// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Dispatch to the appropriate subcommand handler
// 3. Print the result (and optionally write it to a file)
// 4. Exit with proper code (0 = path found, 1 = no path, 2 = error)
//
// Rust concepts used:
// - async/await: Because the race makes many network requests concurrently
// - Result<T, E>: For error handling (T = success type, E = error type)
// - match: Pattern matching to handle different subcommands
// =============================================================================

// Module declarations - tells Rust about our other source files
mod cli; // src/cli.rs - command-line parsing
mod extract; // src/extract/ - pulling links and keywords out of HTML
mod fetch; // src/fetch/ - HTTP fetching behind the Fetch trait
mod race; // src/race/ - the search core

// Import items we need from our modules
use clap::Parser; // Parser trait enables the parse() method
use cli::{Cli, Commands};

// anyhow::Result is like std::result::Result but simpler for applications
// It lets us return any error type with the ? operator
use anyhow::{Context, Result};
use serde::Serialize;
use std::time::{Duration, Instant};

use fetch::{Fetch, HttpFetcher};
use race::{run_race, RaceConfig, RaceOutcome};

// The #[tokio::main] attribute transforms our async main into a real main
// function. It creates a tokio runtime and runs our async code inside it.
#[tokio::main]
async fn main() {
    // Run our application logic and capture the exit code
    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            // If an unexpected error occurred, print it and exit with code 2
            eprintln!("Error: {}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

// This is the main application logic
// Returns:
//   Ok(0) = path found / links listed
//   Ok(1) = no path found
//   Ok(2) = internal error
//   Err = unexpected error
async fn run() -> Result<i32> {
    // Parse command-line arguments into our Cli struct
    // This will automatically handle --help, --version, etc.
    let cli = Cli::parse();

    // Match on which subcommand was used
    match cli.command {
        Commands::Race {
            start_url,
            goal_url,
            greed,
            workers,
            delay_ms,
            output,
            json,
        } => {
            let config = RaceConfig {
                // Greed levels above 3 behave exactly like 3
                greed: greed.min(3),
                // A pool of zero workers would never drain a batch
                workers: workers.max(1),
                delay: Duration::from_millis(delay_ms),
            };
            handle_race(&start_url, &goal_url, &config, output.as_deref(), json).await
        }
        Commands::Links { url, output, json } => {
            handle_links(&url, output.as_deref(), json).await
        }
    }
}

// The JSON shape of a finished race, for --json output
#[derive(Serialize)]
struct RaceReport<'a> {
    start: &'a str,
    goal: &'a str,
    found: bool,
    /// Number of links followed (path length minus one); 0 when not found
    steps: usize,
    elapsed_seconds: f64,
    path: &'a [String],
}

// Handles the 'race' subcommand
//
// Parameters:
//   start: article URL the race begins at
//   goal: article URL the race tries to reach
//   config: greed / workers / delay, already validated
//   output: optional file to write the path to, one URL per line
//   json: whether to output JSON format
async fn handle_race(
    start: &str,
    goal: &str,
    config: &RaceConfig,
    output: Option<&str>,
    json: bool,
) -> Result<i32> {
    println!("🏁 Racing from {} to {}", start, goal);
    println!(
        "⚙️  greed {}, {} worker(s), {}ms delay",
        config.greed,
        config.workers,
        config.delay.as_millis()
    );

    let wiki = HttpFetcher::new()?;

    // Time the search, to report how long it took to find
    let started = Instant::now();
    let outcome = run_race(&wiki, start, goal, config).await?;
    let elapsed = started.elapsed();

    match outcome {
        RaceOutcome::Found(path) => {
            // Write the path to the output file if one was requested
            if let Some(file) = output {
                write_lines(file, &path)
                    .with_context(|| format!("Failed to write path to {}", file))?;
                println!("💾 Path written to {}", file);
            }

            if json {
                let report = RaceReport {
                    start,
                    goal,
                    found: true,
                    steps: path.len() - 1,
                    elapsed_seconds: elapsed.as_secs_f64(),
                    path: &path,
                };
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("\n🏆 PATH FOUND:");
                for url in &path {
                    println!("   {}", url);
                }
                println!(
                    "\nThe path is {} step(s) long and took {:.1}s to find.",
                    path.len() - 1,
                    elapsed.as_secs_f64()
                );
            }

            Ok(0) // Exit code 0 = path found
        }
        RaceOutcome::Exhausted => {
            if json {
                let report = RaceReport {
                    start,
                    goal,
                    found: false,
                    steps: 0,
                    elapsed_seconds: elapsed.as_secs_f64(),
                    path: &[],
                };
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!(
                    "\n❌ No path found - every reachable article was explored ({:.1}s).",
                    elapsed.as_secs_f64()
                );
            }

            Ok(1) // Exit code 1 = no path found
        }
    }
}

// The JSON shape of a links listing, for --json output
#[derive(Serialize)]
struct LinksReport<'a> {
    url: &'a str,
    count: usize,
    links: &'a [String],
}

// Handles the 'links' subcommand
//
// Fetches one page and lists the Wikipedia article links on it
async fn handle_links(url: &str, output: Option<&str>, json: bool) -> Result<i32> {
    println!("🔍 Scanning {}", url);

    let wiki = HttpFetcher::new()?;
    let html = wiki
        .fetch(url)
        .await
        .with_context(|| format!("Failed to fetch {}", url))?;

    let links = extract::extract_article_links(&html, url);

    if let Some(file) = output {
        write_lines(file, &links)
            .with_context(|| format!("Failed to write links to {}", file))?;
        println!("💾 Links written to {}", file);
    }

    if json {
        let report = LinksReport {
            url,
            count: links.len(),
            links: &links,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        for link in &links {
            println!("   {}", link);
        }
        println!("\n📋 {} article link(s) found", links.len());
    }

    Ok(0)
}

// Writes a list of URLs to a file, one per line
fn write_lines(file: &str, lines: &[String]) -> Result<()> {
    let mut contents = lines.join("\n");
    contents.push('\n');
    std::fs::write(file, contents)?;
    Ok(())
}
