// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Reject malformed URLs and sites whose robots.txt says "Disallow: /"
// 3. Crawl the candidate URLs and print the links that answered
// 4. Optionally save them (--save)
// 5. Exit with proper code (0 = done, 1 = bad input or refused, 2 = error)
//
// Rust concepts used:
// - async/await: Because we need to make many network requests concurrently
// - Result<T, E>: For error handling (T = success type, E = error type)
// - Generics: `explore` works with any Transport, real or stubbed
// =============================================================================

// Module declarations - tells Rust about our other source files
mod cli;           // src/cli.rs - command-line parsing
mod config;        // src/config.rs - crawl parameters
mod checker;       // src/checker/ - fetching, link extraction, probing
mod crawl;         // src/crawl/ - candidate generation and the worker pool
mod gate;          // src/gate/ - URL and robots.txt checks
mod logging;       // src/logging.rs - tracing setup
mod report;        // src/report.rs - output and saving

// Import items we need from our modules
use checker::{HttpTransport, Transport};
use clap::Parser;  // Parser trait enables the try_parse() method
use cli::Cli;
use config::CrawlConfig;

use anyhow::Result;
use tracing::{error, info};

#[tokio::main]
async fn main() {
    logging::init_logging();

    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            // If an unexpected error occurred, print it and exit with code 2
            eprintln!("Error: {:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

// Returns:
//   Ok(0) = crawl finished (even with zero links)
//   Ok(1) = wrong arguments, invalid URL, or robots.txt refusal
//   Err = unexpected error
async fn run() -> Result<i32> {
    // Wrong argument count or non-numeric values are usage errors (exit 1);
    // --help and --version print to stdout and exit 0
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let code = if e.use_stderr() { 1 } else { 0 };
            e.print()?;
            return Ok(code);
        }
    };

    let config = match CrawlConfig::try_from(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return Ok(1);
        }
    };

    let transport = HttpTransport::new(config.request_timeout)?;
    explore(&transport, &cli, &config).await
}

// Gates, crawl, report, save
async fn explore<T: Transport>(transport: &T, cli: &Cli, config: &CrawlConfig) -> Result<i32> {
    if !gate::is_valid_url(&cli.url) {
        eprintln!("Invalid URL: {}", cli.url);
        return Ok(1);
    }

    if !gate::is_allowed_by_robots(transport, &cli.url).await? {
        eprintln!("Crawling is disallowed by robots.txt.");
        return Ok(1);
    }

    if !cli.json {
        println!("🔍 Exploring: {}", cli.url);
        println!(
            "📊 Max threads: {}, delay: {}ms, depth: {}",
            config.max_threads,
            config.delay.as_millis(),
            config.depth
        );
        println!();
    }

    let report = crawl::crawl(transport, &cli.url, config).await;
    report::print_report(&report, cli.json)?;

    // A failed save is reported but does not change the exit code:
    // the links were already printed
    if cli.save {
        match report::save_links(&report.links, &cli.output) {
            Ok(()) => {
                info!(path = %cli.output.display(), links = report.links.len(), "links saved");
                if !cli.json {
                    println!("💾 Links saved to {}", cli.output.display());
                }
            }
            Err(e) => error!("{:#}", e),
        }
    }

    Ok(0)
}
