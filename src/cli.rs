// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// The four positional arguments are all required, in this order:
//   <url> <maxThreads> <delay> <depth>
// Everything else is an optional flag.
//
// Rust concepts:
// - Structs: Custom data types that group related data
// - Derive macros: Automatically generate code for our types
// =============================================================================

use clap::Parser;
use std::path::PathBuf;

use crate::config::DEFAULT_REQUEST_TIMEOUT_SECS;

// This struct represents our entire CLI application
//
// #[derive(Parser)] tells clap to automatically generate parsing code
// The #[command(...)] attributes configure how the CLI behaves
#[derive(Parser, Debug)]
#[command(
    name = "link-explorer",
    version = "0.1.0",
    about = "Probe common subdomains of a host and collect the reachable links they expose",
    long_about = "link-explorer fetches http/https variants of a host and its www, blog, shop and test \
                  subdomains in parallel, pulls every URL out of the pages, and keeps the ones that answer."
)]
pub struct Cli {
    /// Host to explore (e.g., example.com or https://example.com)
    pub url: String,

    /// Maximum number of pages fetched at the same time
    #[arg(value_name = "MAX_THREADS")]
    pub max_threads: usize,

    /// Milliseconds each worker waits after its requests
    #[arg(value_name = "DELAY")]
    pub delay: u64,

    /// Crawl depth (accepted for compatibility, only one level is fetched)
    #[arg(value_name = "DEPTH")]
    pub depth: usize,

    /// Save the found links to a file, one per line
    #[arg(long)]
    pub save: bool,

    /// File used by --save
    #[arg(long, default_value = "links.txt")]
    pub output: PathBuf,

    /// Output results in JSON format instead of a listing
    #[arg(long)]
    pub json: bool,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_REQUEST_TIMEOUT_SECS)]
    pub timeout: u64,
}
