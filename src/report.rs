// src/report.rs
// =============================================================================
// Shows the crawl results and optionally saves them.
//
// - print_report: boxed listing plus a short summary, or JSON with --json
// - save_links: one link per line, replacing the file if it exists
// =============================================================================

use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::crawl::{CrawlReport, FailedFetch};

// Prints the results either as a listing or JSON
pub fn print_report(report: &CrawlReport, json: bool) -> Result<()> {
    if json {
        let json_output = serde_json::to_string_pretty(report)?;
        println!("{}", json_output);
    } else {
        print_links(&report.links);
        print_summary(report);
    }
    Ok(())
}

fn print_links(links: &[String]) {
    println!("┌────────────────────────────────────┐");
    println!("│           Found Links              │");
    println!("├────────────────────────────────────┤");
    for link in links {
        println!("│ {}", link);
    }
    println!("└────────────────────────────────────┘");
}

fn print_summary(report: &CrawlReport) {
    println!();
    println!("📊 Summary:");
    println!("   🌐 Candidates probed: {}", report.candidates.len());
    println!("   ⚠️  Failed fetches: {}", report.failures.len());
    println!("   🔗 Links found: {}", report.links.len());

    print_failures(&report.failures);
}

fn print_failures(failures: &[FailedFetch]) {
    if failures.is_empty() {
        return;
    }

    println!();
    for failure in failures {
        println!("   ❌ {:<40} {}", failure.url, failure.reason);
    }
}

// Writes the links to `path`, one per line
pub fn save_links(links: &[String], path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Error opening {} for writing", path.display()))?;
    let mut writer = BufWriter::new(file);

    for link in links {
        writeln!(writer, "{}", link)?;
    }
    writer
        .flush()
        .with_context(|| format!("Error writing {}", path.display()))?;

    Ok(())
}
