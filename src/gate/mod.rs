// src/gate/mod.rs
// =============================================================================
// Checks that run before any crawling starts.
//
// - url: Is the input shaped like a host or URL at all?
// - robots: Does the site's robots.txt forbid crawling?
//
// Either check failing ends the program with exit code 1.
// =============================================================================

mod robots;
mod address;

pub use self::robots::is_allowed_by_robots;
pub use self::address::is_valid_url;
