// src/checker/extract.rs
// =============================================================================
// This module finds links in a fetched page.
//
// We don't parse HTML here. Anything that looks like "http://..." or
// "https://..." counts as a link, up to the first whitespace or double quote.
// That also catches links in scripts, comments and plain text.
// =============================================================================

use once_cell::sync::Lazy;
use regex::Regex;

// Compiled once on first use and shared by every worker
static LINK_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"(http|https)://[^\s"]+"#).expect("link pattern is valid"));

// Returns the URL-shaped substrings of `body`, left to right
//
// The iterator is lazy and borrows from `body`: matches never overlap, and
// each one is as long as possible.
//
// Example:
//   body = r#"<a href="https://a.example/x">x</a> see http://b.example"#
//   result = ["https://a.example/x", "http://b.example"]
pub fn extract_links(body: &str) -> impl Iterator<Item = &str> + '_ {
    LINK_PATTERN.find_iter(body).map(|m| m.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_links() {
        assert_eq!(extract_links("<p>nothing to see here</p>").count(), 0);
        assert_eq!(extract_links("").count(), 0);
    }

    #[test]
    fn test_links_in_order() {
        let body = r#"
            <a href="https://www.rust-lang.org">Rust</a>
            <a href='/docs'>Docs</a>
            plain text http://example.com/about and https://crates.io/
        "#;
        let links: Vec<&str> = extract_links(body).collect();
        assert_eq!(
            links,
            vec!["https://www.rust-lang.org", "http://example.com/about", "https://crates.io/"]
        );
    }

    #[test]
    fn test_stops_at_quote_and_whitespace() {
        let links: Vec<&str> = extract_links(r#"href="https://a.example/x"next https://b.example/y z"#).collect();
        assert_eq!(links, vec!["https://a.example/x", "https://b.example/y"]);
    }

    #[test]
    fn test_adjacent_matches_are_not_double_counted() {
        // The first match swallows the second URL because there is no
        // separator between them
        let links: Vec<&str> = extract_links("https://a.example/https://b.example").collect();
        assert_eq!(links, vec!["https://a.example/https://b.example"]);
    }

    #[test]
    fn test_duplicates_are_kept() {
        let links: Vec<&str> = extract_links("http://a.example http://a.example").collect();
        assert_eq!(links.len(), 2);
    }

    #[test]
    fn test_scheme_only_is_not_a_link() {
        assert_eq!(extract_links("http:// https://").count(), 0);
    }
}
