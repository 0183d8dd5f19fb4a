// src/gate/address.rs
// Input URL validation.

use once_cell::sync::Lazy;
use regex::Regex;

// Optional scheme, a dotted hostname ending in a 2-6 letter TLD (or
// "localhost"), optional port, optional path. The regex only checks the
// port's shape; its range is checked separately.
static URL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^((http|https)://)?(([a-zA-Z0-9\-]+\.)+[a-zA-Z]{2,6}|localhost)(:(?P<port>\d+))?(/[\w\-._~:/?#\[\]@!$&'()*+,;=%]*)?$",
    )
    .expect("url pattern is valid")
});

pub fn is_valid_url(url: &str) -> bool {
    match URL_PATTERN.captures(url) {
        Some(caps) => caps
            .name("port")
            .map_or(true, |port| port.as_str().parse::<u16>().is_ok()),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_host() {
        assert!(is_valid_url("example.com"));
        assert!(is_valid_url("www.rust-lang.org"));
    }

    #[test]
    fn test_with_scheme_port_and_path() {
        assert!(is_valid_url("http://localhost:8080/path"));
        assert!(is_valid_url("https://example.com/docs/index.html?lang=en#top"));
        assert!(is_valid_url("localhost"));
    }

    #[test]
    fn test_rejects_garbage() {
        assert!(!is_valid_url("not a url"));
        assert!(!is_valid_url(""));
        assert!(!is_valid_url("example"));
        assert!(!is_valid_url("ftp://example.com"));
        assert!(!is_valid_url("example.c"));
        assert!(!is_valid_url("example.toolongtld"));
        assert!(!is_valid_url("http://example.com/has space"));
    }

    #[test]
    fn test_port_must_fit_in_u16() {
        assert!(is_valid_url("example.com:65535"));
        assert!(is_valid_url("http://localhost:1/docs"));
        assert!(!is_valid_url("example.com:65536"));
        assert!(!is_valid_url("example.com:99999"));
        assert!(!is_valid_url("http://localhost:123456789012/path"));
    }

    #[test]
    fn test_rejects_ip_addresses() {
        // The TLD must be letters
        assert!(!is_valid_url("127.0.0.1"));
    }
}
