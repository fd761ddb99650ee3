// Structural URL heuristics
// Three independent predicates over the raw URL and its public-suffix split

use crate::models::{DomainParts, PatternFindings};
use once_cell::sync::Lazy;
use regex::Regex;
use tldextract::{TldExtractor, TldOption};
use tracing::debug;
use url::{Host, Url};

/// Anything outside plain URL syntax. `:` and `/` are allowed.
static SPECIAL_CHARS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^a-zA-Z0-9.:/-]").expect("special character regex is valid"));

/// More subdomain pieces than this is suspicious
const MAX_SUBDOMAIN_PIECES: usize = 2;

// =============================================================================
// DOMAIN EXTRACTION
// =============================================================================

impl DomainParts {
    /// Split the host of `url` into subdomain / registrable domain / suffix.
    ///
    /// Unparseable URLs and URLs without a host give empty parts. IP literals
    /// have no public suffix, so the whole address is treated as the domain.
    /// Internationalized labels come back in Unicode, as typed.
    pub fn extract(extractor: &TldExtractor, url: &str) -> Self {
        let parsed = match Url::parse(url) {
            Ok(parsed) => parsed,
            Err(e) => {
                debug!("Cannot parse {} for domain extraction: {}", url, e);
                return Self::default();
            },
        };

        let host = match parsed.host() {
            Some(Host::Domain(domain)) => domain.trim_end_matches('.').to_string(),
            Some(Host::Ipv4(addr)) => {
                return Self {
                    domain: addr.to_string(),
                    ..Self::default()
                }
            },
            Some(Host::Ipv6(addr)) => {
                return Self {
                    domain: addr.to_string(),
                    ..Self::default()
                }
            },
            None => return Self::default(),
        };

        // The host is punycode here; labels are reported in Unicode so that
        // `xn--` encodings never contribute digits of their own
        match extractor.extract(&format!("http://{}", host)) {
            Ok(result) => Self {
                subdomain: to_unicode(result.subdomain.unwrap_or_default()),
                domain: to_unicode(result.domain.unwrap_or_default()),
                suffix: to_unicode(result.suffix.unwrap_or_default()),
            },
            Err(e) => {
                debug!("Public suffix extraction failed for {}: {:?}", host, e);
                Self::default()
            },
        }
    }
}

/// Decode punycode labels, keeping the input if decoding fails
fn to_unicode(labels: String) -> String {
    if !labels.contains("xn--") {
        return labels;
    }
    match idna::domain_to_unicode(&labels) {
        (decoded, Ok(())) => decoded,
        (_, Err(e)) => {
            debug!("Cannot decode {} to Unicode: {:?}", labels, e);
            labels
        },
    }
}

// =============================================================================
// PREDICATES
// =============================================================================

/// The registrable domain label contains a decimal digit
pub fn has_numbers_in_domain(parts: &DomainParts) -> bool {
    parts.domain.chars().any(|c| c.is_ascii_digit())
}

/// The subdomain splits into more than two dot-separated pieces.
///
/// An empty subdomain still counts as one piece, so this needs 3+ labels.
pub fn has_excessive_subdomains(parts: &DomainParts) -> bool {
    parts.subdomain.split('.').count() > MAX_SUBDOMAIN_PIECES
}

/// The raw URL contains a character outside `[a-zA-Z0-9.:/-]`
pub fn has_special_chars(url: &str) -> bool {
    SPECIAL_CHARS.is_match(url)
}

// =============================================================================
// SCANNER
// =============================================================================

/// Runs the three heuristics against one URL.
///
/// Holds the public suffix list so it is loaded once per process.
pub struct PatternScanner {
    extractor: TldExtractor,
}

impl PatternScanner {
    pub fn new() -> Self {
        Self {
            extractor: TldExtractor::new(TldOption::default()),
        }
    }

    pub fn domain_parts(&self, url: &str) -> DomainParts {
        DomainParts::extract(&self.extractor, url)
    }

    /// Evaluate every heuristic. Never fails.
    pub fn scan(&self, url: &str) -> PatternFindings {
        let parts = self.domain_parts(url);

        PatternFindings {
            numbers_in_domain: has_numbers_in_domain(&parts),
            excessive_subdomains: has_excessive_subdomains(&parts),
            special_chars: has_special_chars(url),
        }
    }
}

impl Default for PatternScanner {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn parts(subdomain: &str, domain: &str, suffix: &str) -> DomainParts {
        DomainParts {
            subdomain: subdomain.to_string(),
            domain: domain.to_string(),
            suffix: suffix.to_string(),
        }
    }

    #[test]
    fn test_domain_extraction_uses_public_suffix_list() {
        let scanner = PatternScanner::new();

        assert_eq!(
            scanner.domain_parts("http://foo.bar.co.uk"),
            parts("foo", "bar", "co.uk")
        );
        assert_eq!(
            scanner.domain_parts("https://example.com/path?q=1"),
            parts("", "example", "com")
        );
        assert_eq!(
            scanner.domain_parts("http://a.b.c.example.com"),
            parts("a.b.c", "example", "com")
        );
    }

    #[test]
    fn test_domain_extraction_degenerate_inputs() {
        let scanner = PatternScanner::new();

        assert_eq!(scanner.domain_parts("not a url"), DomainParts::default());
        assert_eq!(scanner.domain_parts("example.com"), DomainParts::default());
        assert_eq!(scanner.domain_parts("http://exa mple.com"), DomainParts::default());
        assert_eq!(
            scanner.domain_parts("http://192.168.0.1/login"),
            parts("", "192.168.0.1", "")
        );
    }

    #[test]
    fn test_internationalized_domains_keep_unicode_labels() {
        let scanner = PatternScanner::new();

        assert_eq!(scanner.domain_parts("http://例え.jp"), parts("", "例え", "jp"));
        assert_eq!(
            scanner.domain_parts("http://www.例え.jp").subdomain,
            "www"
        );

        // Punycode of these labels contains digits; the names themselves don't
        for url in ["http://例え.jp", "http://пример.рф", "http://www.例え.jp/path"] {
            let findings = scanner.scan(url);
            assert!(!findings.numbers_in_domain, "numbers_in_domain for {}", url);
            assert!(findings.special_chars, "special_chars for {}", url);
        }

        // A real digit in a Unicode label still counts
        assert!(scanner.scan("http://例え1.jp").numbers_in_domain);
    }

    #[test]
    fn test_numbers_in_domain() {
        assert!(has_numbers_in_domain(&parts("", "4chan", "org")));
        assert!(has_numbers_in_domain(&parts("sub", "4domain", "co.uk")));
        assert!(!has_numbers_in_domain(&parts("", "example", "com")));
        // Digits outside the registrable label don't count
        assert!(!has_numbers_in_domain(&parts("www2", "example", "com")));
        assert!(!has_numbers_in_domain(&DomainParts::default()));
    }

    #[test]
    fn test_excessive_subdomains_threshold() {
        assert!(!has_excessive_subdomains(&parts("", "example", "com")));
        assert!(!has_excessive_subdomains(&parts("a", "example", "com")));
        assert!(!has_excessive_subdomains(&parts("www.mail", "example", "com")));
        assert!(has_excessive_subdomains(&parts("a.b.c", "example", "com")));
    }

    #[test]
    fn test_special_chars() {
        assert!(has_special_chars("http://exa mple.com"));
        assert!(has_special_chars("http://example.com/?q=1"));
        assert!(has_special_chars("http://example.com/a_b"));
        assert!(has_special_chars("http://exämple.com"));
        assert!(!has_special_chars("http://example.com/path-1"));
        assert!(!has_special_chars("https://example.com:8443/a/b.html"));
    }

    #[test]
    fn test_scan_examples() {
        let scanner = PatternScanner::new();

        let findings = scanner.scan("http://4chan.org");
        assert!(findings.numbers_in_domain);
        assert!(!findings.excessive_subdomains);
        assert!(!findings.special_chars);

        let findings = scanner.scan("http://sub.4domain.co.uk");
        assert!(findings.numbers_in_domain);

        let findings = scanner.scan("http://a.b.c.example.com");
        assert!(findings.excessive_subdomains);
        assert!(!findings.numbers_in_domain);

        let findings = scanner.scan("http://a.example.com");
        assert_eq!(findings, PatternFindings::default());
    }

    #[test]
    fn test_scan_phishing_lookalike() {
        let scanner = PatternScanner::new();

        let findings = scanner.scan("http://paypal-secure.login-verify123.xyz");
        assert!(findings.numbers_in_domain);
        assert!(!findings.excessive_subdomains);
        assert!(!findings.special_chars);
        assert!(findings.any());
    }

    #[test]
    fn test_scan_malformed_only_checks_raw_string() {
        let scanner = PatternScanner::new();

        let findings = scanner.scan("http://exa mple.com");
        assert!(!findings.numbers_in_domain);
        assert!(!findings.excessive_subdomains);
        assert!(findings.special_chars);
    }
}
