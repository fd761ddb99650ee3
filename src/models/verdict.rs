// URL check request/response models
// Everything here lives for a single request and is never stored

use serde::{Deserialize, Serialize};

// =============================================================================
// REQUEST
// =============================================================================

/// Body of `POST /check_url`
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CheckUrlRequest {
    #[serde(default)]
    pub url: Option<String>,
}

// =============================================================================
// DERIVED URL COMPONENTS
// =============================================================================

/// Public-suffix-aware decomposition of a URL host.
///
/// For `http://foo.bar.co.uk` this is `subdomain = "foo"`, `domain = "bar"`,
/// `suffix = "co.uk"`. Any part that cannot be determined is empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DomainParts {
    pub subdomain: String,
    pub domain: String,
    pub suffix: String,
}

// =============================================================================
// RESPONSE
// =============================================================================

/// Results of the three structural heuristics
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternFindings {
    pub numbers_in_domain: bool,
    pub excessive_subdomains: bool,
    pub special_chars: bool,
}

impl PatternFindings {
    /// True if at least one heuristic fired
    pub fn any(&self) -> bool {
        self.numbers_in_domain || self.excessive_subdomains || self.special_chars
    }
}

/// Response body of `POST /check_url`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verdict {
    /// The URL as checked, with `http://` prepended when no scheme was given
    pub url: String,
    pub is_suspicious: bool,
    pub virustotal_blacklisted: bool,
    pub suspicious_patterns: PatternFindings,
}

impl Verdict {
    /// Human-readable reasons the URL was flagged, in a fixed order
    pub fn reasons(&self) -> Vec<&'static str> {
        let flags = [
            (self.suspicious_patterns.numbers_in_domain, "Numbers in domain"),
            (self.suspicious_patterns.excessive_subdomains, "Excessive subdomains"),
            (self.suspicious_patterns.special_chars, "Special characters"),
            (self.virustotal_blacklisted, "Blacklisted by VirusTotal"),
        ];

        flags
            .into_iter()
            .filter_map(|(flagged, reason)| flagged.then_some(reason))
            .collect()
    }

    pub fn new(url: String, virustotal_blacklisted: bool, suspicious_patterns: PatternFindings) -> Self {
        Self {
            url,
            is_suspicious: virustotal_blacklisted || suspicious_patterns.any(),
            virustotal_blacklisted,
            suspicious_patterns,
        }
    }
}
