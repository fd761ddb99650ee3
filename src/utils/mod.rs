// Utility modules for the phishing detector

pub mod pattern_scanner;
pub mod service_error;
pub mod validation;
pub mod virustotal_client;

pub use pattern_scanner::{
    has_excessive_subdomains, has_numbers_in_domain, has_special_chars, PatternScanner,
};
pub use service_error::ServiceError;
pub use validation::{ensure_scheme, require_non_empty};
pub use virustotal_client::{ReputationLookup, UrlReport, VirusTotalClient, VirusTotalError};
