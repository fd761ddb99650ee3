pub mod verdict;

// Re-export common types
pub use verdict::{CheckUrlRequest, DomainParts, PatternFindings, Verdict};
