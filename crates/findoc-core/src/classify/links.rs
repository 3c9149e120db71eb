//! Financial link signals in raw email bodies.

use std::collections::HashSet;

use super::patterns::FINANCIAL_LINK_PATTERNS;

/// Scans raw (non-lowercased) text for URLs whose path or host carries
/// billing/receipt tokens. Used only for email-body analysis.
#[derive(Debug, Clone, Default)]
pub struct LinkSignalExtractor;

impl LinkSignalExtractor {
    pub fn new() -> Self {
        Self
    }

    /// All matching URLs, deduplicated. First-seen order is kept for
    /// determinism but callers must not rely on any particular order.
    pub fn extract(&self, text: &str) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut links = Vec::new();

        for pattern in FINANCIAL_LINK_PATTERNS.iter() {
            for m in pattern.find_iter(text) {
                if seen.insert(m.as_str()) {
                    links.push(m.as_str().to_string());
                }
            }
        }

        links
    }
}
