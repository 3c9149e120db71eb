//! Language-aware keyword scoring against the financial lexicon.

use std::collections::HashSet;

use super::MAX_KEYWORDS;
use super::lexicon::{FALLBACK_LANGUAGE, FinancialLexicon};

/// Result of scanning a text for lexicon keywords.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordHits {
    /// Total substring occurrences across all matched keywords. Unlike the
    /// reported list, this is not truncated.
    pub count: usize,
    /// Matched keywords in scan order, first occurrence only, at most
    /// [`MAX_KEYWORDS`] entries.
    pub keywords: Vec<String>,
}

/// Scores lowercased text against the detected language's keyword list,
/// with English as the universal fallback.
pub struct KeywordScorer<'a> {
    lexicon: &'a FinancialLexicon,
}

impl<'a> KeywordScorer<'a> {
    pub fn new(lexicon: &'a FinancialLexicon) -> Self {
        Self { lexicon }
    }

    /// Scan `text_lower` for keywords of `language`, then of English.
    ///
    /// When the detected language already is English its list is scanned
    /// once; a keyword string matched from an earlier list is not matched
    /// again (some keywords, like "bank", appear in several lists).
    pub fn score(&self, text_lower: &str, language: &str) -> KeywordHits {
        let mut languages = vec![language];
        if language != FALLBACK_LANGUAGE {
            languages.push(FALLBACK_LANGUAGE);
        }

        let mut count = 0;
        let mut keywords = Vec::new();
        let mut seen: HashSet<&str> = HashSet::new();

        for lang in languages {
            let Some(list) = self.lexicon.keywords(lang) else {
                continue;
            };
            for &keyword in list {
                if seen.contains(keyword) {
                    continue;
                }
                if text_lower.contains(keyword) {
                    seen.insert(keyword);
                    keywords.push(keyword.to_string());
                    count += text_lower.matches(keyword).count();
                }
            }
        }

        keywords.truncate(MAX_KEYWORDS);

        KeywordHits { count, keywords }
    }
}
