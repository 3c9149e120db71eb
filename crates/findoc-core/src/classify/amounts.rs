//! Monetary amount extraction, independent of language.

use rust_decimal::Decimal;
use std::str::FromStr;

use super::patterns::AMOUNT_PATTERNS;

/// A matched amount literal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AmountMatch {
    /// The matched substring, exactly as found in the source text.
    pub text: String,
    /// Tag of the pattern that matched ("ruble-suffix", "usd-prefix", ...).
    pub format: &'static str,
}

/// Applies the ordered amount pattern table to original-case text.
///
/// Matching is case-insensitive; amount literals carry currency codes and
/// symbols unaffected by case, so the text is not lowercased first.
#[derive(Debug, Clone, Default)]
pub struct AmountExtractor;

impl AmountExtractor {
    pub fn new() -> Self {
        Self
    }

    /// All matches from all patterns, pattern order outer and match order
    /// inner. Duplicates are not removed; the classifier scores off the
    /// full count and truncates only the reported list.
    pub fn extract_all(&self, text: &str) -> Vec<AmountMatch> {
        let mut matches = Vec::new();

        for pattern in AMOUNT_PATTERNS.iter() {
            for m in pattern.regex.find_iter(text) {
                matches.push(AmountMatch {
                    text: m.as_str().to_string(),
                    format: pattern.format,
                });
            }
        }

        matches
    }
}

/// Normalize a matched amount literal to a numeric value.
///
/// Strips currency symbols, codes, and labels, then resolves `,` vs `.` as
/// the decimal separator ("1 234,56", "$ 12.50", "1500.00 руб").
pub fn parse_amount(literal: &str) -> Option<Decimal> {
    let cleaned: String = literal
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == ',' || *c == '.')
        .collect();

    if cleaned.is_empty() {
        return None;
    }

    let normalized = match (cleaned.rfind(','), cleaned.rfind('.')) {
        (Some(_), None) => cleaned.replace(',', "."),
        // Both present: the later one is the decimal separator.
        (Some(c), Some(d)) if c > d => cleaned.replace('.', "").replace(',', "."),
        (Some(_), Some(_)) => cleaned.replace(',', ""),
        _ => cleaned,
    };

    Decimal::from_str(&normalized).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn matches_each_currency_format() {
        let extractor = AmountExtractor::new();
        let cases = [
            ("ИТОГО: 1500.00 руб", "ruble-suffix"),
            ("price: $ 12.50", "usd-prefix"),
            ("total €9,99 due", "eur-prefix"),
            ("fare £20.00 single", "gbp-prefix"),
            ("paid 99.90 EUR today", "code-suffix"),
            ("amount: 42.00", "keyword-prefix"),
        ];

        for (text, format) in cases {
            let matches = extractor.extract_all(text);
            assert!(
                matches.iter().any(|m| m.format == format),
                "{text:?} did not match {format}"
            );
        }
    }

    #[test]
    fn reports_matched_substring_verbatim() {
        let extractor = AmountExtractor::new();
        let matches = extractor.extract_all("Due: $ 12,50 by friday");
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].text, "$ 12,50");
    }

    #[test]
    fn pattern_order_is_outer_sort_key() {
        let extractor = AmountExtractor::new();
        // The $ amount appears first in the text but the ruble pattern is
        // scanned first.
        let matches = extractor.extract_all("$5.00 and 300.00 руб");
        assert_eq!(matches[0].format, "ruble-suffix");
        assert_eq!(matches[1].format, "usd-prefix");
    }

    #[test]
    fn overlapping_patterns_duplicate_matches() {
        let extractor = AmountExtractor::new();
        // Matched by both the keyword-prefix and ruble-suffix patterns.
        let matches = extractor.extract_all("итого 250.00 руб");
        assert_eq!(matches.len(), 2);
    }

    #[test]
    fn no_match_without_two_decimal_places() {
        let extractor = AmountExtractor::new();
        assert!(extractor.extract_all("costs 1500 rubles, about $20").is_empty());
    }

    #[test]
    fn parse_amount_handles_separator_styles() {
        assert_eq!(parse_amount("1500.00 руб"), Some(Decimal::from_str("1500.00").unwrap()));
        assert_eq!(parse_amount("$ 12,50"), Some(Decimal::from_str("12.50").unwrap()));
        assert_eq!(parse_amount("1.234,56"), Some(Decimal::from_str("1234.56").unwrap()));
        assert_eq!(parse_amount("1,234.56"), Some(Decimal::from_str("1234.56").unwrap()));
        assert_eq!(parse_amount("no digits"), None);
    }
}
