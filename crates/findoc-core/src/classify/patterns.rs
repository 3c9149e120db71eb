//! Regex tables for amount, bonus, and financial-link matching.
//!
//! These are immutable, data-driven configuration: built once, never
//! mutated. Amount and bonus thresholds live in [`crate::classify`].

use lazy_static::lazy_static;
use regex::Regex;

/// One amount matcher, tagged with the currency/format it targets.
pub struct AmountPattern {
    /// Short tag naming the format ("ruble-suffix", "usd-prefix", ...).
    pub format: &'static str,
    pub regex: Regex,
}

lazy_static! {
    /// Ordered amount pattern table. Order defines scan priority; matches
    /// from all patterns are unioned.
    pub static ref AMOUNT_PATTERNS: Vec<AmountPattern> = vec![
        AmountPattern {
            format: "ruble-suffix",
            regex: Regex::new(r"(?i)\d+[.,]\d{2}\s*(?:руб|₽|rub)").unwrap(),
        },
        AmountPattern {
            format: "usd-prefix",
            regex: Regex::new(r"(?i)\$\s*\d+[.,]\d{2}").unwrap(),
        },
        AmountPattern {
            format: "eur-prefix",
            regex: Regex::new(r"(?i)€\s*\d+[.,]\d{2}").unwrap(),
        },
        AmountPattern {
            format: "gbp-prefix",
            regex: Regex::new(r"(?i)£\s*\d+[.,]\d{2}").unwrap(),
        },
        AmountPattern {
            format: "code-suffix",
            regex: Regex::new(r"(?i)\d+[.,]\d{2}\s*(?:USD|EUR|GBP)").unwrap(),
        },
        AmountPattern {
            format: "keyword-prefix",
            regex: Regex::new(r"(?i)(?:итого|total|sum|amount)[\s:]*\d+[.,]\d{2}").unwrap(),
        },
    ];

    /// Invoice-family token in any lexicon language. Worth one +10 bonus.
    pub static ref INVOICE_FAMILY: Regex =
        Regex::new(r"(?i)(invoice|счет|facture|rechnung)").unwrap();

    /// Receipt-family token in any lexicon language. Worth one +10 bonus.
    pub static ref RECEIPT_FAMILY: Regex =
        Regex::new(r"(?i)(receipt|квитанция|reçu|quittung)").unwrap();

    /// URL patterns whose path/host suggests billing or receipt content,
    /// grouped by token language: English, Russian, French/German.
    pub static ref FINANCIAL_LINK_PATTERNS: Vec<Regex> = vec![
        Regex::new(r#"(?i)https?://[^\s<>"]*(?:receipt|invoice|bill|payment|transaction)[^\s<>"]*"#)
            .unwrap(),
        Regex::new(r#"(?i)https?://[^\s<>"]*(?:квитанц|счет|платеж|оплат)[^\s<>"]*"#).unwrap(),
        Regex::new(r#"(?i)https?://[^\s<>"]*(?:facture|rechnung|paiement|zahlung)[^\s<>"]*"#)
            .unwrap(),
    ];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn amount_patterns_are_case_insensitive() {
        assert!(AMOUNT_PATTERNS[0].regex.is_match("1500.00 РУБ"));
        assert!(AMOUNT_PATTERNS[4].regex.is_match("99,90 usd"));
    }

    #[test]
    fn bonus_families_cover_all_four_languages() {
        for token in ["invoice", "счет", "facture", "rechnung"] {
            assert!(INVOICE_FAMILY.is_match(token), "missed {token}");
        }
        for token in ["receipt", "квитанция", "reçu", "quittung"] {
            assert!(RECEIPT_FAMILY.is_match(token), "missed {token}");
        }
    }

    #[test]
    fn link_patterns_stop_at_whitespace_and_angle_brackets() {
        let m = FINANCIAL_LINK_PATTERNS[0]
            .find("see <https://pay.example.com/invoice/9> now")
            .unwrap();
        assert_eq!(m.as_str(), "https://pay.example.com/invoice/9");
    }
}
