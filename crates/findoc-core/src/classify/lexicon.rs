//! Per-language financial keyword lexicon.

/// Russian financial keywords, in scan order.
const RU_KEYWORDS: &[&str] = &[
    "квитанция",
    "чек",
    "счет",
    "оплата",
    "платеж",
    "сумма",
    "итого",
    "к доплате",
    "банк",
    "карта",
    "наличные",
    "услуги",
    "товары",
    "покупка",
    "руб",
    "рубл",
];

/// English financial keywords; always available as the universal fallback.
const EN_KEYWORDS: &[&str] = &[
    "receipt",
    "invoice",
    "bill",
    "payment",
    "total",
    "amount",
    "purchase",
    "transaction",
    "card",
    "cash",
    "bank",
    "due",
    "subtotal",
    "tax",
    "service",
    "goods",
];

/// German financial keywords.
const DE_KEYWORDS: &[&str] = &[
    "rechnung", "quittung", "zahlung", "summe", "gesamt", "betrag", "kauf", "bank", "karte", "bar",
];

/// French financial keywords.
const FR_KEYWORDS: &[&str] = &[
    "facture", "reçu", "paiement", "total", "montant", "achat", "banque", "carte", "espèces",
];

/// Language code the classifier falls back to when detection fails or
/// returns a language the lexicon does not know.
pub const FALLBACK_LANGUAGE: &str = "en";

/// Immutable mapping from language code to an ordered financial keyword
/// list. Constructed once, never mutated; `"en"` is always present.
#[derive(Debug, Clone, Default)]
pub struct FinancialLexicon;

impl FinancialLexicon {
    const ENTRIES: &'static [(&'static str, &'static [&'static str])] = &[
        ("ru", RU_KEYWORDS),
        ("en", EN_KEYWORDS),
        ("de", DE_KEYWORDS),
        ("fr", FR_KEYWORDS),
    ];

    pub fn new() -> Self {
        Self
    }

    /// Keyword list for a language, in scan order.
    pub fn keywords(&self, language: &str) -> Option<&'static [&'static str]> {
        Self::ENTRIES
            .iter()
            .find(|(code, _)| *code == language)
            .map(|(_, keywords)| *keywords)
    }

    /// Whether the lexicon has a keyword list for this language.
    pub fn contains_language(&self, language: &str) -> bool {
        self.keywords(language).is_some()
    }

    /// All language codes the lexicon knows.
    pub fn languages(&self) -> impl Iterator<Item = &'static str> {
        Self::ENTRIES.iter().map(|(code, _)| *code)
    }
}
