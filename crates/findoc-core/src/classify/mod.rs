//! Content classification: orchestrates extraction, language detection,
//! keyword/amount scoring, and the financial decision.

pub mod amounts;
pub mod keywords;
pub mod lexicon;
pub mod links;
pub mod patterns;

use tracing::{debug, info};

use crate::extract::TextExtractor;
use crate::lang::{LanguageDetect, WhatlangDetector};
use crate::models::DocumentAnalysis;

use self::amounts::AmountExtractor;
use self::keywords::KeywordScorer;
use self::lexicon::{FALLBACK_LANGUAGE, FinancialLexicon};
use self::links::LinkSignalExtractor;

/// Minimum score for a text to count as financial (a single matched amount
/// also suffices, regardless of score).
pub const FINANCIAL_THRESHOLD: u32 = 15;
/// Points per keyword occurrence.
pub const KEYWORD_POINTS: u32 = 2;
/// Cap on the keyword contribution.
pub const KEYWORD_SCORE_CAP: u32 = 20;
/// Points per amount match (pre-truncation count).
pub const AMOUNT_POINTS: u32 = 5;
/// Cap on the amount contribution.
pub const AMOUNT_SCORE_CAP: u32 = 20;
/// Bonus for an invoice-family or receipt-family token; the two are
/// independent and may both fire.
pub const PATTERN_BONUS: u32 = 10;
/// Points per financial link in email-body mode.
pub const LINK_POINTS: u32 = 3;
/// At most this many links contribute to the score and the keyword labels.
pub const MAX_LINK_BOOST: usize = 3;
/// Email-body scores are capped here; attachment scores are uncapped but
/// bounded to 60 by the formula.
pub const EMAIL_SCORE_CAP: u32 = 100;
/// Reported keyword list cap (link labels may push past it, see
/// [`ContentClassifier::classify_email_body`]).
pub const MAX_KEYWORDS: usize = 5;
/// Reported amount list cap.
pub const MAX_AMOUNTS: usize = 3;
/// Snippet length, in characters, kept on the analysis record.
pub const SNIPPET_CHARS: usize = 1000;
/// Characters of a link kept in its `link:...` keyword label.
pub const LINK_LABEL_CHARS: usize = 30;
/// Orchestrator policy constant: an email-body result is worth persisting
/// alongside analyzed attachments only above this score.
pub const EMAIL_PERSIST_THRESHOLD: u32 = 25;

/// Media type recorded for email-body analyses.
const EMAIL_CONTENT_MIME: &str = "text/html";

/// Intermediate scoring state shared by both classification modes.
struct TextAnalysis {
    score: u32,
    language: String,
    keywords: Vec<String>,
    amounts: Vec<String>,
    /// Match count before truncation to [`MAX_AMOUNTS`]; drives both the
    /// amount score and the decision.
    amount_matches: usize,
}

/// Classifies extracted text as financial (receipt/invoice/bill) or not.
///
/// A pure, stateless transform per call: safe to share across threads and
/// invoke concurrently for independent documents. Extraction can be slow on
/// pathological inputs, so callers should impose a per-document timeout.
pub struct ContentClassifier<D: LanguageDetect = WhatlangDetector> {
    extractor: TextExtractor,
    detector: D,
    lexicon: FinancialLexicon,
    amounts: AmountExtractor,
    links: LinkSignalExtractor,
}

impl ContentClassifier<WhatlangDetector> {
    /// Classifier with the default extractor and whatlang detection.
    pub fn new() -> Self {
        Self::with_components(TextExtractor::new(), WhatlangDetector::new())
    }
}

impl Default for ContentClassifier<WhatlangDetector> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: LanguageDetect> ContentClassifier<D> {
    /// Classifier with a custom language detector.
    pub fn with_detector(detector: D) -> Self {
        Self::with_components(TextExtractor::new(), detector)
    }

    /// Classifier with custom extraction and detection collaborators.
    pub fn with_components(extractor: TextExtractor, detector: D) -> Self {
        Self {
            extractor,
            detector,
            lexicon: FinancialLexicon::new(),
            amounts: AmountExtractor::new(),
            links: LinkSignalExtractor::new(),
        }
    }

    /// Analyze an attachment's byte content.
    ///
    /// Returns `None` when no text could be extracted or the text is not
    /// financial. Never fails: unreadable media degrades to no result.
    pub fn classify_attachment(
        &self,
        data: &[u8],
        mime_type: &str,
        filename: &str,
    ) -> Option<DocumentAnalysis> {
        let text = self.extractor.extract(data, mime_type);
        if text.is_empty() {
            debug!("no text extracted from {filename} ({mime_type})");
            return None;
        }

        let analysis = self.analyze_text(&text);
        if !is_financial(analysis.score, analysis.amount_matches) {
            return None;
        }

        info!(
            "financial document: {filename} (score {}, language {})",
            analysis.score, analysis.language
        );

        Some(DocumentAnalysis {
            filename: filename.to_string(),
            mime_type: mime_type.to_string(),
            text_snippet: snippet(&text),
            language: analysis.language,
            financial_score: analysis.score,
            keywords_found: analysis.keywords,
            amounts_found: analysis.amounts,
            is_financial: true,
        })
    }

    /// Analyze a message body (plus subject) without attachments.
    ///
    /// The subject is prepended to the body for analysis. Financial links in
    /// the raw body boost the score by [`LINK_POINTS`] each (at most
    /// [`MAX_LINK_BOOST`] links) and add `link:...` labels to the keyword
    /// list. The labels are appended after the list's [`MAX_KEYWORDS`] cap
    /// without re-deduplication, so the reported list can exceed the cap —
    /// kept for compatibility with stored rows.
    pub fn classify_email_body(&self, body: &str, subject: &str) -> Option<DocumentAnalysis> {
        let full_text = format!("{subject}\n{body}");
        if full_text.trim().is_empty() {
            return None;
        }

        let mut analysis = self.analyze_text(&full_text);

        let links = self.links.extract(body);
        if !links.is_empty() {
            debug!("{} financial link(s) in body", links.len());
            analysis.score += LINK_POINTS * links.len().min(MAX_LINK_BOOST) as u32;
            for link in links.iter().take(MAX_LINK_BOOST) {
                let head: String = link.chars().take(LINK_LABEL_CHARS).collect();
                analysis.keywords.push(format!("link:{head}..."));
            }
        }

        if !is_financial(analysis.score, analysis.amount_matches) {
            return None;
        }

        info!(
            "financial email content (score {}, language {})",
            analysis.score, analysis.language
        );

        Some(DocumentAnalysis {
            filename: DocumentAnalysis::EMAIL_CONTENT.to_string(),
            mime_type: EMAIL_CONTENT_MIME.to_string(),
            text_snippet: snippet(&full_text),
            language: analysis.language,
            financial_score: analysis.score.min(EMAIL_SCORE_CAP),
            keywords_found: analysis.keywords,
            amounts_found: analysis.amounts,
            is_financial: true,
        })
    }

    /// Single-pass scoring shared by both modes: language detection,
    /// keyword score, amount score, and the two pattern bonuses.
    fn analyze_text(&self, text: &str) -> TextAnalysis {
        let text_lower = text.to_lowercase();
        let language = self.detect_language(text);

        let hits = KeywordScorer::new(&self.lexicon).score(&text_lower, &language);
        let keyword_score = (hits.count as u32 * KEYWORD_POINTS).min(KEYWORD_SCORE_CAP);

        let matches = self.amounts.extract_all(text);
        let amount_matches = matches.len();
        let amount_score = (amount_matches as u32 * AMOUNT_POINTS).min(AMOUNT_SCORE_CAP);

        let mut score = keyword_score + amount_score;
        if patterns::INVOICE_FAMILY.is_match(&text_lower) {
            score += PATTERN_BONUS;
        }
        if patterns::RECEIPT_FAMILY.is_match(&text_lower) {
            score += PATTERN_BONUS;
        }

        debug!(
            "scored text: {score} (keywords {keyword_score}, amounts {amount_score}, language {language})"
        );

        TextAnalysis {
            score,
            language,
            keywords: hits.keywords,
            amounts: matches
                .into_iter()
                .take(MAX_AMOUNTS)
                .map(|m| m.text)
                .collect(),
            amount_matches,
        }
    }

    /// Detection failures and languages absent from the lexicon collapse to
    /// English.
    fn detect_language(&self, text: &str) -> String {
        match self.detector.detect(text) {
            Some(code) if self.lexicon.contains_language(&code) => code,
            _ => FALLBACK_LANGUAGE.to_string(),
        }
    }
}

fn is_financial(score: u32, amount_matches: usize) -> bool {
    score >= FINANCIAL_THRESHOLD || amount_matches > 0
}

/// First [`SNIPPET_CHARS`] characters, bounding what persistence stores.
fn snippet(text: &str) -> String {
    text.chars().take(SNIPPET_CHARS).collect()
}
